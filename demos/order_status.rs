use std::io;

use lalamove::{CityCode, Credentials, LalamoveClient, OrderId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("LALAMOVE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "LALAMOVE_API_KEY environment variable is required",
        )
    })?;
    let secret = std::env::var("LALAMOVE_SECRET").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "LALAMOVE_SECRET environment variable is required",
        )
    })?;
    let order_ref = std::env::var("LALAMOVE_ORDER_REF").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "LALAMOVE_ORDER_REF environment variable is required",
        )
    })?;
    let base_url = std::env::var("LALAMOVE_BASE_URL")
        .unwrap_or_else(|_| "https://sandbox-rest.lalamove.com".to_owned());

    let client = LalamoveClient::new(Credentials::new(api_key, secret)?, base_url)?;
    let order_id = OrderId::new(order_ref)?;

    let details = client
        .order_details(CityCode::Singapore, &order_id)
        .await?;
    println!(
        "status: {:?}, price: {} {}, driver: {:?}",
        details.status, details.price.amount_cents, details.price.currency, details.driver_id
    );

    Ok(())
}
