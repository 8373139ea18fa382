use std::collections::BTreeMap;
use std::io;

use lalamove::{
    Address, CityCode, Contact, CountryCode, Credentials, LalamoveClient, Locale, Location,
    QuotationRequest, ServiceType, Waypoint,
};

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
    let base_url = std::env::var("LALAMOVE_BASE_URL")
        .unwrap_or_else(|_| "https://sandbox-rest.lalamove.com".to_owned());

    let client = LalamoveClient::new(Credentials::new(api_key, secret)?, base_url)?;

    let stop = |lat: &str, lng: &str, display: &str| Waypoint {
        location: Location {
            lat: lat.to_owned(),
            lng: lng.to_owned(),
        },
        addresses: BTreeMap::from([(
            Locale::SingaporeEn,
            Address {
                display_string: display.to_owned(),
                country: CountryCode::Singapore,
            },
        )]),
    };
    let request = QuotationRequest::new(
        ServiceType::Motorcycle,
        vec![
            stop("1.2840", "103.8510", "1 Raffles Place"),
            stop("1.3000", "103.8000", "30 Orchard Road"),
        ],
        Vec::new(),
        Contact {
            name: "Tan Wei".to_owned(),
            phone: "98765432".to_owned(),
        },
    )?;

    let quotation = client.quotation(CityCode::Singapore, &request).await?;
    println!(
        "quoted fee: {} {}",
        quotation.amount_cents, quotation.currency
    );

    Ok(())
}
