//! Typed Rust client for the Lalamove Delivery v2 HTTP API.
//!
//! The design follows three layers: a domain layer of strong types, a
//! transport layer for wire-format quirks, and a small client layer that
//! signs each request (HMAC-SHA256, see [`signature`]) and maps the
//! server's error codes into a closed taxonomy.
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//!
//! use lalamove::{
//!     Address, CityCode, Contact, CountryCode, Credentials, LalamoveClient, Locale, Location,
//!     QuotationRequest, ServiceType, Waypoint,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::new("...", "...")?;
//!     let client = LalamoveClient::new(credentials, "https://sandbox-rest.lalamove.com")?;
//!
//!     let stop = |lat: &str, lng: &str, display: &str| Waypoint {
//!         location: Location { lat: lat.into(), lng: lng.into() },
//!         addresses: BTreeMap::from([(
//!             Locale::SingaporeEn,
//!             Address {
//!                 display_string: display.into(),
//!                 country: CountryCode::Singapore,
//!             },
//!         )]),
//!     };
//!     let request = QuotationRequest::new(
//!         ServiceType::Motorcycle,
//!         vec![
//!             stop("1.2840", "103.8510", "1 Raffles Place"),
//!             stop("1.3000", "103.8000", "30 Orchard Road"),
//!         ],
//!         Vec::new(),
//!         Contact { name: "Tan Wei".into(), phone: "98765432".into() },
//!     )?;
//!
//!     let quotation = client.quotation(CityCode::Singapore, &request).await?;
//!     println!("{} {}", quotation.amount_cents, quotation.currency);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod signature;
mod transport;

pub use client::{ApiError, Credentials, LalamoveClient, LalamoveClientBuilder, LalamoveError};
pub use domain::{
    Address, ApiKey, CityCode, Contact, Country, CountryCode, DeliveryInfo, DriverDetailsResponse,
    DriverId, DriverLocationResponse, Locale, Location, OrderDetailsResponse, OrderId,
    OrderStatus, PlaceOrderRequest, PlaceOrderResponse, Price, QuotationRequest,
    QuotationResponse, Secret, ServiceType, SpecialRequest, ValidationError, Waypoint,
};
