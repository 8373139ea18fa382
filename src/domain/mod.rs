//! Domain layer: strong types with validation and invariants (no I/O).

mod geo;
mod order;
mod request;
mod response;
mod validation;
mod value;

pub use geo::{
    BRASIL, COUNTRIES, CityCode, Country, CountryCode, HONG_KONG, INDIA, INDONESIA, Locale,
    MALAYSIA, MEXICO, PHILIPPINES, SINGAPORE, TAIWAN, THAILAND, VIETNAM,
};
pub use order::{
    Address, Contact, DeliveryInfo, Location, OrderStatus, Price, ServiceType, SpecialRequest,
    Waypoint,
};
pub use request::{MAX_STOPS, MIN_STOPS, PlaceOrderRequest, QuotationRequest};
pub use response::{
    DriverDetailsResponse, DriverLocationResponse, OrderDetailsResponse, PlaceOrderResponse,
    QuotationResponse,
};
pub use validation::ValidationError;
pub use value::{ApiKey, DriverId, OrderId, Secret};
