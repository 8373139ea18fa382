use time::OffsetDateTime;

use crate::domain::order::{Location, OrderStatus, Price};
use crate::domain::value::{DriverId, OrderId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Priced estimate for a quotation request.
pub struct QuotationResponse {
    /// Total fee in the smallest currency unit.
    pub amount_cents: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderResponse {
    /// Order reference used by all follow-up calls.
    pub order_id: OrderId,
    /// UUID order id kept for older integrations.
    pub customer_order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailsResponse {
    pub status: OrderStatus,
    pub price: Price,
    /// Present once a driver has accepted the order.
    pub driver_id: Option<DriverId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDetailsResponse {
    pub name: String,
    pub phone: String,
    pub plate_number: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Latest reported driver position. Available from one hour before the
/// scheduled pick-up until the order completes.
pub struct DriverLocationResponse {
    pub location: Location,
    pub updated_at: OffsetDateTime,
}
