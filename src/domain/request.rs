use time::OffsetDateTime;

use crate::domain::order::{Contact, DeliveryInfo, Price, ServiceType, SpecialRequest, Waypoint};
use crate::domain::validation::ValidationError;

/// Minimum number of stops on a route (pick-up plus one drop-off).
pub const MIN_STOPS: usize = 2;
/// Maximum number of stops on a route.
pub const MAX_STOPS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
/// A priced-estimate request, required before placing an order.
///
/// Invariants enforced at construction:
/// - between [`MIN_STOPS`] and [`MAX_STOPS`] stops,
/// - every delivery's `to_stop` names a stop other than the first
///   (the first stop's contact is the requester),
/// - the requester contact has a name and a phone number.
pub struct QuotationRequest {
    service_type: ServiceType,
    stops: Vec<Waypoint>,
    deliveries: Vec<DeliveryInfo>,
    requester_contact: Contact,
    schedule_at: Option<OffsetDateTime>,
    special_requests: Vec<SpecialRequest>,
}

impl QuotationRequest {
    /// Create a validated immediate-pickup quotation request.
    pub fn new(
        service_type: ServiceType,
        stops: Vec<Waypoint>,
        deliveries: Vec<DeliveryInfo>,
        requester_contact: Contact,
    ) -> Result<Self, ValidationError> {
        if stops.len() < MIN_STOPS {
            return Err(ValidationError::TooFewStops {
                min: MIN_STOPS,
                actual: stops.len(),
            });
        }
        if stops.len() > MAX_STOPS {
            return Err(ValidationError::TooManyStops {
                max: MAX_STOPS,
                actual: stops.len(),
            });
        }
        for delivery in &deliveries {
            if delivery.to_stop < 1 || delivery.to_stop as usize >= stops.len() {
                return Err(ValidationError::StopIndexOutOfRange {
                    stops: stops.len(),
                    actual: delivery.to_stop,
                });
            }
        }
        if requester_contact.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        if requester_contact.phone.trim().is_empty() {
            return Err(ValidationError::Empty { field: "phone" });
        }
        Ok(Self {
            service_type,
            stops,
            deliveries,
            requester_contact,
            schedule_at: None,
            special_requests: Vec::new(),
        })
    }

    /// Schedule the pick-up instead of requesting an immediate order.
    ///
    /// The value is sent in UTC, ISO 8601. A time in the past is rejected
    /// server-side with `ERR_INVALID_SCHEDULE_TIME`.
    pub fn schedule_at(mut self, at: OffsetDateTime) -> Self {
        self.schedule_at = Some(at);
        self
    }

    /// Attach special requests. Availability varies per market and service
    /// type; mismatches are rejected server-side.
    pub fn special_requests(mut self, requests: Vec<SpecialRequest>) -> Self {
        self.special_requests = requests;
        self
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn stops(&self) -> &[Waypoint] {
        &self.stops
    }

    pub fn deliveries(&self) -> &[DeliveryInfo] {
        &self.deliveries
    }

    pub fn requester_contact(&self) -> &Contact {
        &self.requester_contact
    }

    pub fn scheduled_at(&self) -> Option<OffsetDateTime> {
        self.schedule_at
    }

    pub fn special_request_list(&self) -> &[SpecialRequest] {
        &self.special_requests
    }
}

#[derive(Debug, Clone, PartialEq)]
/// An order placement request: a quotation plus the fee it quoted.
///
/// The quoted fee must match the quotation server-side, otherwise the order
/// is rejected with `ERR_PRICE_MISMATCH`.
pub struct PlaceOrderRequest {
    quotation: QuotationRequest,
    quoted_total_fee: Price,
    send_sms: Option<bool>,
}

impl PlaceOrderRequest {
    /// Create an order placement request from a quotation and the fee the
    /// server quoted for it.
    pub fn new(quotation: QuotationRequest, quoted_total_fee: Price) -> Self {
        Self {
            quotation,
            quoted_total_fee,
            send_sms: None,
        }
    }

    /// Control delivery-update SMS to the recipient (the last stop's
    /// recipient for multi-stop orders). Server default is on.
    pub fn send_sms(mut self, enabled: bool) -> Self {
        self.send_sms = Some(enabled);
        self
    }

    pub fn quotation(&self) -> &QuotationRequest {
        &self.quotation
    }

    pub fn quoted_total_fee(&self) -> &Price {
        &self.quoted_total_fee
    }

    pub fn sms(&self) -> Option<bool> {
        self.send_sms
    }
}
