//! Transport layer: wire-format details (serialization/deserialization).

mod driver;
mod error;
mod order;
mod quotation;

pub use driver::{decode_driver_details_response, decode_driver_location_response};
pub use error::decode_error_code;
pub use order::{
    decode_order_details_response, decode_place_order_response, encode_place_order_body,
};
pub use quotation::{decode_quotation_response, encode_quotation_body};

use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response contains unknown order status: {value}")]
    UnknownOrderStatus { value: String },

    #[error("unrepresentable schedule time: {0}")]
    ScheduleTime(#[from] time::error::Format),

    #[error("invalid value in response: {0}")]
    Invalid(#[from] ValidationError),
}
