//! The closed set of business errors the Lalamove v2 API reports.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
/// A business error reported by the server, one variant per wire code.
///
/// [`Unauthorized`](Self::Unauthorized) and
/// [`TooManyRequests`](Self::TooManyRequests) are derived from the HTTP
/// status (401 and 429); the rest arrive as a code in the error payload of a
/// 402/409 response. Codes this client does not recognize map to
/// [`Unknown`](Self::Unknown).
pub enum ApiError {
    #[error("ERR_UNKNOWN: unknown API error")]
    Unknown,
    #[error("ERR_INVALID_COUNTRY: incorrect country")]
    InvalidCountry,
    #[error("ERR_INVALID_PARAMS: general validation error")]
    InvalidParams,
    #[error("ERR_REQUIRED_FIELD: missing required fields")]
    RequiredField,
    #[error("ERR_DELIVERY_MISMATCH: stops and deliveries mismatch")]
    DeliveryMismatch,
    #[error("ERR_INSUFFICIENT_STOPS: number of stops should be between 2 and 10")]
    InsufficientStops,
    #[error("ERR_TOO_MANY_STOPS: number of stops should be between 2 and 10")]
    TooManyStops,
    #[error("ERR_INVALID_PAYMENT_METHOD: invalid payment method")]
    InvalidPaymentMethod,
    #[error("ERR_INVALID_LOCALE: invalid locale")]
    InvalidLocale,
    #[error("ERR_INVALID_PHONE_NUMBER: invalid phone number")]
    InvalidPhoneNumber,
    #[error("ERR_INVALID_SCHEDULE_TIME: scheduleAt datetime is in the past")]
    InvalidScheduleTime,
    #[error("ERR_INVALID_SERVICE_TYPE: no such service type for the country/region")]
    InvalidServiceType,
    #[error("ERR_INVALID_SPECIAL_REQUEST: special requests do not match the service type")]
    InvalidSpecialRequest,
    #[error("ERR_OUT_OF_SERVICE_AREA: out of service area")]
    OutOfServiceArea,
    #[error("ERR_REVERSE_GEOCODE_FAILURE: could not resolve address, provide lat and lng")]
    ReverseGeocodeFailure,
    #[error("ERR_INSUFFICIENT_CREDIT: insufficient credit, top up your wallet")]
    InsufficientCredit,
    #[error("ERR_INVALID_CURRENCY: the currency provided is not a valid currency")]
    InvalidCurrency,
    #[error("ERR_PRICE_MISMATCH: quotedTotalFee does not match the quotation")]
    PriceMismatch,
    #[error("ERR_CANCELLATION_FORBIDDEN: cancellation forbidden")]
    CancellationForbidden,
    #[error("ERR_TOO_MANY_REQUESTS: too many requests were made")]
    TooManyRequests,
    #[error("ERR_UNAUTHORIZED: credentials were rejected")]
    Unauthorized,
}

impl ApiError {
    /// Every variant, in wire-code order.
    pub const ALL: [ApiError; 21] = [
        Self::Unknown,
        Self::InvalidCountry,
        Self::InvalidParams,
        Self::RequiredField,
        Self::DeliveryMismatch,
        Self::InsufficientStops,
        Self::TooManyStops,
        Self::InvalidPaymentMethod,
        Self::InvalidLocale,
        Self::InvalidPhoneNumber,
        Self::InvalidScheduleTime,
        Self::InvalidServiceType,
        Self::InvalidSpecialRequest,
        Self::OutOfServiceArea,
        Self::ReverseGeocodeFailure,
        Self::InsufficientCredit,
        Self::InvalidCurrency,
        Self::PriceMismatch,
        Self::CancellationForbidden,
        Self::TooManyRequests,
        Self::Unauthorized,
    ];

    /// Map a wire code to its error. Unrecognized codes map to
    /// [`ApiError::Unknown`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "ERR_INVALID_COUNTRY" => Self::InvalidCountry,
            "ERR_INVALID_PARAMS" => Self::InvalidParams,
            "ERR_REQUIRED_FIELD" => Self::RequiredField,
            "ERR_DELIVERY_MISMATCH" => Self::DeliveryMismatch,
            "ERR_INSUFFICIENT_STOPS" => Self::InsufficientStops,
            "ERR_TOO_MANY_STOPS" => Self::TooManyStops,
            "ERR_INVALID_PAYMENT_METHOD" => Self::InvalidPaymentMethod,
            "ERR_INVALID_LOCALE" => Self::InvalidLocale,
            "ERR_INVALID_PHONE_NUMBER" => Self::InvalidPhoneNumber,
            "ERR_INVALID_SCHEDULE_TIME" => Self::InvalidScheduleTime,
            "ERR_INVALID_SERVICE_TYPE" => Self::InvalidServiceType,
            "ERR_INVALID_SPECIAL_REQUEST" => Self::InvalidSpecialRequest,
            "ERR_OUT_OF_SERVICE_AREA" => Self::OutOfServiceArea,
            "ERR_REVERSE_GEOCODE_FAILURE" => Self::ReverseGeocodeFailure,
            "ERR_INSUFFICIENT_CREDIT" => Self::InsufficientCredit,
            "ERR_INVALID_CURRENCY" => Self::InvalidCurrency,
            "ERR_PRICE_MISMATCH" => Self::PriceMismatch,
            "ERR_CANCELLATION_FORBIDDEN" => Self::CancellationForbidden,
            "ERR_TOO_MANY_REQUESTS" => Self::TooManyRequests,
            "ERR_UNAUTHORIZED" => Self::Unauthorized,
            _ => Self::Unknown,
        }
    }

    /// The wire code for this error.
    pub fn code(self) -> &'static str {
        match self {
            Self::Unknown => "ERR_UNKNOWN",
            Self::InvalidCountry => "ERR_INVALID_COUNTRY",
            Self::InvalidParams => "ERR_INVALID_PARAMS",
            Self::RequiredField => "ERR_REQUIRED_FIELD",
            Self::DeliveryMismatch => "ERR_DELIVERY_MISMATCH",
            Self::InsufficientStops => "ERR_INSUFFICIENT_STOPS",
            Self::TooManyStops => "ERR_TOO_MANY_STOPS",
            Self::InvalidPaymentMethod => "ERR_INVALID_PAYMENT_METHOD",
            Self::InvalidLocale => "ERR_INVALID_LOCALE",
            Self::InvalidPhoneNumber => "ERR_INVALID_PHONE_NUMBER",
            Self::InvalidScheduleTime => "ERR_INVALID_SCHEDULE_TIME",
            Self::InvalidServiceType => "ERR_INVALID_SERVICE_TYPE",
            Self::InvalidSpecialRequest => "ERR_INVALID_SPECIAL_REQUEST",
            Self::OutOfServiceArea => "ERR_OUT_OF_SERVICE_AREA",
            Self::ReverseGeocodeFailure => "ERR_REVERSE_GEOCODE_FAILURE",
            Self::InsufficientCredit => "ERR_INSUFFICIENT_CREDIT",
            Self::InvalidCurrency => "ERR_INVALID_CURRENCY",
            Self::PriceMismatch => "ERR_PRICE_MISMATCH",
            Self::CancellationForbidden => "ERR_CANCELLATION_FORBIDDEN",
            Self::TooManyRequests => "ERR_TOO_MANY_REQUESTS",
            Self::Unauthorized => "ERR_UNAUTHORIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips() {
        for error in ApiError::ALL {
            assert_eq!(ApiError::from_code(error.code()), error);
        }
    }

    #[test]
    fn unrecognized_codes_map_to_unknown() {
        assert_eq!(ApiError::from_code("ERR_FLUX_CAPACITOR"), ApiError::Unknown);
        assert_eq!(ApiError::from_code(""), ApiError::Unknown);
    }

    #[test]
    fn display_leads_with_the_wire_code() {
        for error in ApiError::ALL {
            assert!(
                error.to_string().starts_with(error.code()),
                "{error} does not lead with {}",
                error.code()
            );
        }
    }
}
