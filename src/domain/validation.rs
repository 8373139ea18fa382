use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooFewStops { min: usize, actual: usize },
    TooManyStops { max: usize, actual: usize },
    StopIndexOutOfRange { stops: usize, actual: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooFewStops { min, actual } => {
                write!(f, "not enough stops: {actual} (min {min})")
            }
            Self::TooManyStops { max, actual } => {
                write!(f, "too many stops: {actual} (max {max})")
            }
            Self::StopIndexOutOfRange { stops, actual } => {
                write!(
                    f,
                    "delivery stop index out of range: {actual} (expected 1..{stops})"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "apiKey" };
        assert_eq!(err.to_string(), "apiKey must not be empty");

        let err = ValidationError::TooFewStops { min: 2, actual: 1 };
        assert_eq!(err.to_string(), "not enough stops: 1 (min 2)");

        let err = ValidationError::TooManyStops {
            max: 10,
            actual: 11,
        };
        assert_eq!(err.to_string(), "too many stops: 11 (max 10)");

        let err = ValidationError::StopIndexOutOfRange {
            stops: 3,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "delivery stop index out of range: 3 (expected 1..3)"
        );
    }
}
