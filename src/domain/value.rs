use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Lalamove API key, issued per market from the partner portal.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used in error messages (`apiKey`).
    pub const FIELD: &'static str = "apiKey";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Lalamove API secret, the HMAC signing key paired with an [`ApiKey`].
///
/// Invariant: non-empty after trimming. `Debug` is redacted so the secret
/// never ends up in logs.
pub struct Secret(String);

impl Secret {
    /// Field name used in error messages (`secret`).
    pub const FIELD: &'static str = "secret";

    /// Create a validated [`Secret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order reference (`orderRef`) returned by order placement.
///
/// Invariant: non-empty after trimming.
pub struct OrderId(String);

impl OrderId {
    /// Wire field name carrying this id (`orderRef`).
    pub const FIELD: &'static str = "orderRef";

    /// Create a validated [`OrderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated order reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Driver id (`driverId`) reported once an order is matched.
///
/// Invariant: non-empty after trimming.
pub struct DriverId(String);

impl DriverId {
    /// Wire field name carrying this id (`driverId`).
    pub const FIELD: &'static str = "driverId";

    /// Create a validated [`DriverId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated driver id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
