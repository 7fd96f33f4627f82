use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Panel API key (`key`).
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by the panel (`key`).
    pub const FIELD: &'static str = "key";

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

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Upstream API host, optionally followed by a base path (`redditsmm.com/api/v2`).
///
/// Invariant: `https://<host>/` parses as a URL with a non-empty host and
/// no query or fragment.
pub struct Host(String);

impl Host {
    /// Upstream host used unless overridden.
    pub const DEFAULT: &'static str = "redditsmm.com/api/v2";

    /// Create a validated [`Host`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let invalid = |reason: String| ValidationError::InvalidHost {
            host: value.clone(),
            reason,
        };

        let parsed = url::Url::parse(&format!("https://{value}/"))
            .map_err(|err| invalid(err.to_string()))?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_owned()));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("host must not contain a query or fragment".to_owned()));
        }

        Ok(Self(value))
    }

    /// Borrow the host as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Host {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Catalog service identifier (`service`).
pub struct ServiceId(String);

impl ServiceId {
    /// Query parameter name used by the panel (`service`).
    pub const FIELD: &'static str = "service";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ServiceId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Order identifier returned by `add` and accepted by `status`.
///
/// Kept as the provider sends it; no format is assumed.
pub struct OrderId(String);

impl OrderId {
    /// Query parameter name for a single order (`order`).
    pub const FIELD: &'static str = "order";
    /// Query parameter name for a comma-separated list of orders (`orders`).
    pub const LIST_FIELD: &'static str = "orders";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
