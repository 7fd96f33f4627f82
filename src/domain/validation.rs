use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidHost { host: String, reason: String },
    ConflictingOptions { option: &'static str, conflicts_with: &'static str },
    InvalidUserAgent { reason: String },
    HttpClient { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidHost { host, reason } => write!(f, "invalid host {host:?}: {reason}"),
            Self::ConflictingOptions {
                option,
                conflicts_with,
            } => write!(f, "option {option} cannot be combined with {conflicts_with}"),
            Self::InvalidUserAgent { reason } => write!(f, "invalid user agent: {reason}"),
            Self::HttpClient { reason } => write!(f, "cannot build HTTP client: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}
