//! Transport layer: URL and wire-format details (serialization/deserialization).

mod add_order;
mod balance;
mod lenient;
mod order_status;
mod query;
mod services;

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub use add_order::{decode_add_order_json_response, encode_add_order_params};
pub use balance::{decode_balance_json_response, encode_balance_params};
pub use order_status::{
    decode_multiple_orders_status_json_response, decode_order_status_json_response,
    encode_multiple_orders_status_params, encode_order_status_params,
};
pub use query::build_url_with_parameters;
pub use services::{decode_services_json_response, encode_services_params};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider error: {message}")]
    Provider { message: String },
}

/// Action discriminator sent as the `action` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Balance,
    Services,
    Add,
    Status,
}

impl Action {
    pub const FIELD: &'static str = "action";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Services => "services",
            Self::Add => "add",
            Self::Status => "status",
        }
    }

    fn param(self) -> (String, String) {
        (Self::FIELD.to_owned(), self.as_str().to_owned())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderErrorJson {
    error: String,
}

/// Decode `body` as `T`, unless it is the panel's `{"error": "..."}` object.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, TransportError> {
    let is_object = body
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|byte| *byte == b'{');
    if is_object {
        if let Ok(ProviderErrorJson { error }) = serde_json::from_slice(body) {
            return Err(TransportError::Provider { message: error });
        }
    }
    Ok(serde_json::from_slice(body)?)
}
