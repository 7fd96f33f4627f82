use std::collections::BTreeMap;

use serde::Deserialize;

use super::lenient::TransportString;
use super::{Action, TransportError, decode_json};
use crate::domain::{OrderId, OrderStatus};

#[derive(Debug, Clone, Deserialize)]
struct OrderStatusJson {
    #[serde(default)]
    charge: Option<TransportString>,
    #[serde(default)]
    start_count: Option<TransportString>,
    #[serde(default)]
    status: Option<TransportString>,
    #[serde(default)]
    remains: Option<TransportString>,
    #[serde(default)]
    currency: Option<TransportString>,
    #[serde(default)]
    error: Option<String>,
}

impl From<OrderStatusJson> for OrderStatus {
    fn from(value: OrderStatusJson) -> Self {
        let text = |field: Option<TransportString>| {
            field.map(TransportString::into_string).unwrap_or_default()
        };
        Self {
            charge: text(value.charge),
            start_count: text(value.start_count),
            status: text(value.status),
            remains: text(value.remains),
            currency: text(value.currency),
            error: value.error,
        }
    }
}

pub fn encode_order_status_params(order: &OrderId) -> Vec<(String, String)> {
    vec![
        Action::Status.param(),
        (OrderId::FIELD.to_owned(), order.as_str().to_owned()),
    ]
}

pub fn encode_multiple_orders_status_params(orders: &[OrderId]) -> Vec<(String, String)> {
    vec![
        Action::Status.param(),
        (
            OrderId::LIST_FIELD.to_owned(),
            orders
                .iter()
                .map(OrderId::as_str)
                .collect::<Vec<_>>()
                .join(","),
        ),
    ]
}

pub fn decode_order_status_json_response(body: &[u8]) -> Result<OrderStatus, TransportError> {
    let parsed: OrderStatusJson = decode_json(body)?;
    Ok(parsed.into())
}

/// Keys are kept exactly as the panel returns them.
pub fn decode_multiple_orders_status_json_response(
    body: &[u8],
) -> Result<BTreeMap<OrderId, OrderStatus>, TransportError> {
    let parsed: BTreeMap<String, OrderStatusJson> = decode_json(body)?;
    Ok(parsed
        .into_iter()
        .map(|(key, value)| (OrderId::new(key), value.into()))
        .collect())
}
