use serde::Deserialize;

use super::lenient::TransportString;
use super::{Action, TransportError, decode_json};
use crate::domain::{AddOrder, OrderId, ServiceId};

#[derive(Debug, Clone, Deserialize)]
struct AddOrderJsonResponse {
    order: TransportString,
}

pub fn encode_add_order_params(request: &AddOrder) -> Vec<(String, String)> {
    let mut params = vec![
        Action::Add.param(),
        (
            ServiceId::FIELD.to_owned(),
            request.service().as_str().to_owned(),
        ),
        (AddOrder::LINK_FIELD.to_owned(), request.link().to_owned()),
        (
            AddOrder::QUANTITY_FIELD.to_owned(),
            request.quantity().to_string(),
        ),
    ];

    let options = request.options();
    if let Some(runs) = options.runs {
        params.push((AddOrder::RUNS_FIELD.to_owned(), runs.to_string()));
    }
    if let Some(interval) = options.interval {
        params.push((AddOrder::INTERVAL_FIELD.to_owned(), interval.to_string()));
    }

    params
}

pub fn decode_add_order_json_response(body: &[u8]) -> Result<OrderId, TransportError> {
    let parsed: AddOrderJsonResponse = decode_json(body)?;
    Ok(OrderId::new(parsed.order.into_string()))
}
