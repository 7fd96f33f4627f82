use serde::Deserialize;

use super::lenient::TransportString;
use super::{Action, TransportError, decode_json};
use crate::domain::Service;

#[derive(Debug, Clone, Deserialize)]
struct ServiceJson {
    service: TransportString,
    name: TransportString,
    #[serde(rename = "type")]
    kind: TransportString,
    category: TransportString,
    rate: TransportString,
    min: TransportString,
    max: TransportString,
}

impl From<ServiceJson> for Service {
    fn from(value: ServiceJson) -> Self {
        Self {
            service: value.service.into_string(),
            name: value.name.into_string(),
            kind: value.kind.into_string(),
            category: value.category.into_string(),
            rate: value.rate.into_string(),
            min: value.min.into_string(),
            max: value.max.into_string(),
        }
    }
}

pub fn encode_services_params() -> Vec<(String, String)> {
    vec![Action::Services.param()]
}

pub fn decode_services_json_response(body: &[u8]) -> Result<Vec<Service>, TransportError> {
    let parsed: Vec<ServiceJson> = decode_json(body)?;
    Ok(parsed.into_iter().map(Service::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_services_params_only_carries_action() {
        assert_eq!(
            encode_services_params(),
            vec![("action".to_owned(), "services".to_owned())]
        );
    }

    #[test]
    fn decode_services_preserves_provider_order() {
        let json = br#"
        [
          {
            "service": 9,
            "name": "Reddit Upvotes",
            "type": "Default",
            "category": "Reddit",
            "rate": "0.90",
            "min": "50",
            "max": "10000",
            "refill": true
          },
          {
            "service": "1",
            "name": "Reddit Followers",
            "type": "Drip-feed",
            "category": "Reddit",
            "rate": 2.50,
            "min": 10,
            "max": 5000
          }
        ]
        "#;

        let services = decode_services_json_response(json).unwrap();
        assert_eq!(services.len(), 2);

        assert_eq!(services[0].service, "9");
        assert_eq!(services[0].kind, "Default");
        assert_eq!(services[0].rate, "0.90");

        assert_eq!(services[1].service, "1");
        assert_eq!(services[1].name, "Reddit Followers");
        assert_eq!(services[1].rate, "2.50");
        assert_eq!(services[1].min, "10");
        assert_eq!(services[1].max, "5000");
    }

    #[test]
    fn decode_services_handles_empty_catalog() {
        assert!(decode_services_json_response(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_services_rejects_non_array() {
        let err = decode_services_json_response(br#"{"service":"1"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
