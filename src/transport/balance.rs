use serde::Deserialize;

use super::lenient::TransportString;
use super::{Action, TransportError, decode_json};
use crate::domain::UserBalance;

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    balance: TransportString,
    currency: TransportString,
}

pub fn encode_balance_params() -> Vec<(String, String)> {
    vec![Action::Balance.param()]
}

pub fn decode_balance_json_response(body: &[u8]) -> Result<UserBalance, TransportError> {
    let parsed: BalanceJsonResponse = decode_json(body)?;
    Ok(UserBalance {
        balance: parsed.balance.into_string(),
        currency: parsed.currency.into_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_balance_params_only_carries_action() {
        assert_eq!(
            encode_balance_params(),
            vec![("action".to_owned(), "balance".to_owned())]
        );
    }

    #[test]
    fn decode_balance_keeps_strings_verbatim() {
        let balance = decode_balance_json_response(br#"{"balance":"100.5","currency":"USD"}"#)
            .unwrap();
        assert_eq!(
            balance,
            UserBalance {
                balance: "100.5".to_owned(),
                currency: "USD".to_owned(),
            }
        );
    }

    #[test]
    fn decode_balance_accepts_numeric_balance() {
        let balance =
            decode_balance_json_response(br#"{"balance":100.8429,"currency":"USD"}"#).unwrap();
        assert_eq!(balance.balance, "100.8429");
    }

    #[test]
    fn decode_balance_rejects_missing_fields() {
        let err = decode_balance_json_response(br#"{"currency":"USD"}"#).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
