use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::AmountInput;

/// A payment as requested by the integrator, before any validation.
///
/// Fields are kept as supplied; they are resolved into a concrete transfer only when an
/// attempt starts, so that malformed input surfaces as a failed attempt rather than a
/// construction error.
///
/// ```
/// use morph_pay_core::types::{AmountInput, PaymentRequest};
///
/// let request = PaymentRequest::builder()
///     .pay_to("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
///     .amount("2.5")
///     .currency("USDC")
///     .build();
///
/// assert_eq!(request.amount, AmountInput::Text("2.5".to_string()));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Destination address on the target network.
    #[builder(into)]
    #[serde(alias = "address")]
    pub pay_to: String,
    /// Amount in whole units of the selected currency.
    #[builder(into)]
    pub amount: AmountInput,
    /// Currency code, e.g. `ETH`, `USDT`, `USDC` or `USD`.
    #[builder(into)]
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_widget_props() {
        let request: PaymentRequest = serde_json::from_value(json!({
            "address": "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20",
            "amount": 10,
            "currency": "ETH"
        }))
        .unwrap();

        assert_eq!(request.pay_to, "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20");
        assert_eq!(request.amount, AmountInput::Number(10.0));
        assert_eq!(request.amount.to_string(), "10");
        assert_eq!(request.currency, "ETH");
    }
}
