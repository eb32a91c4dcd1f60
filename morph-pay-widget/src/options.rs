//! Integrator-facing widget options.

use bon::Builder;
use morph_pay::types::{AmountInput, PaymentRequest};
use serde::{Deserialize, Serialize};

/// Color scheme hint for presenters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// What the integrator configures on a pay button.
///
/// ```
/// use morph_pay_widget::options::{PayButtonOptions, Theme};
///
/// let options = PayButtonOptions::builder()
///     .address("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
///     .amount("10")
///     .build();
///
/// assert_eq!(options.currency, "ETH");
/// assert_eq!(options.theme, Theme::Light);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayButtonOptions {
    /// Merchant address receiving the payment.
    #[builder(into)]
    pub address: String,
    /// Amount in whole units of `currency`.
    #[builder(into)]
    pub amount: AmountInput,
    /// One of `ETH`, `USDT`, `USDC` or `USD`.
    #[builder(into, default = String::from("ETH"))]
    #[serde(default = "default_currency")]
    pub currency: String,
    #[builder(default)]
    #[serde(default)]
    pub theme: Theme,
    /// Overrides the trigger button label.
    #[builder(into)]
    pub trigger_label: Option<String>,
}

fn default_currency() -> String {
    String::from("ETH")
}

impl PayButtonOptions {
    /// The request submitted when the user presses pay.
    pub fn payment_request(&self) -> PaymentRequest {
        PaymentRequest {
            pay_to: self.address.clone(),
            amount: self.amount.clone(),
            currency: self.currency.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_options_from_json() {
        let options: PayButtonOptions = serde_json::from_value(json!({
            "address": "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20",
            "amount": 2.5,
            "currency": "USDC",
            "theme": "dark"
        }))
        .unwrap();

        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.trigger_label, None);

        let request = options.payment_request();
        assert_eq!(request.pay_to, "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20");
        assert_eq!(request.amount.to_string(), "2.5");
        assert_eq!(request.currency, "USDC");
    }

    #[test]
    fn test_currency_defaults_to_eth() {
        let options: PayButtonOptions = serde_json::from_value(json!({
            "address": "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20",
            "amount": "1"
        }))
        .unwrap();

        assert_eq!(options.currency, "ETH");
        assert_eq!(options.theme, Theme::Light);
    }
}
