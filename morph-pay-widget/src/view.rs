//! What a presenter draws, derived from the widget's snapshot.

use morph_pay::{
    config::ChainConfig,
    currency::{Currency, Stablecoin},
    state::{SubmissionResult, SubmissionState},
    types::TransactionId,
};
use serde::Serialize;
use url::Url;

use crate::{
    options::{PayButtonOptions, Theme},
    widget::WidgetSnapshot,
};

pub const TRIGGER_LABEL: &str = "Pay with Morph";
pub const DESCRIPTION: &str = "Complete your payment securely using your connected wallet.";
pub const CONNECT_PROMPT: &str = "Please connect your wallet to continue.";
pub const PROCESSING_LABEL: &str = "Processing...";

/// A fully rendered dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub open: bool,
    pub trigger_label: String,
    /// `Pay {amount} {currency}`
    pub title: String,
    pub description: &'static str,
    pub pay_to: String,
    /// Set when the currency is `USD` and the user picks the stablecoin.
    pub stablecoin_choice: Option<Stablecoin>,
    /// Stablecoins the configured network deploys; empty unless the currency is `USD`.
    pub stablecoin_options: Vec<Stablecoin>,
    pub action: ViewAction,
    pub status: Option<StatusLine>,
    pub theme: Theme,
}

/// The dialog's primary control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ViewAction {
    /// No wallet session: prompt to connect instead of paying.
    ConnectWallet { prompt: &'static str },
    Pay { label: String, enabled: bool },
}

/// The line shown under the action once an attempt has an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum StatusLine {
    ConnectWallet,
    Sent {
        transaction: TransactionId,
        explorer_url: Option<Url>,
    },
    Error { message: String },
}

impl StatusLine {
    pub fn text(&self) -> String {
        match self {
            StatusLine::ConnectWallet => "Please connect your wallet.".to_string(),
            StatusLine::Sent { transaction, .. } => format!("Payment sent! Tx: {transaction}"),
            StatusLine::Error { message } => format!("Error: {message}"),
        }
    }
}

impl WidgetView {
    pub fn render(
        options: &PayButtonOptions,
        config: &ChainConfig,
        snapshot: &WidgetSnapshot,
        connected: bool,
    ) -> Self {
        let currency = options.currency.parse::<Currency>().ok();
        let pay_with = match currency {
            Some(Currency::Usd) => snapshot.stablecoin.symbol().to_string(),
            Some(currency) => currency.code().to_string(),
            None => options.currency.trim().to_string(),
        };

        let action = if !connected {
            ViewAction::ConnectWallet {
                prompt: CONNECT_PROMPT,
            }
        } else if snapshot.state.is_in_flight() {
            ViewAction::Pay {
                label: PROCESSING_LABEL.to_string(),
                enabled: false,
            }
        } else {
            ViewAction::Pay {
                label: format!("Pay with {pay_with}"),
                enabled: true,
            }
        };

        let status = match (&snapshot.state, &snapshot.result) {
            (SubmissionState::AwaitingWallet, _) => Some(StatusLine::ConnectWallet),
            (_, Some(SubmissionResult::Success(tx))) => Some(StatusLine::Sent {
                transaction: tx.clone(),
                explorer_url: config.tx_url(tx),
            }),
            (_, Some(SubmissionResult::Failure(message))) => Some(StatusLine::Error {
                message: message.clone(),
            }),
            _ => None,
        };

        let is_usd = currency == Some(Currency::Usd);
        let stablecoin_options = if is_usd {
            Stablecoin::ALL
                .into_iter()
                .filter(|stablecoin| config.stablecoin(*stablecoin).is_some())
                .collect()
        } else {
            Vec::new()
        };

        WidgetView {
            open: snapshot.open,
            trigger_label: options
                .trigger_label
                .clone()
                .unwrap_or_else(|| TRIGGER_LABEL.to_string()),
            title: format!("Pay {} {}", options.amount, options.currency.trim()),
            description: DESCRIPTION,
            pay_to: options.address.clone(),
            stablecoin_choice: is_usd.then_some(snapshot.stablecoin),
            stablecoin_options,
            action,
            status,
            theme: options.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(currency: &str) -> PayButtonOptions {
        PayButtonOptions::builder()
            .address("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
            .amount("2.5")
            .currency(currency)
            .build()
    }

    #[test]
    fn test_idle_view() {
        let view = WidgetView::render(
            &options("USDC"),
            &ChainConfig::morph_holesky(),
            &WidgetSnapshot::default(),
            true,
        );

        assert!(!view.open);
        assert_eq!(view.trigger_label, "Pay with Morph");
        assert_eq!(view.title, "Pay 2.5 USDC");
        assert_eq!(view.pay_to, "0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20");
        assert_eq!(view.stablecoin_choice, None);
        assert!(view.stablecoin_options.is_empty());
        assert_eq!(
            view.action,
            ViewAction::Pay {
                label: "Pay with USDC".to_string(),
                enabled: true
            }
        );
        assert_eq!(view.status, None);
    }

    #[test]
    fn test_disconnected_view_prompts_for_wallet() {
        let view = WidgetView::render(
            &options("ETH"),
            &ChainConfig::morph_holesky(),
            &WidgetSnapshot::default(),
            false,
        );

        assert_eq!(
            view.action,
            ViewAction::ConnectWallet {
                prompt: "Please connect your wallet to continue."
            }
        );
    }

    #[test]
    fn test_usd_shows_selected_stablecoin() {
        let snapshot = WidgetSnapshot {
            stablecoin: Stablecoin::Usdt,
            ..Default::default()
        };
        let view = WidgetView::render(&options("USD"), &ChainConfig::morph_holesky(), &snapshot, true);

        assert_eq!(view.title, "Pay 2.5 USD");
        assert_eq!(view.stablecoin_choice, Some(Stablecoin::Usdt));
        assert_eq!(
            view.stablecoin_options,
            vec![Stablecoin::Usdt, Stablecoin::Usdc]
        );
        assert_eq!(
            view.action,
            ViewAction::Pay {
                label: "Pay with USDT".to_string(),
                enabled: true
            }
        );
    }

    #[test]
    fn test_usd_offers_only_deployed_stablecoins() {
        let view = WidgetView::render(
            &options("USD"),
            &ChainConfig::base_sepolia(),
            &WidgetSnapshot::default(),
            true,
        );

        assert_eq!(view.stablecoin_options, vec![Stablecoin::Usdc]);
    }

    #[test]
    fn test_submitting_disables_action() {
        let snapshot = WidgetSnapshot {
            open: true,
            state: SubmissionState::Submitting,
            ..Default::default()
        };
        let view = WidgetView::render(&options("ETH"), &ChainConfig::morph_holesky(), &snapshot, true);

        assert_eq!(
            view.action,
            ViewAction::Pay {
                label: "Processing...".to_string(),
                enabled: false
            }
        );
    }

    #[test]
    fn test_success_links_to_explorer() {
        let snapshot = WidgetSnapshot {
            open: true,
            state: SubmissionState::Succeeded,
            result: Some(SubmissionResult::Success(TransactionId::from("0xdeadbeef"))),
            ..Default::default()
        };
        let view = WidgetView::render(&options("ETH"), &ChainConfig::morph_holesky(), &snapshot, true);

        let status = view.status.unwrap();
        assert_eq!(status.text(), "Payment sent! Tx: 0xdeadbeef");
        let StatusLine::Sent { explorer_url, .. } = status else {
            panic!("expected a sent status");
        };
        assert_eq!(
            explorer_url.unwrap().as_str(),
            "https://explorer-holesky.morphl2.io/tx/0xdeadbeef"
        );
    }

    #[test]
    fn test_status_lines() {
        let failed = WidgetSnapshot {
            state: SubmissionState::Failed,
            result: Some(SubmissionResult::Failure("Unsupported currency: DAI".to_string())),
            ..Default::default()
        };
        let view = WidgetView::render(&options("DAI"), &ChainConfig::morph_holesky(), &failed, true);
        assert_eq!(
            view.status.map(|s| s.text()),
            Some("Error: Unsupported currency: DAI".to_string())
        );

        let awaiting = WidgetSnapshot {
            state: SubmissionState::AwaitingWallet,
            ..Default::default()
        };
        let view = WidgetView::render(&options("ETH"), &ChainConfig::morph_holesky(), &awaiting, false);
        assert_eq!(
            view.status.map(|s| s.text()),
            Some("Please connect your wallet.".to_string())
        );
    }
}
