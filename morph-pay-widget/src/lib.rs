//! # Morph Pay Widget
//!
//! The presentation-agnostic core of an embeddable "Pay with Morph" button.
//!
//! This crate provides [`PayWidget`](widget::PayWidget), which owns one payment attempt at a
//! time: it opens and closes the modal, turns the configured amount and currency into a
//! transfer, submits it through the user's [`WalletSession`](morph_pay::wallet::WalletSession)
//! and reports the outcome. Drawing is left to a [`Presenter`](presenter::Presenter), or to
//! any UI that [subscribes](widget::PayWidget::subscribe) to the widget's snapshots.
//!
//! ## Quick Start
//!
//! ```rust
//! use morph_pay::config::ChainConfig;
//! use morph_pay_widget::options::{PayButtonOptions, Theme};
//!
//! let config = ChainConfig::morph_holesky();
//! let options = PayButtonOptions::builder()
//!     .address("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
//!     .amount(25u64)
//!     .currency("USD")
//!     .theme(Theme::Dark)
//!     .build();
//!
//! assert_eq!(options.payment_request().currency, "USD");
//! assert!(config.stablecoin(morph_pay::currency::Stablecoin::Usdt).is_some());
//! ```
//!
//! ## Modules
//!
//! - [`widget`]: The [`PayWidget`](widget::PayWidget) and its submission flow.
//! - [`options`]: What the integrator configures: recipient, amount, currency, theme.
//! - [`view`]: The rendered dialog handed to presenters.
//! - [`presenter`]: The [`Presenter`](presenter::Presenter) hook.
//!
//! ## Payment Flow
//!
//! [`PayWidget::initiate`](widget::PayWidget::initiate) walks one attempt through:
//!
//! 1. **Session Check**: Without a wallet session the widget asks the user to connect.
//! 2. **Build**: Resolve the currency and encode a native transfer or an ERC-20 `transfer` call.
//! 3. **Submit**: Hand the transaction to the wallet exactly once.
//! 4. **Report**: Record the transaction id or the error, then invoke the callbacks.

pub mod options;
pub mod presenter;
pub mod view;
pub mod widget;
