use morph_pay::{
    config::ChainConfig,
    currency::Stablecoin,
    errors::PaymentError,
    state::{SubmissionResult, SubmissionState},
    transfer::TransferTx,
    types::{PaymentRequest, TransactionId},
    wallet::WalletSession,
};
use serde::Serialize;
use tokio::sync::watch;

use crate::{
    options::PayButtonOptions,
    presenter::{HeadlessPresenter, Presenter},
    view::WidgetView,
};

/// Everything a UI needs to redraw the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub open: bool,
    pub state: SubmissionState,
    /// Outcome of the latest attempt; cleared when a new attempt starts or on reset.
    pub result: Option<SubmissionResult>,
    /// Stablecoin used when the currency is `USD`.
    pub stablecoin: Stablecoin,
}

type SuccessCallback = Box<dyn Fn(&TransactionId) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&PaymentError) + Send + Sync>;

/// An embeddable pay button and its modal.
///
/// The widget owns the submission state of a single attempt at a time. It builds the transfer
/// from the explicit [`ChainConfig`], hands it to the [`WalletSession`] exactly once, records the
/// outcome and notifies the integrator's callbacks.
///
/// ## Example
///
/// ```
/// use morph_pay::{
///     config::ChainConfig,
///     types::TransactionId,
///     transfer::{ContractCall, NativeTransfer},
///     wallet::{WalletError, WalletSession},
/// };
/// use morph_pay_widget::{options::PayButtonOptions, widget::PayWidget};
///
/// struct Disconnected;
///
/// impl WalletSession for Disconnected {
///     fn has_session(&self) -> bool {
///         false
///     }
///
///     async fn send_native(&self, _: &NativeTransfer) -> Result<TransactionId, WalletError> {
///         Err(WalletError::NotConnected)
///     }
///
///     async fn send_contract_call(&self, _: &ContractCall) -> Result<TransactionId, WalletError> {
///         Err(WalletError::NotConnected)
///     }
/// }
///
/// let widget = PayWidget::new(
///     ChainConfig::morph_holesky(),
///     PayButtonOptions::builder()
///         .address("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
///         .amount("10")
///         .build(),
///     Disconnected,
/// )
/// .on_success(|tx| println!("paid: {tx}"));
///
/// widget.open();
/// assert!(widget.snapshot().open);
/// ```
pub struct PayWidget<W, P = HeadlessPresenter> {
    config: ChainConfig,
    options: PayButtonOptions,
    wallet: W,
    presenter: P,
    state: watch::Sender<WidgetSnapshot>,
    on_success: Vec<SuccessCallback>,
    on_error: Vec<ErrorCallback>,
}

impl<W: WalletSession> PayWidget<W> {
    pub fn new(config: ChainConfig, options: PayButtonOptions, wallet: W) -> Self {
        PayWidget {
            config,
            options,
            wallet,
            presenter: HeadlessPresenter,
            state: watch::Sender::new(WidgetSnapshot::default()),
            on_success: Vec::new(),
            on_error: Vec::new(),
        }
    }
}

impl<W: WalletSession, P: Presenter> PayWidget<W, P> {
    /// Replaces the presenter that draws the modal.
    pub fn with_presenter<Q: Presenter>(self, presenter: Q) -> PayWidget<W, Q> {
        PayWidget {
            config: self.config,
            options: self.options,
            wallet: self.wallet,
            presenter,
            state: self.state,
            on_success: self.on_success,
            on_error: self.on_error,
        }
    }

    /// Registers a callback invoked once per successful attempt.
    pub fn on_success(mut self, callback: impl Fn(&TransactionId) + Send + Sync + 'static) -> Self {
        self.on_success.push(Box::new(callback));
        self
    }

    /// Registers a callback invoked once per failed attempt.
    ///
    /// A missing wallet session is not a failure and is not reported here.
    pub fn on_error(mut self, callback: impl Fn(&PaymentError) + Send + Sync + 'static) -> Self {
        self.on_error.push(Box::new(callback));
        self
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn options(&self) -> &PayButtonOptions {
        &self.options
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        self.state.borrow().clone()
    }

    /// Observes every change to the widget's snapshot.
    pub fn subscribe(&self) -> watch::Receiver<WidgetSnapshot> {
        self.state.subscribe()
    }

    /// Renders the current snapshot.
    pub fn view(&self) -> WidgetView {
        WidgetView::render(
            &self.options,
            &self.config,
            &self.state.borrow(),
            self.wallet.has_session(),
        )
    }

    /// Opens the modal.
    pub fn open(&self) {
        self.state.send_if_modified(|snapshot| {
            let changed = !snapshot.open;
            snapshot.open = true;
            changed
        });
        self.present();
    }

    /// Closes the modal.
    ///
    /// A settled attempt is discarded. An attempt in flight keeps running and still reports
    /// its outcome.
    pub fn close(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.open = false;
            if !snapshot.state.is_in_flight() {
                snapshot.state = SubmissionState::Idle;
                snapshot.result = None;
            }
        });
        self.presenter.dismiss();
    }

    /// Picks the stablecoin that a `USD` payment transfers.
    pub fn select_stablecoin(&self, stablecoin: Stablecoin) {
        self.state.send_if_modified(|snapshot| {
            let changed = snapshot.stablecoin != stablecoin;
            snapshot.stablecoin = stablecoin;
            changed
        });
        self.present();
    }

    /// Returns the widget to [`SubmissionState::Idle`] and clears the last result.
    ///
    /// Rejected while an attempt is in flight.
    pub fn reset(&self) -> Result<(), PaymentError> {
        let mut outcome = Ok(());
        self.state.send_if_modified(|snapshot| {
            if snapshot.state.is_in_flight() {
                outcome = Err(PaymentError::AttemptInFlight);
                return false;
            }
            snapshot.state = SubmissionState::Idle;
            snapshot.result = None;
            true
        });
        if outcome.is_ok() {
            self.present();
        }
        outcome
    }

    /// Pays the amount configured in the widget options.
    pub async fn pay(&self) -> Result<TransactionId, PaymentError> {
        self.initiate(self.options.payment_request()).await
    }

    /// Runs one payment attempt.
    ///
    /// Without a wallet session the widget moves to [`SubmissionState::AwaitingWallet`] and
    /// nothing is submitted. An unsupported currency or an unencodable request fails the
    /// attempt before the wallet is involved. Otherwise the transfer is submitted exactly once
    /// and the result is recorded and reported to the callbacks.
    pub async fn initiate(&self, request: PaymentRequest) -> Result<TransactionId, PaymentError> {
        let mut prepared = Err(PaymentError::AttemptInFlight);
        self.state.send_if_modified(|snapshot| {
            if snapshot.state.is_in_flight() {
                return false;
            }
            snapshot.result = None;
            prepared = if !self.wallet.has_session() {
                snapshot.state = SubmissionState::AwaitingWallet;
                Err(PaymentError::NoWalletSession)
            } else {
                match TransferTx::build(&self.config, &request, snapshot.stablecoin) {
                    Ok(tx) => {
                        snapshot.state = SubmissionState::Submitting;
                        Ok(tx)
                    }
                    Err(err) => {
                        snapshot.state = SubmissionState::Failed;
                        snapshot.result = Some(SubmissionResult::Failure(err.to_string()));
                        Err(err)
                    }
                }
            };
            true
        });

        let tx = match prepared {
            Ok(tx) => tx,
            Err(PaymentError::AttemptInFlight) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Payment attempt rejected: another attempt is in flight");

                return Err(PaymentError::AttemptInFlight);
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Payment attempt not submitted: {err}");

                self.present();
                self.report_error(&err);
                return Err(err);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Submitting payment: currency='{}', pay_to='{}', chain_id={}",
            request.currency,
            request.pay_to,
            tx.chain_id()
        );

        self.present();

        let outcome = self.wallet.submit(&tx).await.map_err(PaymentError::from);

        self.state.send_modify(|snapshot| match &outcome {
            Ok(id) => {
                snapshot.state = SubmissionState::Succeeded;
                snapshot.result = Some(SubmissionResult::Success(id.clone()));
            }
            // The session went away between the check and the submission.
            Err(PaymentError::NoWalletSession) => {
                snapshot.state = SubmissionState::AwaitingWallet;
                snapshot.result = None;
            }
            Err(err) => {
                snapshot.state = SubmissionState::Failed;
                snapshot.result = Some(SubmissionResult::Failure(err.to_string()));
            }
        });
        self.present();

        match &outcome {
            Ok(id) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Payment sent: transaction='{id}'");

                for callback in &self.on_success {
                    callback(id);
                }
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Payment failed: {err}");

                self.report_error(err);
            }
        }

        outcome
    }

    fn report_error(&self, err: &PaymentError) {
        if !err.is_reportable() {
            return;
        }
        for callback in &self.on_error {
            callback(err);
        }
    }

    fn present(&self) {
        if self.state.borrow().open {
            self.presenter.present(&self.view());
        }
    }
}
