use std::time::Duration;

use morph_pay::{
    config::ChainConfig,
    currency::Stablecoin,
    transfer::{ContractCall, NativeTransfer},
    types::TransactionId,
    wallet::{WalletError, WalletSession},
};
use morph_pay_widget::{
    options::PayButtonOptions,
    presenter::Presenter,
    view::{ViewAction, WidgetView},
    widget::PayWidget,
};
use tracing_subscriber::filter::LevelFilter;

/// Pretends to be a browser wallet that signs everything after a short delay.
struct DemoWallet;

impl WalletSession for DemoWallet {
    fn has_session(&self) -> bool {
        true
    }

    async fn send_native(&self, transfer: &NativeTransfer) -> Result<TransactionId, WalletError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        println!("wallet: sending {} wei to {}", transfer.value, transfer.to);
        Ok(TransactionId::from("0x5e1f"))
    }

    async fn send_contract_call(&self, call: &ContractCall) -> Result<TransactionId, WalletError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        println!("wallet: calling {} with {}", call.contract, call.data);
        Ok(TransactionId::from("0xc0de"))
    }
}

/// Draws the dialog as plain text.
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn present(&self, view: &WidgetView) {
        println!("[{}] to {}", view.title, view.pay_to);
        match &view.action {
            ViewAction::ConnectWallet { prompt } => println!("  {prompt}"),
            ViewAction::Pay { label, enabled } => {
                println!("  ({label}){}", if *enabled { "" } else { " disabled" })
            }
        }
        if let Some(status) = &view.status {
            println!("  {}", status.text());
        }
    }

    fn dismiss(&self) {
        println!("[closed]");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let options = PayButtonOptions::builder()
        .address("0x3cb9b3bbfde8501f411bb69ad3dc07908ed0de20")
        .amount("12.5")
        .currency("USD")
        .build();

    let widget = PayWidget::new(ChainConfig::morph_holesky(), options, DemoWallet)
        .with_presenter(TerminalPresenter)
        .on_success(|tx| println!("merchant: payment confirmed, tx {tx}"))
        .on_error(|err| eprintln!("merchant: payment failed: {err}"));

    widget.open();
    widget.select_stablecoin(Stablecoin::Usdt);

    if let Err(err) = widget.pay().await {
        eprintln!("checkout failed: {err}");
    }

    if let Some(url) = widget
        .snapshot()
        .result
        .as_ref()
        .and_then(|result| result.transaction())
        .and_then(|tx| widget.config().tx_url(tx))
    {
        println!("explorer: {url}");
    }

    widget.close();
}
