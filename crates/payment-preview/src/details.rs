//! Display strings for a payment confirmation screen.
//!
//! [`ConfirmPaymentDetails`] runs the fee calculation once and derives every
//! line of the screen from the result. It holds no mutable state; rebuilding
//! it on a rate or balance update is the way to refresh.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::config::DisplayConfig;
use crate::fee::compute_fee_and_total;
use crate::format::{AmountFormatter, signed_display, with_high_fee_warning};
use crate::rate::CurrencyRate;
use crate::types::{FeeSummary, PreviewTransaction, Transfer};

/// Read-only view of a pending payment.
#[derive(Clone, Debug)]
pub struct ConfirmPaymentDetails {
    transaction: PreviewTransaction,
    config: DisplayConfig,
    currency_rate: Option<CurrencyRate>,
    formatter: AmountFormatter,
    summary: FeeSummary,
}

impl ConfirmPaymentDetails {
    /// Build the view, computing the fee summary up front.
    pub fn new(
        transaction: PreviewTransaction,
        config: DisplayConfig,
        currency_rate: Option<CurrencyRate>,
    ) -> Self {
        let summary = compute_fee_and_total(&transaction.transfer, &transaction.fee);
        let formatter = AmountFormatter::new(config.formatter.clone());
        Self {
            transaction,
            config,
            currency_rate,
            formatter,
            summary,
        }
    }

    /// Fee, grand total and high-fee flag.
    pub fn summary(&self) -> &FeeSummary {
        &self.summary
    }

    /// Settings this view renders with.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Requester / recipient
    // ------------------------------------------------------------------------

    /// Title of the requester line.
    pub fn requester_title(&self) -> &str {
        &self.config.labels.requester
    }

    /// Requester of an external payment request; `None` for direct transfers.
    pub fn requester_text(&self) -> Option<&str> {
        match &self.transaction.transfer {
            Transfer::ExternalRequest {
                display_address, ..
            } => display_address.as_deref(),
            Transfer::Native { .. } | Transfer::Token { .. } => None,
        }
    }

    /// Title of the recipient line.
    pub fn payment_to_title(&self) -> &str {
        &self.config.labels.payment_to
    }

    /// Recipient address, or the placeholder when unknown.
    pub fn payment_to_text(&self) -> &str {
        self.transaction
            .recipient
            .as_deref()
            .unwrap_or(self.config.missing_address_placeholder.as_str())
    }

    // ------------------------------------------------------------------------
    // Gas
    // ------------------------------------------------------------------------

    /// Title of the gas price line.
    pub fn gas_price_title(&self) -> &str {
        &self.config.labels.gas_price
    }

    /// Gas price in the gas price unit, e.g. `"20 Gwei"`.
    pub fn gas_price_text(&self) -> String {
        let amount = self
            .formatter
            .string_in(&self.transaction.fee.gas_price, self.config.gas_price_unit);
        format!("{amount} {}", self.config.gas_price_unit_label())
    }

    /// Title of the gas limit line.
    pub fn gas_limit_title(&self) -> &str {
        &self.config.labels.gas_limit
    }

    /// Gas limit as a plain integer.
    pub fn gas_limit_text(&self) -> String {
        self.transaction.fee.gas_limit.to_string()
    }

    // ------------------------------------------------------------------------
    // Fee and total
    // ------------------------------------------------------------------------

    /// Title of the network fee line.
    pub fn fee_title(&self) -> &str {
        &self.config.labels.fee
    }

    /// Network fee in native units, with fiat estimate and high-fee warning.
    pub fn fee_text(&self) -> String {
        let text = self.native_amount_text(&self.summary.total_fee);
        with_high_fee_warning(text, &self.summary.total_fee, &self.config.high_fee_warning)
    }

    /// Title of the grand total line.
    pub fn total_title(&self) -> &str {
        &self.config.labels.total
    }

    /// Grand total in native units, with fiat estimate.
    pub fn total_text(&self) -> String {
        self.native_amount_text(&self.summary.grand_total)
    }

    /// `"<amount> <symbol>"` followed by `" (<fiat>)"` when a rate is known.
    fn native_amount_text(&self, value: &BigUint) -> String {
        let amount = self.formatter.string_in(value, self.config.fee_unit);
        let mut text = format!("{amount} {}", self.config.symbol);
        if let Some(fiat) = self.currency_rate.as_ref().and_then(|rate| {
            rate.estimate_text(value, self.config.fee_unit.exponent(), &self.config.symbol)
        }) {
            text.push_str(&format!(" ({fiat})"));
        }
        text
    }

    // ------------------------------------------------------------------------
    // Transferred amount
    // ------------------------------------------------------------------------

    /// Transferred amount in the asset's own precision.
    pub fn amount(&self) -> String {
        let transfer = &self.transaction.transfer;
        self.formatter.string(transfer.value(), transfer.decimals())
    }

    /// Transferred amount shown as a debit with its symbol, e.g. `"-1 ETH"`.
    ///
    /// A zero transfer reads `"0"` whatever the fraction padding.
    pub fn amount_string(&self) -> String {
        let amount = if self.transaction.transfer.value().is_zero() {
            "0".to_owned()
        } else {
            signed_display(&self.amount())
        };
        format!("{amount} {}", self.symbol())
    }

    /// Fiat estimate of the transferred amount, e.g. `"~2000.00 USD"`.
    pub fn monetary_amount_string(&self) -> Option<String> {
        let transfer = &self.transaction.transfer;
        self.currency_rate
            .as_ref()?
            .estimate_text(transfer.value(), transfer.decimals(), self.symbol())
            .map(|fiat| format!("~{fiat}"))
    }

    fn symbol(&self) -> &str {
        self.transaction.transfer.symbol(&self.config.symbol)
    }
}
