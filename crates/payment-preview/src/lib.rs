//! Payment Preview
//!
//! Read-only derivation of the numbers a payment confirmation screen shows:
//! network fee, grand total, high-fee warning and signed amount strings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────┐
//! │     Fee Calculator       │      │     Amount Formatter     │
//! │  • gas_price × gas_limit │ ───► │  • decimal shift         │
//! │  • grand total per kind  │      │  • trailing-zero trim    │
//! │  • high-fee threshold    │      │  • debit sign            │
//! └──────────────────────────┘      └──────────────────────────┘
//!               │                                 │
//!               └──────────────┬──────────────────┘
//!                              ▼
//!                ┌──────────────────────────┐
//!                │  ConfirmPaymentDetails   │
//!                │  • one string per line   │
//!                └──────────────────────────┘
//! ```
//!
//! Both stages are pure and synchronous. Amounts stay in the smallest unit as
//! arbitrary-precision integers; units only matter when a string is rendered.
//!
//! # Modules
//!
//! - [`types`]: Value types (Transfer, FeeParameters, PreviewTransaction, FeeSummary)
//! - [`fee`]: Fee calculation (total fee, grand total, high-fee flag)
//! - [`format`]: Amount rendering (AmountFormatter, signed_display)
//! - [`rate`]: Fiat estimates from a currency rate snapshot
//! - [`config`]: Display configuration (labels, units, separators)
//! - [`details`]: Confirmation screen strings
//! - [`error`]: Error types

mod config;
mod details;
mod error;
mod fee;
mod format;
mod rate;
mod types;

pub use config::*;
pub use details::*;
pub use error::*;
pub use fee::*;
pub use format::*;
pub use rate::*;
pub use types::*;

pub use payment_units::{EthereumUnit, UnitTable};
