//! Decimal rendering of integer amounts.
//!
//! An amount in the smallest unit is shifted right by `decimals` places:
//!
//! ```text
//! integer    = value / 10^decimals     grouped in threes
//! fractional = value % 10^decimals     left-padded to `decimals` digits,
//!                                      trailing zeros trimmed
//! ```
//!
//! # Trailing Zeros
//!
//! Trailing zeros of the fractional part are dropped down to
//! `minimum_fraction_digits`. When nothing is left the decimal separator is
//! omitted too, so whole amounts render as integers and zero renders as
//! `"0"`. Digits past `maximum_fraction_digits` are truncated, never rounded.

use num_bigint::BigUint;
use num_traits::Zero;
use payment_units::{EthereumUnit, GAS_PRICE_UNIT};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fee::is_high_fee;

/// Separator and precision settings for [`AmountFormatter`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Placed between integer and fractional parts
    pub decimal_separator: String,
    /// Placed between groups of three integer digits; empty disables grouping
    pub grouping_separator: String,
    /// Fraction digits kept even when they are zero
    pub minimum_fraction_digits: usize,
    /// Fraction digits shown at most; `None` shows every digit
    pub maximum_fraction_digits: Option<usize>,
}

impl FormatterConfig {
    /// Every significant digit.
    pub fn full() -> Self {
        Self {
            decimal_separator: ".".to_owned(),
            grouping_separator: ",".to_owned(),
            minimum_fraction_digits: 0,
            maximum_fraction_digits: None,
        }
    }

    /// At most four fraction digits, for compact displays.
    pub fn short() -> Self {
        Self {
            maximum_fraction_digits: Some(4),
            ..Self::full()
        }
    }

    /// Check that the fraction digit bounds are ordered.
    ///
    /// # Errors
    /// [`ConfigError::InvalidFractionDigits`] if the minimum exceeds the maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.maximum_fraction_digits {
            Some(maximum) if maximum < self.minimum_fraction_digits => {
                Err(ConfigError::InvalidFractionDigits {
                    minimum: self.minimum_fraction_digits,
                    maximum,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::full()
    }
}

/// Renders integer amounts as decimal strings without losing precision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AmountFormatter {
    config: FormatterConfig,
}

impl AmountFormatter {
    /// Create a formatter with explicit settings.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Full-precision formatter.
    pub fn full() -> Self {
        Self::new(FormatterConfig::full())
    }

    /// Settings this formatter renders with.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render `value` shifted right by `decimals` places.
    pub fn string(&self, value: &BigUint, decimals: u8) -> String {
        let divisor = pow10(usize::from(decimals));
        let integer = value / &divisor;
        let remainder = value % &divisor;

        let integer = self.integer_string(&integer);
        let fractional = self.fractional_string(&remainder, usize::from(decimals));
        if fractional.is_empty() {
            integer
        } else {
            format!("{integer}{}{fractional}", self.config.decimal_separator)
        }
    }

    /// Render `value` (in wei) in a named unit.
    pub fn string_in(&self, value: &BigUint, unit: EthereumUnit) -> String {
        self.string(value, unit.exponent())
    }

    /// Render a network fee in the gas-price unit followed by `unit_label`.
    ///
    /// `high_fee_warning_text` is appended verbatim only when the fee is high;
    /// it never changes the number shown.
    pub fn fee_display(
        &self,
        fee: &BigUint,
        unit_label: &str,
        high_fee_warning_text: &str,
    ) -> String {
        let text = format!("{} {unit_label}", self.string_in(fee, GAS_PRICE_UNIT));
        with_high_fee_warning(text, fee, high_fee_warning_text)
    }

    fn integer_string(&self, integer: &BigUint) -> String {
        let digits = integer.to_string();
        let separator = &self.config.grouping_separator;
        if separator.is_empty() {
            return digits;
        }

        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3 * separator.len());
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (len - index) % 3 == 0 {
                grouped.push_str(separator);
            }
            grouped.push(digit);
        }
        grouped
    }

    fn fractional_string(&self, remainder: &BigUint, decimals: usize) -> String {
        let minimum = self.config.minimum_fraction_digits;
        if remainder.is_zero() {
            return "0".repeat(minimum);
        }

        let (scaled, width) = match self.config.maximum_fraction_digits {
            Some(maximum) if decimals > maximum => {
                (remainder / pow10(decimals - maximum), maximum)
            }
            _ if decimals < minimum => (remainder * pow10(minimum - decimals), minimum),
            _ => (remainder.clone(), decimals),
        };

        let mut digits = format!("{:0>width$}", scaled.to_string());
        let significant = digits.trim_end_matches('0').len();
        digits.truncate(significant.max(minimum));
        digits
    }
}

/// `10^exponent` as a big integer.
fn pow10(exponent: usize) -> BigUint {
    num_traits::pow(BigUint::from(10u8), exponent)
}

/// Append `warning` to `text` when `fee` is high.
pub(crate) fn with_high_fee_warning(mut text: String, fee: &BigUint, warning: &str) -> String {
    if is_high_fee(fee) {
        tracing::debug!(%fee, "fee exceeds high-fee threshold");
        text.push_str(warning);
    }
    text
}

/// Render `value` shifted right by `decimals` places at full precision.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use payment_preview::format_amount;
///
/// assert_eq!(format_amount(&BigUint::from(1_500_000u32), 6), "1.5");
/// assert_eq!(format_amount(&BigUint::from(0u8), 18), "0");
/// ```
pub fn format_amount(value: &BigUint, decimals: u8) -> String {
    AmountFormatter::full().string(value, decimals)
}

/// Show a formatted amount as a debit.
///
/// Every amount except the literal `"0"` gets a leading minus sign.
pub fn signed_display(formatted: &str) -> String {
    if formatted == "0" {
        formatted.to_owned()
    } else {
        format!("-{formatted}")
    }
}

// ============================================================================
// Tests
// ============================================================================
