//! Fiat estimates from a currency rate snapshot.
//!
//! Estimates are display-only: they go through `f64` and are never fed back
//! into fee or total calculations.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::format::{AmountFormatter, FormatterConfig};

/// Price of one asset in the snapshot's fiat currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    /// Asset ticker (e.g. `"ETH"`)
    pub code: String,
    /// Price of one whole asset unit
    pub price: f64,
}

/// Snapshot of asset prices in one fiat currency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Fiat currency code (e.g. `"USD"`)
    pub currency: String,
    /// Known asset prices
    pub rates: Vec<Rate>,
}

impl CurrencyRate {
    /// Price of `symbol`, if the snapshot has one.
    pub fn price(&self, symbol: &str) -> Option<f64> {
        self.rates
            .iter()
            .find(|rate| rate.code == symbol)
            .map(|rate| rate.price)
    }

    /// Fiat value of `value` (shifted by `decimals`) of asset `symbol`.
    ///
    /// `None` when the price is unknown or the amount overflows `f64`.
    pub fn estimate(&self, value: &BigUint, decimals: u8, symbol: &str) -> Option<f64> {
        let price = self.price(symbol)?;
        // Plain digits so the parse cannot trip over grouping separators.
        let plain = AmountFormatter::new(FormatterConfig {
            grouping_separator: String::new(),
            ..FormatterConfig::full()
        });
        let amount: f64 = plain.string(value, decimals).parse().ok()?;
        Some(amount * price).filter(|estimate| estimate.is_finite())
    }

    /// Rendered fiat estimate, e.g. `"0.84 USD"`.
    pub fn estimate_text(&self, value: &BigUint, decimals: u8, symbol: &str) -> Option<String> {
        self.estimate(value, decimals, symbol)
            .map(|estimate| format!("{estimate:.2} {}", self.currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_rate() -> CurrencyRate {
        CurrencyRate {
            currency: "USD".into(),
            rates: vec![
                Rate {
                    code: "ETH".into(),
                    price: 2000.0,
                },
                Rate {
                    code: "USDC".into(),
                    price: 1.0,
                },
            ],
        }
    }

    #[test]
    fn test_estimate_native_fee() {
        // 0.00042 ETH at 2000 USD
        let text = usd_rate().estimate_text(&BigUint::from(420_000_000_000_000u64), 18, "ETH");
        assert_eq!(text.as_deref(), Some("0.84 USD"));
    }

    #[test]
    fn test_estimate_grouped_amount() {
        // 1234.5 USDC must not be parsed as "1,234.5"
        let estimate = usd_rate()
            .estimate(&BigUint::from(1_234_500_000u64), 6, "USDC")
            .unwrap();
        assert!((estimate - 1234.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_unknown_symbol() {
        assert_eq!(usd_rate().estimate(&BigUint::from(1u8), 18, "DOGE"), None);
    }

    #[test]
    fn test_estimate_overflowing_amount() {
        // 10^400 wei is 10^382 ETH, past f64::MAX
        let value = num_traits::pow(BigUint::from(10u8), 400);
        assert_eq!(usd_rate().estimate(&value, 18, "ETH"), None);
        assert_eq!(usd_rate().estimate_text(&value, 18, "ETH"), None);
    }

    #[test]
    fn test_rate_from_json() {
        let rate: CurrencyRate = serde_json::from_str(
            r#"{"currency":"EUR","rates":[{"code":"ETH","price":1800.5}]}"#,
        )
        .unwrap();
        assert_eq!(rate.price("ETH"), Some(1800.5));
    }
}
