//! Display configuration.
//!
//! Everything the confirmation screen needs beyond the transaction itself
//! (symbol, units, label text, separators) travels in one immutable
//! [`DisplayConfig`] value. Defaults match an English, Ethereum mainnet
//! screen.

use std::path::Path;

use payment_units::{EthereumUnit, FEE_UNIT, GAS_PRICE_UNIT, UnitTable};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::FormatterConfig;

/// Line titles shown on the confirmation screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Title of the requester line
    pub requester: String,
    /// Title of the recipient line
    pub payment_to: String,
    /// Title of the gas price line
    pub gas_price: String,
    /// Title of the network fee line
    pub fee: String,
    /// Title of the gas limit line
    pub gas_limit: String,
    /// Title of the grand total line
    pub total: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            requester: "Requester".to_owned(),
            payment_to: "To".to_owned(),
            gas_price: "Gas Price".to_owned(),
            fee: "Network Fee".to_owned(),
            gas_limit: "Gas Limit".to_owned(),
            total: "Max Total".to_owned(),
        }
    }
}

/// Settings for rendering a payment confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Native currency ticker
    pub symbol: String,
    /// Unit gas prices are shown in
    pub gas_price_unit: EthereumUnit,
    /// Unit fees and totals are shown in
    pub fee_unit: EthereumUnit,
    /// Appended to the fee line when the fee is high
    pub high_fee_warning: String,
    /// Shown when the recipient is unknown
    pub missing_address_placeholder: String,
    /// Number rendering settings
    pub formatter: FormatterConfig,
    /// Line titles
    pub labels: Labels,
    /// Unit label overrides keyed by exponent
    pub units: UnitTable,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            symbol: "ETH".to_owned(),
            gas_price_unit: GAS_PRICE_UNIT,
            fee_unit: FEE_UNIT,
            high_fee_warning: " - WARNING. HIGH FEE.".to_owned(),
            missing_address_placeholder: "--".to_owned(),
            formatter: FormatterConfig::full(),
            labels: Labels::default(),
            units: UnitTable::new(),
        }
    }
}

impl DisplayConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    /// - [`ConfigError::Json`] on malformed JSON or an unknown unit exponent
    /// - [`ConfigError::InvalidFractionDigits`] on inverted fraction bounds
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.formatter.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise the same
    /// errors as [`from_json_str`](Self::from_json_str).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), symbol = %config.symbol, "loaded display config");
        Ok(config)
    }

    /// Label for the gas price unit.
    pub fn gas_price_unit_label(&self) -> &str {
        self.units.label(self.gas_price_unit)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = DisplayConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.gas_price_unit, EthereumUnit::Gwei);
        assert_eq!(config.fee_unit, EthereumUnit::Ether);
        assert_eq!(config.gas_price_unit_label(), "Gwei");
    }

    #[test]
    fn test_partial_override() {
        let config = DisplayConfig::from_json_str(
            r#"{
                "symbol": "ETC",
                "gas_price_unit": 12,
                "labels": { "total": "Total" },
                "units": { "12": "szabo" },
                "formatter": { "grouping_separator": " " }
            }"#,
        )
        .unwrap();
        assert_eq!(config.symbol, "ETC");
        assert_eq!(config.gas_price_unit, EthereumUnit::Szabo);
        assert_eq!(config.gas_price_unit_label(), "szabo");
        assert_eq!(config.labels.total, "Total");
        assert_eq!(config.labels.fee, "Network Fee");
        assert_eq!(config.formatter.grouping_separator, " ");
        assert_eq!(config.formatter.decimal_separator, ".");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result = DisplayConfig::from_json_str(r#"{ "fee_unit": 17 }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_inverted_fraction_digits_rejected() {
        let result = DisplayConfig::from_json_str(
            r#"{ "formatter": { "minimum_fraction_digits": 3, "maximum_fraction_digits": 2 } }"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidFractionDigits { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = DisplayConfig::from_path("/nonexistent/payment-preview.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "symbol": "ETC", "fee_unit": 9, "missing_address_placeholder": "n/a" }}"#
        )
        .unwrap();

        let config = DisplayConfig::from_path(file.path()).unwrap();
        assert_eq!(config.symbol, "ETC");
        assert_eq!(config.fee_unit, EthereumUnit::Gwei);
        assert_eq!(config.missing_address_placeholder, "n/a");
        assert_eq!(config.labels, Labels::default());
    }

    #[test]
    fn test_invalid_file_contents_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = DisplayConfig::from_path(file.path());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_json_roundtrip_defaults() {
        let json = serde_json::to_string(&DisplayConfig::default()).unwrap();
        let config = DisplayConfig::from_json_str(&json).unwrap();
        assert_eq!(config, DisplayConfig::default());
    }
}
