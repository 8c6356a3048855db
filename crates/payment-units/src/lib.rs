//! Single source of truth for native currency denomination units.
//!
//! Every amount handled by the payment preview is an integer in the smallest
//! indivisible unit (wei). Units in this crate only describe how far a value
//! is shifted when it is *displayed*; they never take part in arithmetic.
//!
//! # Unit Table
//!
//! | Unit   | Exponent | Typical use               |
//! |--------|----------|---------------------------|
//! | Wei    | 0        | raw integer amounts       |
//! | Kwei   | 3        |                           |
//! | Gwei   | 9        | gas price display         |
//! | Szabo  | 12       |                           |
//! | Finney | 15       |                           |
//! | Ether  | 18       | native amounts, fees      |
//!
//! # Usage
//!
//! ```
//! use payment_units::{EthereumUnit, GAS_PRICE_UNIT};
//!
//! assert_eq!(GAS_PRICE_UNIT.exponent(), 9);
//! assert_eq!(EthereumUnit::from_exponent(18), Some(EthereumUnit::Ether));
//! assert_eq!(EthereumUnit::Gwei.name(), "Gwei");
//! ```

use std::collections::BTreeMap;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

// =============================================================================
// Native Currency Constants
// =============================================================================

/// Decimal precision of the native currency (one ether = 10^18 wei).
pub const NATIVE_DECIMALS: u8 = 18;

/// One whole native unit expressed in its smallest denomination.
pub const NATIVE_UNIT_BASE: u128 = 1_000_000_000_000_000_000;

/// Unit used to display gas prices.
pub const GAS_PRICE_UNIT: EthereumUnit = EthereumUnit::Gwei;

/// Unit used to display fees and totals.
pub const FEE_UNIT: EthereumUnit = EthereumUnit::Ether;

// =============================================================================
// Units
// =============================================================================

/// Named denominations of the native currency.
///
/// The discriminant is the decimal exponent of the unit relative to wei, so
/// the enum doubles as the lookup table keyed by exponent.
#[repr(u8)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    EnumIter,
    IntoStaticStr,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum EthereumUnit {
    /// Smallest indivisible unit
    Wei = 0,
    /// 10^3 wei
    Kwei = 3,
    /// 10^9 wei
    Gwei = 9,
    /// 10^12 wei
    Szabo = 12,
    /// 10^15 wei
    Finney = 15,
    /// 10^18 wei, one whole native unit
    Ether = 18,
}

impl EthereumUnit {
    /// Decimal exponent of this unit relative to wei.
    #[inline]
    pub fn exponent(self) -> u8 {
        self.into()
    }

    /// Canonical display name (e.g. `"Gwei"`).
    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a unit by its exponent.
    ///
    /// Returns `None` for exponents that have no named unit.
    #[inline]
    pub fn from_exponent(exponent: u8) -> Option<Self> {
        Self::try_from(exponent).ok()
    }

    /// Number of wei in one of this unit.
    #[inline]
    pub const fn base(self) -> u128 {
        10u128.pow(self as u32)
    }
}

/// Error returned when an exponent does not name a known unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no unit is defined for exponent {0}")]
pub struct UnknownUnitError(pub u8);

// =============================================================================
// Unit Labels
// =============================================================================

/// Display labels for units, keyed by exponent.
///
/// Units without an override fall back to their canonical name. The table is
/// an explicit value handed to whoever renders labels; nothing here reads
/// process-wide settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<u8, String>", into = "BTreeMap<u8, String>")]
pub struct UnitTable {
    overrides: BTreeMap<EthereumUnit, String>,
}

impl UnitTable {
    /// Create a table with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the label shown for `unit`.
    pub fn with_label(mut self, unit: EthereumUnit, label: impl Into<String>) -> Self {
        self.overrides.insert(unit, label.into());
        self
    }

    /// Label for a known unit.
    pub fn label(&self, unit: EthereumUnit) -> &str {
        match self.overrides.get(&unit) {
            Some(label) => label,
            None => unit.name(),
        }
    }

    /// Label for a raw exponent, if that exponent names a unit.
    pub fn lookup(&self, exponent: u8) -> Option<&str> {
        EthereumUnit::from_exponent(exponent).map(|unit| self.label(unit))
    }
}

impl TryFrom<BTreeMap<u8, String>> for UnitTable {
    type Error = UnknownUnitError;

    fn try_from(raw: BTreeMap<u8, String>) -> Result<Self, Self::Error> {
        let overrides = raw
            .into_iter()
            .map(|(exponent, label)| {
                EthereumUnit::from_exponent(exponent)
                    .map(|unit| (unit, label))
                    .ok_or(UnknownUnitError(exponent))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { overrides })
    }
}

impl From<UnitTable> for BTreeMap<u8, String> {
    fn from(table: UnitTable) -> Self {
        table
            .overrides
            .into_iter()
            .map(|(unit, label)| (unit.exponent(), label))
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case(EthereumUnit::Wei, 0, "Wei")]
    #[test_case(EthereumUnit::Kwei, 3, "Kwei")]
    #[test_case(EthereumUnit::Gwei, 9, "Gwei")]
    #[test_case(EthereumUnit::Szabo, 12, "Szabo")]
    #[test_case(EthereumUnit::Finney, 15, "Finney")]
    #[test_case(EthereumUnit::Ether, 18, "Ether")]
    fn test_unit_exponent_and_name(unit: EthereumUnit, exponent: u8, name: &str) {
        assert_eq!(unit.exponent(), exponent);
        assert_eq!(unit.name(), name);
        assert_eq!(unit.to_string(), name);
        assert_eq!(EthereumUnit::from_exponent(exponent), Some(unit));
    }

    #[test]
    fn test_unknown_exponent() {
        assert_eq!(EthereumUnit::from_exponent(1), None);
        assert_eq!(EthereumUnit::from_exponent(6), None);
        assert_eq!(EthereumUnit::from_exponent(255), None);
    }

    #[test]
    fn test_base_matches_native_constant() {
        assert_eq!(EthereumUnit::Ether.base(), NATIVE_UNIT_BASE);
        assert_eq!(EthereumUnit::Gwei.base(), 1_000_000_000);
        assert_eq!(EthereumUnit::Wei.base(), 1);
        assert_eq!(u32::from(NATIVE_DECIMALS), EthereumUnit::Ether as u32);
    }

    #[test]
    fn test_units_are_ordered_by_exponent() {
        let exponents: Vec<u8> = EthereumUnit::iter().map(EthereumUnit::exponent).collect();
        let mut sorted = exponents.clone();
        sorted.sort_unstable();
        assert_eq!(exponents, sorted);
    }

    #[test]
    fn test_unit_table_defaults_to_names() {
        let table = UnitTable::new();
        assert_eq!(table.label(EthereumUnit::Gwei), "Gwei");
        assert_eq!(table.lookup(18), Some("Ether"));
        assert_eq!(table.lookup(7), None);
    }

    #[test]
    fn test_unit_table_override() {
        let table = UnitTable::new().with_label(EthereumUnit::Ether, "ETH");
        assert_eq!(table.label(EthereumUnit::Ether), "ETH");
        assert_eq!(table.label(EthereumUnit::Gwei), "Gwei");
    }

    #[test]
    fn test_unit_table_json() {
        let table: UnitTable = serde_json::from_str(r#"{"9":"gwei","18":"ETH"}"#).unwrap();
        assert_eq!(table.lookup(9), Some("gwei"));
        assert_eq!(table.lookup(18), Some("ETH"));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"9":"gwei","18":"ETH"}"#);
    }

    #[test]
    fn test_unit_table_rejects_unknown_exponent() {
        let result: Result<UnitTable, _> = serde_json::from_str(r#"{"7":"nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unit_serde_as_exponent() {
        assert_eq!(serde_json::to_string(&EthereumUnit::Gwei).unwrap(), "9");
        let unit: EthereumUnit = serde_json::from_str("18").unwrap();
        assert_eq!(unit, EthereumUnit::Ether);
        assert!(serde_json::from_str::<EthereumUnit>("2").is_err());
    }
}
