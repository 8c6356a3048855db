//! Value types for a pending payment.

use num_bigint::{BigInt, BigUint};
use payment_units::NATIVE_DECIMALS;

use crate::error::PreviewError;

/// Convert a signed upstream value, rejecting negatives with `error`.
fn non_negative(value: BigInt, error: PreviewError) -> Result<BigUint, PreviewError> {
    value.to_biguint().ok_or(error)
}

// ============================================================================
// Transfer Kind
// ============================================================================

/// What is being paid.
///
/// Amounts are in the smallest unit of the transferred asset. Network fees
/// are always paid in the native currency, whatever the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    /// Native currency transfer (18 decimals)
    Native {
        /// Amount in wei
        value: BigUint,
    },
    /// Fungible token transfer
    Token {
        /// Amount in the token's smallest unit
        value: BigUint,
        /// Token decimal precision
        decimals: u8,
        /// Token ticker shown next to the amount
        symbol: String,
    },
    /// Payment requested by a third party (dapp)
    ExternalRequest {
        /// Amount in wei
        value: BigUint,
        /// Requester URL or address, if the request carried one
        display_address: Option<String>,
    },
}

impl Transfer {
    /// Native transfer from a signed upstream value.
    ///
    /// # Errors
    /// [`PreviewError::NegativeTransferValue`] if `value` is negative.
    pub fn try_native(value: BigInt) -> Result<Self, PreviewError> {
        Ok(Self::Native {
            value: non_negative(value, PreviewError::NegativeTransferValue)?,
        })
    }

    /// Token transfer from a signed upstream value.
    ///
    /// # Errors
    /// [`PreviewError::NegativeTransferValue`] if `value` is negative.
    pub fn try_token(
        value: BigInt,
        decimals: u8,
        symbol: impl Into<String>,
    ) -> Result<Self, PreviewError> {
        Ok(Self::Token {
            value: non_negative(value, PreviewError::NegativeTransferValue)?,
            decimals,
            symbol: symbol.into(),
        })
    }

    /// External request from a signed upstream value.
    ///
    /// # Errors
    /// [`PreviewError::NegativeTransferValue`] if `value` is negative.
    pub fn try_external_request(
        value: BigInt,
        display_address: Option<String>,
    ) -> Result<Self, PreviewError> {
        Ok(Self::ExternalRequest {
            value: non_negative(value, PreviewError::NegativeTransferValue)?,
            display_address,
        })
    }

    /// Transferred amount in the asset's smallest unit.
    pub fn value(&self) -> &BigUint {
        match self {
            Self::Native { value }
            | Self::Token { value, .. }
            | Self::ExternalRequest { value, .. } => value,
        }
    }

    /// Decimal shift used to display the transferred amount.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Token { decimals, .. } => *decimals,
            Self::Native { .. } | Self::ExternalRequest { .. } => NATIVE_DECIMALS,
        }
    }

    /// Ticker of the transferred asset; `native_symbol` for native payments.
    pub fn symbol<'a>(&'a self, native_symbol: &'a str) -> &'a str {
        match self {
            Self::Token { symbol, .. } => symbol,
            Self::Native { .. } | Self::ExternalRequest { .. } => native_symbol,
        }
    }
}

// ============================================================================
// Fee Parameters
// ============================================================================

/// Gas price and gas limit of a pending transaction, both in wei terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeeParameters {
    /// Price per unit of gas, in wei
    pub gas_price: BigUint,
    /// Maximum gas the transaction may consume
    pub gas_limit: BigUint,
}

impl FeeParameters {
    /// Create fee parameters from non-negative values.
    pub fn new(gas_price: impl Into<BigUint>, gas_limit: impl Into<BigUint>) -> Self {
        Self {
            gas_price: gas_price.into(),
            gas_limit: gas_limit.into(),
        }
    }

    /// Create fee parameters from signed upstream values.
    ///
    /// # Errors
    /// - [`PreviewError::NegativeGasPrice`] if `gas_price` is negative
    /// - [`PreviewError::NegativeGasLimit`] if `gas_limit` is negative
    pub fn try_new(gas_price: BigInt, gas_limit: BigInt) -> Result<Self, PreviewError> {
        Ok(Self {
            gas_price: non_negative(gas_price, PreviewError::NegativeGasPrice)?,
            gas_limit: non_negative(gas_limit, PreviewError::NegativeGasLimit)?,
        })
    }
}

// ============================================================================
// Preview Snapshot
// ============================================================================

/// Everything the confirmation screen renders for one pending payment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTransaction {
    /// What is being paid
    pub transfer: Transfer,
    /// Network fee parameters
    pub fee: FeeParameters,
    /// Recipient address, when known
    pub recipient: Option<String>,
}

/// Result of the fee calculation for one transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSummary {
    /// `gas_price × gas_limit`, in wei
    pub total_fee: BigUint,
    /// Everything debited from the native balance, in wei
    pub grand_total: BigUint,
    /// Whether the fee crosses the high-fee threshold
    pub is_high: bool,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_transfer_value_rejected() {
        assert_eq!(
            Transfer::try_native(BigInt::from(-1)),
            Err(PreviewError::NegativeTransferValue)
        );
        assert_eq!(
            Transfer::try_token(BigInt::from(-5), 6, "USDC"),
            Err(PreviewError::NegativeTransferValue)
        );
        assert_eq!(
            Transfer::try_external_request(BigInt::from(-5), None),
            Err(PreviewError::NegativeTransferValue)
        );
    }

    #[test]
    fn test_zero_transfer_value_accepted() {
        let transfer = Transfer::try_native(BigInt::from(0)).unwrap();
        assert_eq!(transfer.value(), &BigUint::from(0u8));
    }

    #[test]
    fn test_negative_fee_parameters_rejected() {
        assert_eq!(
            FeeParameters::try_new(BigInt::from(-1), BigInt::from(21_000)),
            Err(PreviewError::NegativeGasPrice)
        );
        assert_eq!(
            FeeParameters::try_new(BigInt::from(1), BigInt::from(-21_000)),
            Err(PreviewError::NegativeGasLimit)
        );
    }

    #[test]
    fn test_fee_parameters_from_signed() {
        let params = FeeParameters::try_new(BigInt::from(20), BigInt::from(21_000)).unwrap();
        assert_eq!(params, FeeParameters::new(20u32, 21_000u32));
    }

    #[test]
    fn test_decimals_per_variant() {
        let native = Transfer::Native {
            value: BigUint::from(1u8),
        };
        let token = Transfer::Token {
            value: BigUint::from(1u8),
            decimals: 6,
            symbol: "USDC".into(),
        };
        let request = Transfer::ExternalRequest {
            value: BigUint::from(1u8),
            display_address: None,
        };
        assert_eq!(native.decimals(), 18);
        assert_eq!(token.decimals(), 6);
        assert_eq!(request.decimals(), 18);
    }

    #[test]
    fn test_symbol_per_variant() {
        let native = Transfer::Native {
            value: BigUint::from(1u8),
        };
        let token = Transfer::Token {
            value: BigUint::from(1u8),
            decimals: 0,
            symbol: "TRST".into(),
        };
        assert_eq!(native.symbol("ETH"), "ETH");
        assert_eq!(token.symbol("ETH"), "TRST");
    }
}
