//! Network fee and grand total calculation.
//!
//! All arithmetic happens on arbitrary-precision integers in wei, so products
//! of 256-bit gas values never wrap and no amount passes through floating
//! point.
//!
//! ```text
//! total_fee   = gas_price × gas_limit
//! grand_total = total_fee + value     (native transfer)
//!             = total_fee             (token transfer, external request)
//! high fee    ⇔ total_fee > NATIVE_UNIT_BASE / HIGH_FEE_DIVISOR
//! ```

use num_bigint::BigUint;
use payment_units::NATIVE_UNIT_BASE;

use crate::types::{FeeParameters, FeeSummary, Transfer};

/// A fee above `1 / HIGH_FEE_DIVISOR` of one native unit (5%) is flagged.
pub const HIGH_FEE_DIVISOR: u128 = 20;

/// Fees strictly above this many wei are flagged as high.
pub const HIGH_FEE_THRESHOLD: u128 = NATIVE_UNIT_BASE / HIGH_FEE_DIVISOR;

/// Maximum fee the transaction may pay: `gas_price × gas_limit`.
#[inline]
pub fn total_fee(params: &FeeParameters) -> BigUint {
    &params.gas_price * &params.gas_limit
}

/// Total debited from the native balance.
///
/// Token fees are paid in the native currency and token amounts are never
/// added to them. External requests carry their value separately, so only
/// native transfers add the transferred value.
#[inline]
pub fn grand_total(fee: &BigUint, transfer: &Transfer) -> BigUint {
    match transfer {
        Transfer::Native { value } => fee + value,
        Transfer::Token { .. } | Transfer::ExternalRequest { .. } => fee.clone(),
    }
}

/// Returns true if `fee` exceeds [`HIGH_FEE_THRESHOLD`].
///
/// The threshold itself is not high: exactly 5% of one native unit passes.
#[inline]
pub fn is_high_fee(fee: &BigUint) -> bool {
    *fee > BigUint::from(HIGH_FEE_THRESHOLD)
}

/// Run the whole fee calculation for one transfer.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use payment_preview::{FeeParameters, Transfer, compute_fee_and_total};
///
/// // 20 Gwei × 21000 gas, sending 1 ether
/// let params = FeeParameters::new(20_000_000_000u64, 21_000u32);
/// let transfer = Transfer::Native { value: BigUint::from(10u64.pow(18)) };
/// let summary = compute_fee_and_total(&transfer, &params);
/// assert_eq!(summary.total_fee, BigUint::from(420_000_000_000_000u64));
/// assert_eq!(summary.grand_total, BigUint::from(1_000_420_000_000_000_000u64));
/// assert!(!summary.is_high);
/// ```
pub fn compute_fee_and_total(transfer: &Transfer, params: &FeeParameters) -> FeeSummary {
    let total_fee = total_fee(params);
    let grand_total = grand_total(&total_fee, transfer);
    let is_high = is_high_fee(&total_fee);

    tracing::debug!(
        gas_price = %params.gas_price,
        gas_limit = %params.gas_limit,
        %total_fee,
        %grand_total,
        is_high,
        "computed transfer fee"
    );

    FeeSummary {
        total_fee,
        grand_total,
        is_high,
    }
}

// ============================================================================
// Tests
// ============================================================================
