//! Bonding-curve pricing for Friendzy keys.
//!
//! The program prices supply changes on a fixed quadratic curve over total
//! token supply (in token lamports):
//!
//! ```text
//! C(s) = (59_500_000_000 + s)^2 / 12_000_000_000_000
//! ```
//!
//! The cost of a trade is the difference of the curve between the two supply
//! points. All evaluation is exact integer arithmetic widened to u128 for the
//! squared term and narrowed back to u64; floats only appear in the `_ui`
//! display helpers. Results must match the on-chain program to the lamport or
//! transactions get rejected or mispriced.

use crate::program::error::{SdkError, SdkResult};
use crate::shared::lamports::lamports_to_ui;

/// Token lamports per whole key.
pub const KEY: u64 = 1_000_000_000;

/// Curve offset term (5.95e10).
const CURVE_OFFSET: u128 = 59_500_000_000;

/// Curve divisor (1.2e13).
const CURVE_DIVISOR: u128 = 12_000_000_000_000;

/// Evaluate the cumulative curve at a supply point.
///
/// The squared term reaches ~1e26 for realistic supplies, so this stays in
/// u128 until the caller takes a difference. Supply points within the curve
/// offset of `u64::MAX` square past even u128 and are rejected.
fn curve(point: u64) -> SdkResult<u128> {
    let shifted = CURVE_OFFSET + point as u128;
    let squared = shifted
        .checked_mul(shifted)
        .ok_or(SdkError::PriceOverflow)?;
    Ok(squared / CURVE_DIVISOR)
}

/// Price of a supply change against the curve, in lamports.
///
/// `supply_change` is positive for buys and negative for sells; the
/// difference is always taken between the two supply points with the larger
/// one first, so a buy and a sell across the same supply boundary quote the
/// same magnitude.
pub fn key_price(supply: u64, supply_change: i64) -> SdkResult<u64> {
    let upper = supply
        .checked_add(supply_change.unsigned_abs())
        .ok_or(SdkError::PriceOverflow)?;
    let cost = curve(upper)? - curve(supply)?;
    u64::try_from(cost).map_err(|_| SdkError::PriceOverflow)
}

/// Price of a fraction of one key (`0 < delta < KEY` token lamports) minted
/// on top of `supply`.
pub fn fractional_key_price(supply: u64, delta: u64) -> SdkResult<u64> {
    key_price(supply, delta as i64)
}

/// Cost of minting `keys` whole keys on top of `supply`, in lamports.
///
/// Each key is priced against the supply level at which it would be minted
/// (`supply + i * KEY`), then the unit prices are summed. This is not a
/// single curve difference over the full range; the program prices whole
/// keys one at a time.
pub fn keys_cost(supply: u64, keys: u64) -> SdkResult<u64> {
    let mut total: u64 = 0;
    for i in 0..keys {
        let step = i
            .checked_mul(KEY)
            .and_then(|offset| supply.checked_add(offset))
            .ok_or(SdkError::PriceOverflow)?;
        total = total
            .checked_add(key_price(step, KEY as i64)?)
            .ok_or(SdkError::PriceOverflow)?;
    }
    Ok(total)
}

/// [`key_price`] in SOL.
pub fn key_price_ui(supply: u64, supply_change: i64) -> SdkResult<f64> {
    Ok(lamports_to_ui(key_price(supply, supply_change)?))
}

/// [`keys_cost`] in SOL.
pub fn keys_cost_ui(supply: u64, keys: u64) -> SdkResult<f64> {
    Ok(lamports_to_ui(keys_cost(supply, keys)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_key_price() {
        assert_eq!(key_price(0, KEY as i64).unwrap(), 10_000_000);
        assert_eq!(key_price_ui(0, KEY as i64).unwrap(), 0.01);
    }

    #[test]
    fn test_second_key_price() {
        assert_eq!(key_price(KEY, KEY as i64).unwrap(), 10_166_667);
    }

    #[test]
    fn test_deep_supply_price() {
        assert_eq!(
            key_price(2_624_310_000_000, KEY as i64).unwrap(),
            447_385_000
        );
    }

    #[test]
    fn test_keys_cost() {
        assert_eq!(keys_cost(2_889_320_000_000, 10).unwrap(), 4_923_033_333);
        assert_eq!(keys_cost_ui(2_889_320_000_000, 10).unwrap(), 4.923033333);
    }

    #[test]
    fn test_keys_cost_is_per_key_sum() {
        let supply = 123_000_000_000;
        let expected: u64 = (0..7)
            .map(|i| key_price(supply + i * KEY, KEY as i64).unwrap())
            .sum();
        assert_eq!(keys_cost(supply, 7).unwrap(), expected);
    }

    #[test]
    fn test_fractional_key_price() {
        assert_eq!(fractional_key_price(KEY, 500_000_000).unwrap(), 5_062_500);
    }

    #[test]
    fn test_buy_sell_symmetry() {
        // Selling one key back down to supply s quotes the same magnitude as
        // buying one key at supply s.
        let supply = 5_000_000_000;
        let buy = key_price(supply, KEY as i64).unwrap();
        let sell = key_price(supply, -(KEY as i64)).unwrap();
        assert_eq!(buy, sell);
    }

    #[test]
    fn test_monotonically_increasing() {
        let mut last = 0;
        for supply in (0..50 * KEY).step_by(KEY as usize) {
            let price = key_price(supply, KEY as i64).unwrap();
            assert!(price > last, "price not increasing at supply {}", supply);
            last = price;
        }
    }

    #[test]
    fn test_overflow_rejected() {
        // Supply point past the end of the u64 range.
        assert!(matches!(
            key_price(u64::MAX, 1),
            Err(SdkError::PriceOverflow)
        ));
        // Curve difference itself exceeds u64.
        assert!(matches!(
            key_price(0, i64::MAX),
            Err(SdkError::PriceOverflow)
        ));
        // Supply point close enough to u64::MAX that the squared term
        // exceeds u128.
        assert!(matches!(
            key_price(u64::MAX - KEY, KEY as i64),
            Err(SdkError::PriceOverflow)
        ));
    }

    #[test]
    fn test_zero_keys_cost_nothing() {
        assert_eq!(keys_cost(KEY, 0).unwrap(), 0);
    }
}
