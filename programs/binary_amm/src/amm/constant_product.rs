//! # Constant-Product Trade Pricing
//!
//! The pool holds a YES reserve and a NO reserve whose product is the
//! curve invariant:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                                              │
//! │            k = YES · NO                      │
//! │                                              │
//! │   Buying YES with A collateral:              │
//! │   1. NO'  = NO + A        (unwanted side)    │
//! │   2. YES' = ⌈k / NO'⌉     (keep k fixed)     │
//! │   3. profit = YES - YES'  (shares paid out)  │
//! │                                              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The profit is the number of outcome shares the buyer receives beyond
//! their principal. It shrinks per unit of collateral as the trade grows and
//! never reaches the full wanted reserve: the reserve left in the pool is
//! rounded up, so at least one raw unit remains and `k` never shrinks.
//!
//! Prices are pre-fee. A trading fee is applied on top of the profit with
//! [`apply_fee`].

use crate::amm::fixed_point::{mul_div, mul_div_ceil, Fixed, BPS_SCALE};
use crate::state::Side;

/// Projected pool state after a buy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeProjection {
    /// Outcome shares transferred to the buyer beyond their principal
    pub profit: Fixed,
    /// YES reserve after the trade
    pub new_yes_reserve: Fixed,
    /// NO reserve after the trade
    pub new_no_reserve: Fixed,
}

/// Shares a buyer nets beyond their principal when spending `amount` on `side`.
///
/// Returns exactly zero when either reserve or the amount is not positive.
///
/// # Example
/// ```ignore
/// // 100 YES / 100 NO, buy YES with 10
/// // k = 10_000, NO' = 110, YES' = 90.909090910 (rounded up)
/// let profit = potential_profit(Fixed::from_int(100), Fixed::from_int(100), Side::Yes, Fixed::from_int(10));
/// // profit = 9.090909090
/// ```
pub fn potential_profit(yes_reserve: Fixed, no_reserve: Fixed, side: Side, amount: Fixed) -> Fixed {
    project_trade(yes_reserve, no_reserve, side, amount).profit
}

/// Full projection of a buy: profit plus the reserves the pool ends up with.
pub fn project_trade(
    yes_reserve: Fixed,
    no_reserve: Fixed,
    side: Side,
    amount: Fixed,
) -> TradeProjection {
    if !yes_reserve.is_positive() || !no_reserve.is_positive() || !amount.is_positive() {
        return TradeProjection {
            profit: Fixed::ZERO,
            new_yes_reserve: yes_reserve,
            new_no_reserve: no_reserve,
        };
    }

    let (wanted, unwanted) = match side {
        Side::Yes => (yes_reserve, no_reserve),
        Side::No => (no_reserve, yes_reserve),
    };

    let new_unwanted = unwanted + amount;
    // ceil(k / new_unwanted): the pool keeps the rounding
    let remaining_wanted = mul_div_ceil(yes_reserve, no_reserve, new_unwanted);
    let profit = wanted - remaining_wanted;

    let (new_yes_reserve, new_no_reserve) = match side {
        Side::Yes => (remaining_wanted, new_unwanted),
        Side::No => (new_unwanted, remaining_wanted),
    };

    TradeProjection {
        profit,
        new_yes_reserve,
        new_no_reserve,
    }
}

/// Split a profit into `(fee, net)` for a fee in basis points.
///
/// The fee is `floor(profit * fee_bps / 10_000)`. Non-positive profits carry
/// no fee.
pub fn apply_fee(profit: Fixed, fee_bps: u64) -> (Fixed, Fixed) {
    if !profit.is_positive() || fee_bps == 0 {
        return (Fixed::ZERO, if profit.is_positive() { profit } else { Fixed::ZERO });
    }
    let fee_bps = fee_bps.min(BPS_SCALE);
    let fee = mul_div(
        profit,
        Fixed::from_raw(fee_bps as i128),
        Fixed::from_raw(BPS_SCALE as i128),
    );
    (fee, profit - fee)
}

/// Implied `(yes_price, no_price)` of the outcomes.
///
/// `yes_price = NO / (YES + NO)`: the side with the larger opposing reserve
/// is the expensive one. The two prices always sum to exactly one; an empty
/// pool (or a negative reserve) prices both sides at one half.
pub fn implied_prices(yes_reserve: Fixed, no_reserve: Fixed) -> (Fixed, Fixed) {
    let total = yes_reserve + no_reserve;
    if yes_reserve < Fixed::ZERO || no_reserve < Fixed::ZERO || !total.is_positive() {
        return (Fixed::HALF, Fixed::HALF);
    }
    let yes_price = mul_div(no_reserve, Fixed::ONE, total);
    (yes_price, Fixed::ONE - yes_price)
}

/// Implied prices in basis points (10000 = 1.0)
///
/// # Returns
/// * (yes_price_bps, no_price_bps), 5000 each for an empty pool
pub fn implied_price_bps(yes_reserve: Fixed, no_reserve: Fixed) -> (u64, u64) {
    let (yes_price, _) = implied_prices(yes_reserve, no_reserve);
    let yes_bps = yes_price.bps_of(Fixed::ONE);
    (yes_bps, BPS_SCALE - yes_bps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int(v: i64) -> Fixed {
        Fixed::from_int(v)
    }

    #[test]
    fn test_degenerate_inputs_price_to_zero() {
        assert_eq!(potential_profit(int(0), int(100), Side::Yes, int(10)), Fixed::ZERO);
        assert_eq!(potential_profit(int(100), int(0), Side::Yes, int(10)), Fixed::ZERO);
        assert_eq!(potential_profit(int(100), int(100), Side::Yes, int(0)), Fixed::ZERO);
        assert_eq!(potential_profit(int(100), int(100), Side::Yes, int(-5)), Fixed::ZERO);
        assert_eq!(potential_profit(int(-100), int(100), Side::No, int(5)), Fixed::ZERO);
    }

    #[test]
    fn test_balanced_pool_buy() {
        // k = 10_000, NO' = 110, YES' = ceil(90.9090909090..) = 90.909090910
        let projection = project_trade(int(100), int(100), Side::Yes, int(10));
        assert_eq!(projection.new_no_reserve, int(110));
        assert_eq!(projection.new_yes_reserve.raw(), 90_909_090_910);
        assert_eq!(projection.profit.raw(), 9_090_909_090);
    }

    #[test]
    fn test_huge_buy_never_drains_the_pool() {
        let one = Fixed::from_units(1_000_000_000);
        let projection = project_trade(one, one, Side::Yes, Fixed::from_units(u64::MAX));
        assert_eq!(projection.new_yes_reserve.raw(), 1);
        assert_eq!(projection.profit.raw(), 999_999_999);

        // 0.01 each side, buy at the default quote cap
        let cent = Fixed::from_units(10_000_000);
        let cap = Fixed::from_units(100_000_000_000_000_000);
        let profit = potential_profit(cent, cent, Side::No, cap);
        assert_eq!(profit.raw(), 9_999_999);

        // one raw unit each side: nothing can be paid out
        let dust = Fixed::from_raw(1);
        let projection = project_trade(dust, dust, Side::Yes, dust);
        assert_eq!(projection.profit, Fixed::ZERO);
        assert_eq!(projection.new_yes_reserve, dust);
    }

    #[test]
    fn test_buying_the_cheap_side_pays_more() {
        // YES reserve is large, so YES is cheap (yes_price = 0.3)
        let cheap = potential_profit(int(700), int(300), Side::Yes, int(10));
        let dear = potential_profit(int(700), int(300), Side::No, int(10));
        assert!(cheap > dear);
    }

    #[test]
    fn test_profit_strictly_increases_with_amount() {
        let mut previous = Fixed::ZERO;
        for amount in [1, 5, 10, 50, 100, 1_000, 10_000] {
            let profit = potential_profit(int(500), int(800), Side::No, int(amount));
            assert!(profit > previous, "profit for {} did not grow", amount);
            assert!(profit < int(800));
            previous = profit;
        }
    }

    #[test]
    fn test_fee_hook() {
        let (fee, net) = apply_fee(int(100), 250);
        assert_eq!(fee, Fixed::from_raw(2_500_000_000));
        assert_eq!(net, Fixed::from_raw(97_500_000_000));

        assert_eq!(apply_fee(int(100), 0), (Fixed::ZERO, int(100)));
        assert_eq!(apply_fee(Fixed::ZERO, 250), (Fixed::ZERO, Fixed::ZERO));
    }

    #[test]
    fn test_implied_prices() {
        let (yes, no) = implied_prices(int(300), int(700));
        assert_eq!(yes, Fixed::from_raw(700_000_000));
        assert_eq!(no, Fixed::from_raw(300_000_000));
        assert_eq!(yes + no, Fixed::ONE);

        assert_eq!(implied_prices(int(0), int(0)), (Fixed::HALF, Fixed::HALF));
        assert_eq!(implied_price_bps(int(0), int(0)), (5_000, 5_000));
        assert_eq!(implied_price_bps(int(1), int(2)), (6_666, 3_334));
    }

    // everything a pool account can hold
    fn reserve() -> impl Strategy<Value = u64> {
        1u64..=u64::MAX
    }

    fn amount() -> impl Strategy<Value = u64> {
        1u64..=u64::MAX
    }

    fn side() -> impl Strategy<Value = Side> {
        prop_oneof![Just(Side::Yes), Just(Side::No)]
    }

    proptest! {
        #[test]
        fn profit_is_inside_the_wanted_reserve(
            yes in reserve(),
            no in reserve(),
            side in side(),
            amount in amount(),
        ) {
            let profit = potential_profit(
                Fixed::from_units(yes),
                Fixed::from_units(no),
                side,
                Fixed::from_units(amount),
            );
            let (wanted, unwanted) = match side { Side::Yes => (yes, no), Side::No => (no, yes) };
            let (wanted, unwanted, amount) = (wanted as u128, unwanted as u128, amount as u128);

            // wanted - ceil(wanted·unwanted / (unwanted + amount)) == floor(wanted·amount / (unwanted + amount))
            prop_assert_eq!(profit.raw() as u128, wanted * amount / (unwanted + amount));
            prop_assert!(profit >= Fixed::ZERO);
            prop_assert!((profit.raw() as u128) < wanted);
        }

        #[test]
        fn profit_never_decreases_with_amount(
            yes in reserve(),
            no in reserve(),
            side in side(),
            amount in amount(),
            extra in 1u64..1_000_000_000_000,
        ) {
            let (yes, no) = (Fixed::from_units(yes), Fixed::from_units(no));
            let amount = Fixed::from_units(amount);
            let smaller = potential_profit(yes, no, side, amount);
            let larger = potential_profit(yes, no, side, amount + Fixed::from_units(extra));
            prop_assert!(larger >= smaller);
        }

        #[test]
        fn trade_never_shrinks_invariant(
            yes in reserve(),
            no in reserve(),
            side in side(),
            amount in amount(),
        ) {
            let projection = project_trade(
                Fixed::from_units(yes),
                Fixed::from_units(no),
                side,
                Fixed::from_units(amount),
            );
            let k = yes as u128 * no as u128;
            let (new_wanted, new_unwanted) = match side {
                Side::Yes => (projection.new_yes_reserve, projection.new_no_reserve),
                Side::No => (projection.new_no_reserve, projection.new_yes_reserve),
            };
            let (new_wanted, new_unwanted) = (new_wanted.raw() as u128, new_unwanted.raw() as u128);

            prop_assert!(new_wanted >= 1);
            // new k >= k, and one raw unit less of the wanted reserve would fall below k
            prop_assert!(new_wanted.checked_mul(new_unwanted).map_or(true, |new_k| new_k >= k));
            prop_assert!((new_wanted - 1).checked_mul(new_unwanted).map_or(false, |below| below < k));
        }

        #[test]
        fn side_swap_is_symmetric(
            r in reserve(),
            s in reserve(),
            amount in amount(),
        ) {
            let (r, s, amount) = (Fixed::from_units(r), Fixed::from_units(s), Fixed::from_units(amount));
            prop_assert_eq!(
                potential_profit(r, s, Side::Yes, amount),
                potential_profit(s, r, Side::No, amount)
            );
        }

        #[test]
        fn pricing_is_deterministic(
            yes in reserve(),
            no in reserve(),
            side in side(),
            amount in amount(),
        ) {
            let (yes, no, amount) = (Fixed::from_units(yes), Fixed::from_units(no), Fixed::from_units(amount));
            prop_assert_eq!(
                project_trade(yes, no, side, amount),
                project_trade(yes, no, side, amount)
            );
        }
    }
}
