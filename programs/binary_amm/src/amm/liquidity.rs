//! # Liquidity Allocation
//!
//! An LP share is valued as the geometric mean of the two reserves:
//!
//! ```text
//!            LP = √(YES · NO)
//! ```
//!
//! ## Adding liquidity
//!
//! A deposit of `D` collateral mints `D` YES and `D` NO into the pool. When
//! the pool is balanced that keeps the reserve ratio and the depositor gets
//! `D` LP value. When it is not, the flat deposit over-adds to the side that
//! started smaller, so that side is trimmed back to the current ratio and the
//! excess is handed to the depositor as outcome shares:
//!
//! ```text
//! 1. YES' = YES + D, NO' = NO + D
//! 2. smaller side after the deposit decides the bonus side
//!    YES smaller:  YES* = NO' · no_price / yes_price,  bonus YES = YES' - YES*
//!    otherwise:    NO*  = YES' · yes_price / no_price, bonus NO  = NO'  - NO*
//! 3. lp_shares = √(YES* · NO*) - LP
//! ```
//!
//! With `yes_price = NO / (YES + NO)` the price ratio is just the reserve
//! ratio, which is what gets evaluated so the correction rounds once.
//!
//! ## Removing liquidity
//!
//! The inverse: burnt LP value is paid out as collateral, both reserves drop
//! by it, and whatever the now-larger side holds beyond the original ratio is
//! handed over as outcome shares. After resolution only the winning reserve
//! backs LP value.

use crate::amm::fixed_point::{mul_div, sqrt_product, Fixed};
use crate::state::Side;

/// Which reserve is smaller once the deposit is added to both sides.
///
/// Ties go to `NoOrEqual`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmallerSide {
    Yes,
    NoOrEqual,
}

impl SmallerSide {
    pub fn after_deposit(new_yes_reserve: Fixed, new_no_reserve: Fixed) -> Self {
        if new_yes_reserve < new_no_reserve {
            SmallerSide::Yes
        } else {
            SmallerSide::NoOrEqual
        }
    }
}

/// What a deposit earns. At most one side ever pays a bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiquidityAllocation {
    /// Pool was balanced (or nothing was deposited)
    Balanced { lp_shares: Fixed },
    /// YES side was over-filled; the excess YES is refunded
    YesBonus { lp_shares: Fixed, yes_shares: Fixed },
    /// NO side was over-filled; the excess NO is refunded
    NoBonus { lp_shares: Fixed, no_shares: Fixed },
}

impl LiquidityAllocation {
    pub fn lp_shares(&self) -> Fixed {
        match *self {
            LiquidityAllocation::Balanced { lp_shares }
            | LiquidityAllocation::YesBonus { lp_shares, .. }
            | LiquidityAllocation::NoBonus { lp_shares, .. } => lp_shares,
        }
    }

    pub fn bonus_yes_shares(&self) -> Fixed {
        match *self {
            LiquidityAllocation::YesBonus { yes_shares, .. } => yes_shares,
            _ => Fixed::ZERO,
        }
    }

    pub fn bonus_no_shares(&self) -> Fixed {
        match *self {
            LiquidityAllocation::NoBonus { no_shares, .. } => no_shares,
            _ => Fixed::ZERO,
        }
    }
}

/// LP value and bonus outcome shares earned by depositing `deposit`.
///
/// # Arguments
/// * `current_lp_value` - The pool's LP value before the deposit
/// * `yes_reserve` / `no_reserve` - Current reserves
/// * `deposit` - Collateral added (a non-positive deposit earns nothing)
///
/// # Example
/// ```ignore
/// // 300 YES / 700 NO, LP = √210_000, deposit 100
/// // YES' = 400, NO' = 800, YES* = 800 · 300 / 700 = 342.857142857
/// // bonus YES = 57.142857143, lp_shares ≈ 65.465
/// ```
pub fn allocate(
    current_lp_value: Fixed,
    yes_reserve: Fixed,
    no_reserve: Fixed,
    deposit: Fixed,
) -> LiquidityAllocation {
    if !deposit.is_positive() {
        return LiquidityAllocation::Balanced {
            lp_shares: Fixed::ZERO,
        };
    }
    if yes_reserve == no_reserve {
        return LiquidityAllocation::Balanced { lp_shares: deposit };
    }

    let new_yes_reserve = yes_reserve + deposit;
    let new_no_reserve = no_reserve + deposit;

    match SmallerSide::after_deposit(new_yes_reserve, new_no_reserve) {
        SmallerSide::Yes => {
            // NO' · no_price / yes_price == NO' · YES / NO
            let target_yes = mul_div(new_no_reserve, yes_reserve, no_reserve);
            LiquidityAllocation::YesBonus {
                lp_shares: sqrt_product(target_yes, new_no_reserve) - current_lp_value,
                yes_shares: new_yes_reserve - target_yes,
            }
        }
        SmallerSide::NoOrEqual => {
            // YES' · yes_price / no_price == YES' · NO / YES
            let target_no = mul_div(new_yes_reserve, no_reserve, yes_reserve);
            LiquidityAllocation::NoBonus {
                lp_shares: sqrt_product(new_yes_reserve, target_no) - current_lp_value,
                no_shares: new_no_reserve - target_no,
            }
        }
    }
}

/// What burning LP value pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiquidityWithdrawal {
    /// Balanced pool (or nothing burnt): collateral only
    Balanced { collateral_out: Fixed },
    /// Resolved market: paid from the winning reserve
    Resolved { collateral_out: Fixed },
    /// YES left over after rebalancing
    YesLeftover { collateral_out: Fixed, yes_shares: Fixed },
    /// NO left over after rebalancing
    NoLeftover { collateral_out: Fixed, no_shares: Fixed },
}

impl LiquidityWithdrawal {
    pub fn collateral_out(&self) -> Fixed {
        match *self {
            LiquidityWithdrawal::Balanced { collateral_out }
            | LiquidityWithdrawal::Resolved { collateral_out }
            | LiquidityWithdrawal::YesLeftover { collateral_out, .. }
            | LiquidityWithdrawal::NoLeftover { collateral_out, .. } => collateral_out,
        }
    }

    pub fn yes_shares(&self) -> Fixed {
        match *self {
            LiquidityWithdrawal::YesLeftover { yes_shares, .. } => yes_shares,
            _ => Fixed::ZERO,
        }
    }

    pub fn no_shares(&self) -> Fixed {
        match *self {
            LiquidityWithdrawal::NoLeftover { no_shares, .. } => no_shares,
            _ => Fixed::ZERO,
        }
    }
}

/// Collateral and outcome shares returned for burning `lp_to_remove`.
///
/// `resolution` is the winning side once the market has resolved.
pub fn withdraw(
    total_lp_value: Fixed,
    yes_reserve: Fixed,
    no_reserve: Fixed,
    lp_to_remove: Fixed,
    resolution: Option<Side>,
) -> LiquidityWithdrawal {
    if !lp_to_remove.is_positive() {
        return LiquidityWithdrawal::Balanced {
            collateral_out: Fixed::ZERO,
        };
    }

    if let Some(winner) = resolution {
        let winning_reserve = match winner {
            Side::Yes => yes_reserve,
            Side::No => no_reserve,
        };
        let collateral_out = if total_lp_value.is_positive() {
            mul_div(lp_to_remove, winning_reserve, total_lp_value)
        } else {
            Fixed::ZERO
        };
        return LiquidityWithdrawal::Resolved { collateral_out };
    }

    if yes_reserve == no_reserve {
        return LiquidityWithdrawal::Balanced {
            collateral_out: lp_to_remove,
        };
    }

    let collateral_out = mul_div(total_lp_value, lp_to_remove, yes_reserve.max(no_reserve));
    let remaining_yes = yes_reserve - collateral_out;
    let remaining_no = no_reserve - collateral_out;

    if remaining_no > remaining_yes {
        // keep NO at the original ratio against the YES that is left
        let kept_no = mul_div(remaining_yes, no_reserve, yes_reserve);
        LiquidityWithdrawal::NoLeftover {
            collateral_out,
            no_shares: remaining_no - kept_no,
        }
    } else {
        let kept_yes = mul_div(remaining_no, yes_reserve, no_reserve);
        LiquidityWithdrawal::YesLeftover {
            collateral_out,
            yes_shares: remaining_yes - kept_yes,
        }
    }
}

/// Share of the pool held by `user_lp`, in basis points.
pub fn pool_share_bps(user_lp: Fixed, total_lp: Fixed) -> u64 {
    user_lp.bps_of(total_lp)
}

/// Share of the pool held after minting `minted` more LP value.
pub fn projected_pool_share_bps(user_lp: Fixed, minted: Fixed, total_lp: Fixed) -> u64 {
    pool_share_bps(user_lp + minted, total_lp + minted)
}
