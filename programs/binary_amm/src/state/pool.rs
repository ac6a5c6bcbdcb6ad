//! Liquidity Pool State
//!
//! [`MarketPool`] mirrors the pool program's account byte for byte.
//! [`Pool`] is the value snapshot the curve math runs on: quotes never write
//! back to the pool.

use anchor_lang::prelude::*;

use crate::amm::{
    allocate, implied_price_bps, project_trade, withdraw, Fixed, LiquidityAllocation,
    LiquidityWithdrawal, TradeProjection,
};

/// Liquidity pool account owned by the pool program
///
/// Seeds (under `Config::pool_program`): ["pool", market]
///
/// Field order has to match the pool program's IDL; it is not checked here.
#[account]
#[derive(InitSpace)]
pub struct MarketPool {
    /// Market this pool belongs to
    pub market: Pubkey,

    /// YES reserve, raw units (10^9 per token)
    pub yes_liquidity: u64,

    /// NO reserve, raw units
    pub no_liquidity: u64,

    /// Total LP value outstanding, raw units
    pub liquidity_shares: u64,

    /// Collateral held for the pool
    pub usd_collateral: u64,

    pub bump: u8,
}

impl MarketPool {
    pub const SEED: &'static [u8] = b"pool";
}

/// Outcome side of a trade
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Yes,
    No,
}

/// Point-in-time view of one market's liquidity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    pub yes_reserve: Fixed,
    pub no_reserve: Fixed,
    /// Geometric-mean size of the pool, tracked by the pool program
    pub total_lp_value: Fixed,
}

impl Pool {
    pub fn new(yes_reserve: Fixed, no_reserve: Fixed, total_lp_value: Fixed) -> Self {
        Self {
            yes_reserve,
            no_reserve,
            total_lp_value,
        }
    }

    pub fn from_account(account: &MarketPool) -> Self {
        Self::new(
            Fixed::from_units(account.yes_liquidity),
            Fixed::from_units(account.no_liquidity),
            Fixed::from_units(account.liquidity_shares),
        )
    }

    pub fn is_balanced(&self) -> bool {
        self.yes_reserve == self.no_reserve
    }

    pub fn project_trade(&self, side: Side, amount: Fixed) -> TradeProjection {
        project_trade(self.yes_reserve, self.no_reserve, side, amount)
    }

    pub fn allocate(&self, deposit: Fixed) -> LiquidityAllocation {
        allocate(self.total_lp_value, self.yes_reserve, self.no_reserve, deposit)
    }

    pub fn withdraw(&self, lp_to_remove: Fixed, resolution: Option<Side>) -> LiquidityWithdrawal {
        withdraw(
            self.total_lp_value,
            self.yes_reserve,
            self.no_reserve,
            lp_to_remove,
            resolution,
        )
    }

    /// (yes_price_bps, no_price_bps)
    pub fn price_bps(&self) -> (u64, u64) {
        implied_price_bps(self.yes_reserve, self.no_reserve)
    }
}
