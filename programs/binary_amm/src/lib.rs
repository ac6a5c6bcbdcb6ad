//! # Binary AMM: Quotes for YES/NO Prediction Pools
//!
//! Constant-product pricing for binary prediction markets, shared by the
//! client (as a library, with the `no-entrypoint` feature) and an on-chain
//! program that answers quotes against the live pool accounts.
//!
//! ## Overview
//!
//! - Trades: how many outcome shares a buyer nets beyond their principal.
//! - Liquidity: LP value minted by a deposit and the outcome shares refunded
//!   when the pool is imbalanced, plus the inverse for withdrawals.
//!
//! ## How it works
//! - The math lives in [`amm`] and works on [`Pool`] snapshots in 9-decimal
//!   fixed point, the same scale the pool program stores.
//! - The quote instructions decode the pool program's accounts, run the same
//!   functions, and return the result without writing anything.

use anchor_lang::prelude::*;

pub mod amm;
pub mod instructions;
pub mod state;

pub use amm::*;
pub use instructions::*;
pub use state::*;

// Replace with your deployed program ID
declare_id!("44MUUMmohzxr4L4DQbxwQ4MSaBTyMMuYXQbrqSgPzpRp");

/// Quote program
#[program]
pub mod binary_amm {
    use super::*;

    /// Create the quote configuration
    pub fn initialize(
        ctx: Context<Initialize>,
        fee_bps: u64,
        max_amount: Option<u64>,
        pool_program: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .initialize(fee_bps, max_amount, pool_program, &ctx.bumps)
    }

    /// Change the fee hook and/or the amount cap (admin only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        fee_bps: Option<u64>,
        max_amount: Option<u64>,
    ) -> Result<()> {
        ctx.accounts.update_config(fee_bps, max_amount)
    }

    /// Shares a buyer of `side` nets beyond `amount`
    pub fn quote_trade(ctx: Context<Quote>, side: Side, amount: u64) -> Result<TradeQuote> {
        ctx.accounts.quote_trade(side, amount)
    }

    /// LP value and bonus shares for depositing `amount`
    pub fn quote_add_liquidity(ctx: Context<Quote>, amount: u64) -> Result<LiquidityQuote> {
        ctx.accounts.quote_add_liquidity(amount)
    }

    /// Collateral and outcome shares for burning `lp_shares`
    pub fn quote_remove_liquidity(
        ctx: Context<Quote>,
        lp_shares: u64,
    ) -> Result<WithdrawalQuote> {
        ctx.accounts.quote_remove_liquidity(lp_shares)
    }
}
