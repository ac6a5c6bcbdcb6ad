//! Quote Configuration
//!
//! Settings shared by every quote instruction.

use anchor_lang::prelude::*;

use crate::amm::{BPS_SCALE, SCALE};

/// Global quote configuration account (singleton PDA)
///
/// Seeds: ["quote_config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Administrator allowed to change the settings
    pub admin: Pubkey,

    /// Program that owns the market and pool accounts being quoted
    pub pool_program: Pubkey,

    /// Collateral token mint deposits and trades are denominated in
    pub collateral_mint: Pubkey,

    /// Trading fee in basis points, taken from the quoted profit
    /// (100 = 1%, max 3000 = 30%)
    pub fee_bps: u64,

    /// Largest trade or deposit a quote will accept, in raw units
    pub max_amount: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"quote_config";

    pub const MAX_FEE_BPS: u64 = BPS_SCALE * 3 / 10;

    /// 100 million whole tokens
    pub const DEFAULT_MAX_AMOUNT: u64 = 100_000_000 * SCALE as u64;

    /// Reject inputs above the configured cap
    pub fn check_amount(&self, amount: u64) -> Result<()> {
        require!(amount <= self.max_amount, ConfigError::AmountTooLarge);
        Ok(())
    }
}

#[error_code]
pub enum ConfigError {
    #[msg("Only the config admin can do this")]
    Unauthorized,
    #[msg("Fee cannot exceed 30%")]
    FeeTooHigh,
    #[msg("Max amount must be positive")]
    InvalidMaxAmount,
    #[msg("Amount exceeds the configured maximum")]
    AmountTooLarge,
}
