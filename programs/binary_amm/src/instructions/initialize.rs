//! Quote Configuration Setup
//!
//! Creates the config PDA the quote instructions read. Called once per
//! deployment.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::state::{Config, ConfigError};

/// Accounts required to create the config
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the config admin
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Quote configuration (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// Collateral token mint of the quoted markets
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        fee_bps: u64,
        max_amount: Option<u64>,
        pool_program: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(fee_bps <= Config::MAX_FEE_BPS, ConfigError::FeeTooHigh);
        let max_amount = max_amount.unwrap_or(Config::DEFAULT_MAX_AMOUNT);
        require!(max_amount > 0, ConfigError::InvalidMaxAmount);

        self.config.set_inner(Config {
            admin: self.admin.key(),
            pool_program,
            collateral_mint: self.collateral_mint.key(),
            fee_bps,
            max_amount,
            bump: bumps.config,
        });

        msg!("Quote config initialized");
        msg!("Admin: {}", self.admin.key());
        msg!("Pool program: {}", pool_program);
        msg!("Fee: {} bps", fee_bps);
        msg!("Max amount: {}", max_amount);

        Ok(())
    }
}
