//! Config Updates (admin only)

use anchor_lang::prelude::*;

use crate::state::{Config, ConfigError};

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub fee_bps: u64,
    pub max_amount: u64,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(constraint = admin.key() == config.admin @ ConfigError::Unauthorized)]
    pub admin: Signer<'info>,

    #[account(mut, seeds = [Config::SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateConfig<'info> {
    /// Change the fee and/or the amount cap; `None` keeps the current value
    pub fn update_config(&mut self, fee_bps: Option<u64>, max_amount: Option<u64>) -> Result<()> {
        if let Some(fee_bps) = fee_bps {
            require!(fee_bps <= Config::MAX_FEE_BPS, ConfigError::FeeTooHigh);
            msg!("Fee: {} -> {} bps", self.config.fee_bps, fee_bps);
            self.config.fee_bps = fee_bps;
        }
        if let Some(max_amount) = max_amount {
            require!(max_amount > 0, ConfigError::InvalidMaxAmount);
            msg!("Max amount: {} -> {}", self.config.max_amount, max_amount);
            self.config.max_amount = max_amount;
        }

        emit!(ConfigUpdated {
            admin: self.admin.key(),
            fee_bps: self.config.fee_bps,
            max_amount: self.config.max_amount,
        });

        Ok(())
    }
}
