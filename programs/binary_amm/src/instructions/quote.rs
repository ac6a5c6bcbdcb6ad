//! Read-Only Quotes
//!
//! Runs the curve math against the pool program's live accounts. Nothing is
//! written: a client simulates the transaction and reads the quote from the
//! return data (or the emitted event), so the preview it shows is produced
//! by the same code an on-chain caller gets.
//!
//! Amounts on the wire are raw units (10^9 per token). Negative results of
//! the math (an LP value behind the reserves) are shown as zero.

use anchor_lang::prelude::*;

use crate::amm::{apply_fee, projected_pool_share_bps, Fixed};
use crate::state::{Config, Market, MarketPool, Pool, Side};

#[event]
pub struct TradeQuoted {
    pub market: Pubkey,
    pub side: Side,
    pub amount: u64,
    pub profit_shares: u64,
    pub net_profit_shares: u64,
}

#[event]
pub struct LiquidityQuoted {
    pub market: Pubkey,
    pub amount: u64,
    pub lp_shares: u64,
    pub bonus_yes_shares: u64,
    pub bonus_no_shares: u64,
}

#[event]
pub struct WithdrawalQuoted {
    pub market: Pubkey,
    pub lp_shares: u64,
    pub collateral_out: u64,
    pub yes_shares: u64,
    pub no_shares: u64,
}

/// Result of `quote_trade`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeQuote {
    pub side: Side,
    pub amount: u64,
    /// Shares received beyond the principal, before fees
    pub profit_shares: u64,
    pub fee_shares: u64,
    pub net_profit_shares: u64,
    /// Pool prices before the trade
    pub yes_price_bps: u64,
    pub no_price_bps: u64,
}

impl TradeQuote {
    pub fn build(pool: &Pool, fee_bps: u64, side: Side, amount: u64) -> Result<Self> {
        let projection = pool.project_trade(side, Fixed::from_units(amount));
        let (fee, net) = apply_fee(projection.profit, fee_bps);
        let (yes_price_bps, no_price_bps) = pool.price_bps();

        Ok(Self {
            side,
            amount,
            profit_shares: projection.profit.to_units()?,
            fee_shares: fee.to_units()?,
            net_profit_shares: net.to_units()?,
            yes_price_bps,
            no_price_bps,
        })
    }
}

/// Result of `quote_add_liquidity`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiquidityQuote {
    pub amount: u64,
    pub lp_shares: u64,
    pub bonus_yes_shares: u64,
    pub bonus_no_shares: u64,
    /// Fraction of the pool the minted LP value represents afterwards
    pub pool_share_bps: u64,
}

impl LiquidityQuote {
    pub fn build(pool: &Pool, amount: u64) -> Result<Self> {
        let allocation = pool.allocate(Fixed::from_units(amount));
        let lp_shares = allocation.lp_shares();

        Ok(Self {
            amount,
            lp_shares: lp_shares.to_units()?,
            bonus_yes_shares: allocation.bonus_yes_shares().to_units()?,
            bonus_no_shares: allocation.bonus_no_shares().to_units()?,
            pool_share_bps: projected_pool_share_bps(Fixed::ZERO, lp_shares, pool.total_lp_value),
        })
    }
}

/// Result of `quote_remove_liquidity`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawalQuote {
    pub lp_shares: u64,
    pub collateral_out: u64,
    pub yes_shares: u64,
    pub no_shares: u64,
    pub resolved: bool,
}

impl WithdrawalQuote {
    pub fn build(pool: &Pool, resolution: Option<Side>, lp_shares: u64) -> Result<Self> {
        let withdrawal = pool.withdraw(Fixed::from_units(lp_shares), resolution);

        Ok(Self {
            lp_shares,
            collateral_out: withdrawal.collateral_out().to_units()?,
            yes_shares: withdrawal.yes_shares().to_units()?,
            no_shares: withdrawal.no_shares().to_units()?,
            resolved: resolution.is_some(),
        })
    }
}

/// Accounts shared by every quote
#[derive(Accounts)]
pub struct Quote<'info> {
    #[account(seeds = [Config::SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: owned by the pool program; decoded as a `Market` when needed
    #[account(owner = config.pool_program @ QuoteError::ForeignAccount)]
    pub market: UncheckedAccount<'info>,

    /// CHECK: the market's pool PDA under the pool program; decoded as a `MarketPool`
    #[account(
        owner = config.pool_program @ QuoteError::ForeignAccount,
        seeds = [MarketPool::SEED, market.key().as_ref()],
        bump,
        seeds::program = config.pool_program,
    )]
    pub pool: UncheckedAccount<'info>,
}

impl<'info> Quote<'info> {
    pub fn quote_trade(&self, side: Side, amount: u64) -> Result<TradeQuote> {
        self.config.check_amount(amount)?;

        let quote = TradeQuote::build(&self.snapshot()?, self.config.fee_bps, side, amount)?;

        msg!(
            "Trade quote {:?} {}: profit {} fee {} net {}",
            side,
            amount,
            quote.profit_shares,
            quote.fee_shares,
            quote.net_profit_shares
        );
        emit!(TradeQuoted {
            market: self.market.key(),
            side,
            amount,
            profit_shares: quote.profit_shares,
            net_profit_shares: quote.net_profit_shares,
        });

        Ok(quote)
    }

    pub fn quote_add_liquidity(&self, amount: u64) -> Result<LiquidityQuote> {
        self.config.check_amount(amount)?;

        let quote = LiquidityQuote::build(&self.snapshot()?, amount)?;

        msg!(
            "Liquidity quote {}: lp {} bonus yes {} bonus no {}",
            amount,
            quote.lp_shares,
            quote.bonus_yes_shares,
            quote.bonus_no_shares
        );
        emit!(LiquidityQuoted {
            market: self.market.key(),
            amount,
            lp_shares: quote.lp_shares,
            bonus_yes_shares: quote.bonus_yes_shares,
            bonus_no_shares: quote.bonus_no_shares,
        });

        Ok(quote)
    }

    pub fn quote_remove_liquidity(&self, lp_shares: u64) -> Result<WithdrawalQuote> {
        let pool = self.snapshot()?;
        let resolution = self.resolution()?;
        let quote = WithdrawalQuote::build(&pool, resolution, lp_shares)?;

        msg!(
            "Withdrawal quote {}: collateral {} yes {} no {} (resolved: {})",
            lp_shares,
            quote.collateral_out,
            quote.yes_shares,
            quote.no_shares,
            quote.resolved
        );
        emit!(WithdrawalQuoted {
            market: self.market.key(),
            lp_shares,
            collateral_out: quote.collateral_out,
            yes_shares: quote.yes_shares,
            no_shares: quote.no_shares,
        });

        Ok(quote)
    }

    fn snapshot(&self) -> Result<Pool> {
        let data = self.pool.try_borrow_data()?;
        let account = MarketPool::try_deserialize(&mut &data[..])?;
        require_keys_eq!(account.market, self.market.key(), QuoteError::PoolMarketMismatch);
        Ok(Pool::from_account(&account))
    }

    fn resolution(&self) -> Result<Option<Side>> {
        let data = self.market.try_borrow_data()?;
        let market = Market::try_deserialize(&mut &data[..])?;
        Ok(market.resolution())
    }
}

#[error_code]
pub enum QuoteError {
    #[msg("Account is not owned by the configured pool program")]
    ForeignAccount,
    #[msg("Pool does not belong to this market")]
    PoolMarketMismatch,
}
