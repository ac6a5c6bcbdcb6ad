//! Market Account Mirror
//!
//! Layout of the pool program's market account. Quotes only read it to find
//! out whether (and how) the market resolved.

use anchor_lang::prelude::*;

use crate::state::Side;

/// Prediction market account owned by the pool program
#[account]
#[derive(InitSpace)]
pub struct Market {
    /// Collateral (USD) token mint
    pub usd_mint: Pubkey,

    /// YES outcome token mint
    pub yes_mint: Pubkey,

    /// NO outcome token mint
    pub no_mint: Pubkey,

    /// Collateral escrow
    pub vault: Pubkey,

    /// Who can resolve
    pub authority: Pubkey,

    pub resolved: bool,

    /// Winning outcome once resolved: [`Market::OUTCOME_NO`] or [`Market::OUTCOME_YES`]
    pub outcome: Option<u8>,

    pub bump: u8,
}

impl Market {
    pub const OUTCOME_NO: u8 = 0;
    pub const OUTCOME_YES: u8 = 1;

    /// Winning side, `None` while the market is open
    pub fn resolution(&self) -> Option<Side> {
        if !self.resolved {
            return None;
        }
        match self.outcome {
            Some(Self::OUTCOME_YES) => Some(Side::Yes),
            Some(Self::OUTCOME_NO) => Some(Side::No),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(resolved: bool, outcome: Option<u8>) -> Market {
        Market {
            usd_mint: Pubkey::default(),
            yes_mint: Pubkey::default(),
            no_mint: Pubkey::default(),
            vault: Pubkey::default(),
            authority: Pubkey::default(),
            resolved,
            outcome,
            bump: 255,
        }
    }

    #[test]
    fn test_resolution() {
        assert_eq!(market(false, None).resolution(), None);
        assert_eq!(market(false, Some(Market::OUTCOME_YES)).resolution(), None);
        assert_eq!(market(true, Some(Market::OUTCOME_YES)).resolution(), Some(Side::Yes));
        assert_eq!(market(true, Some(Market::OUTCOME_NO)).resolution(), Some(Side::No));
        assert_eq!(market(true, Some(7)).resolution(), None);
    }

    #[test]
    fn test_decodes_with_discriminator() {
        let original = market(true, Some(Market::OUTCOME_NO));
        let mut data = Vec::new();
        original.try_serialize(&mut data).unwrap();

        let decoded = Market::try_deserialize(&mut &data[..]).unwrap();
        assert_eq!(decoded.resolution(), Some(Side::No));
        assert_eq!(decoded.bump, 255);
    }
}
