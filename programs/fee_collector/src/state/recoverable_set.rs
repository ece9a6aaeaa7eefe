use anchor_lang::prelude::*;

use crate::{constants::MAX_RECOVERABLE_MINTS, error::ErrorCode};

/// Mints that may be swept to the treasury outside of a harvest.
#[account]
#[derive(InitSpace)]
pub struct RecoverableSet {
    #[max_len(MAX_RECOVERABLE_MINTS)]
    pub mints: Vec<Pubkey>,
    pub bump: u8,
}

impl RecoverableSet {
    pub fn is_recoverable(&self, mint: &Pubkey) -> bool {
        self.mints.contains(mint)
    }

    /// Overwrites the flag for `mint`. The reward mint is never recoverable.
    /// Returns whether the set changed.
    pub fn set(&mut self, reward_mint: &Pubkey, mint: Pubkey, recoverable: bool) -> Result<bool> {
        require_keys_neq!(mint, *reward_mint, ErrorCode::RewardNotRecoverable);

        let idx = self.mints.iter().position(|m| *m == mint);
        match (idx, recoverable) {
            (Some(_), true) | (None, false) => Ok(false),
            (None, true) => {
                require!(
                    self.mints.len() < MAX_RECOVERABLE_MINTS,
                    ErrorCode::RecoverableSetFull
                );
                self.mints.push(mint);
                Ok(true)
            }
            (Some(idx), false) => {
                self.mints.swap_remove(idx);
                Ok(true)
            }
        }
    }
}
