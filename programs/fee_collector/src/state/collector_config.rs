use anchor_lang::prelude::*;

use crate::state::FeeSplitConfig;

#[account]
#[derive(InitSpace)]
pub struct CollectorConfig {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub wrapped_native_mint: Pubkey,
    pub amm_program: Pubkey,
    pub staking_program: Pubkey,
    pub staking_state: Pubkey,
    pub staking_reward_vault: Pubkey,
    pub treasury: Pubkey,
    pub reward_vault: Pubkey,
    pub fees: FeeSplitConfig,
    pub paused: bool,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}

impl CollectorConfig {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn treasury_fee(&self) -> u16 {
        self.fees.treasury_fee()
    }

    pub fn harvest_incentive(&self) -> u16 {
        self.fees.harvest_incentive()
    }
}
