use anchor_lang::prelude::*;

use crate::state::Role;

#[event]
pub struct RoleGranted {
    pub role: Role,
    pub account: Pubkey,
    pub sender: Pubkey,
}

#[event]
pub struct RoleRevoked {
    pub role: Role,
    pub account: Pubkey,
    pub sender: Pubkey,
}

#[event]
pub struct PauseChanged {
    pub paused: bool,
    pub authority: Pubkey,
}

#[event]
pub struct TreasuryFeeUpdated {
    pub previous_bps: u16,
    pub current_bps: u16,
}

#[event]
pub struct HarvestIncentiveUpdated {
    pub previous_bps: u16,
    pub current_bps: u16,
}

#[event]
pub struct TreasuryUpdated {
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
pub struct StakingRewardsUpdated {
    pub staking_program: Pubkey,
    pub staking_state: Pubkey,
    pub staking_reward_vault: Pubkey,
}

#[event]
pub struct RecoverableUpdated {
    pub mint: Pubkey,
    pub recoverable: bool,
}

#[event]
pub struct LpRecovered {
    pub mint: Pubkey,
    pub amount: u64,
    pub treasury: Pubkey,
}

#[event]
pub struct Harvested {
    pub harvester: Pubkey,
    pub balance_before: u64,
    pub balance_after: u64,
    pub staking_amount: u64,
    pub treasury_amount: u64,
    pub caller_amount: u64,
    pub redeemed: u8,
    pub skipped: u8,
}
