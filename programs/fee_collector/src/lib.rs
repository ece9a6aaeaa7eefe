use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod interfaces;
pub mod state;


pub use constants::*;
pub use error::*;
pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

declare_id!("2QCPe4GU6sCHfMGLaq8CMzay576u4245BuSDNUfXJ2eR");

#[program]
pub mod fee_collector {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, governor: Pubkey, treasury: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, governor, treasury)
    }

    pub fn grant_role(ctx: Context<GrantRole>, role: Role, account: Pubkey) -> Result<()> {
        instructions::grant_role::handler(ctx, role, account)
    }

    pub fn revoke_role(ctx: Context<RevokeRole>, role: Role, account: Pubkey) -> Result<()> {
        instructions::revoke_role::handler(ctx, role, account)
    }

    pub fn renounce_role(ctx: Context<RenounceRole>, role: Role) -> Result<()> {
        instructions::renounce_role::handler(ctx, role)
    }

    pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
        instructions::set_paused::handler(ctx, true)
    }

    pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
        instructions::set_paused::handler(ctx, false)
    }

    pub fn set_treasury_fee(ctx: Context<SetTreasuryFee>, bps: u16) -> Result<()> {
        instructions::set_treasury_fee::handler(ctx, bps)
    }

    pub fn set_harvest_incentive(ctx: Context<SetHarvestIncentive>, bps: u16) -> Result<()> {
        instructions::set_harvest_incentive::handler(ctx, bps)
    }

    pub fn set_treasury(ctx: Context<SetTreasury>, treasury: Pubkey) -> Result<()> {
        instructions::set_treasury::handler(ctx, treasury)
    }

    pub fn set_staking_rewards(ctx: Context<SetStakingRewards>) -> Result<()> {
        instructions::set_staking_rewards::handler(ctx)
    }

    pub fn set_recoverable(
        ctx: Context<SetRecoverable>,
        mint: Pubkey,
        recoverable: bool,
    ) -> Result<()> {
        instructions::set_recoverable::handler(ctx, mint, recoverable)
    }

    pub fn recover_lp<'info>(
        ctx: Context<'_, '_, 'info, 'info, RecoverLp<'info>>,
        mints: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::recover_lp::handler(ctx, mints)
    }

    pub fn harvest<'info>(
        ctx: Context<'_, '_, 'info, 'info, Harvest<'info>>,
        positions: Vec<Pubkey>,
        redeem_all: bool,
        min_reward_out: u64,
    ) -> Result<()> {
        instructions::harvest::handler(ctx, positions, redeem_all, min_reward_out)
    }
}
