use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    error::ErrorCode,
    events::StakingRewardsUpdated,
    helpers::require_role,
    state::{CollectorConfig, Role, RoleRegistry},
};

pub fn handler(ctx: Context<SetStakingRewards>) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.role_registry, Role::Admin)?;
    require!(
        ctx.accounts.staking_program.executable,
        ErrorCode::InvalidProgramAccount
    );

    let config = &mut ctx.accounts.collector_config;
    config.staking_program = ctx.accounts.staking_program.key();
    config.staking_state = ctx.accounts.staking_state.key();
    config.staking_reward_vault = ctx.accounts.staking_reward_vault.key();
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(StakingRewardsUpdated {
        staking_program: config.staking_program,
        staking_state: config.staking_state,
        staking_reward_vault: config.staking_reward_vault,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetStakingRewards<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"collector-config"],
        bump = collector_config.bump,
    )]
    pub collector_config: Account<'info, CollectorConfig>,
    #[account(
        seeds = [b"role-registry"],
        bump = role_registry.bump,
    )]
    pub role_registry: Account<'info, RoleRegistry>,
    /// CHECK: checked to be executable.
    pub staking_program: UncheckedAccount<'info>,
    /// CHECK: owned by the staking program; passed through to it.
    #[account(owner = staking_program.key() @ ErrorCode::InvalidProgramAccount)]
    pub staking_state: UncheckedAccount<'info>,
    #[account(
        constraint = staking_reward_vault.mint == collector_config.reward_mint @ ErrorCode::InvalidMint,
    )]
    pub staking_reward_vault: Account<'info, TokenAccount>,
}
