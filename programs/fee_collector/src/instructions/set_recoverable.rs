use anchor_lang::prelude::*;

use crate::{
    events::RecoverableUpdated,
    helpers::require_role,
    state::{CollectorConfig, RecoverableSet, Role, RoleRegistry},
};

pub fn handler(ctx: Context<SetRecoverable>, mint: Pubkey, recoverable: bool) -> Result<()> {
    require_role(
        &ctx.accounts.authority,
        &ctx.accounts.role_registry,
        Role::Recovery,
    )?;

    let reward_mint = ctx.accounts.collector_config.reward_mint;
    ctx.accounts
        .recoverable_set
        .set(&reward_mint, mint, recoverable)?;

    emit!(RecoverableUpdated { mint, recoverable });
    Ok(())
}

#[derive(Accounts)]
pub struct SetRecoverable<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        seeds = [b"collector-config"],
        bump = collector_config.bump,
    )]
    pub collector_config: Account<'info, CollectorConfig>,
    #[account(
        seeds = [b"role-registry"],
        bump = role_registry.bump,
    )]
    pub role_registry: Account<'info, RoleRegistry>,
    #[account(
        mut,
        seeds = [b"recoverable-set"],
        bump = recoverable_set.bump,
    )]
    pub recoverable_set: Account<'info, RecoverableSet>,
}
