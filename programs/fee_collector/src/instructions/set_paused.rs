use anchor_lang::prelude::*;

use crate::{
    events::PauseChanged,
    helpers::require_role,
    state::{CollectorConfig, Role, RoleRegistry},
};

/// Backs both `pause` and `unpause`.
pub fn handler(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.role_registry, Role::Pause)?;

    ctx.accounts.collector_config.paused = paused;
    ctx.accounts.collector_config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(PauseChanged {
        paused,
        authority: ctx.accounts.authority.key(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
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
}
