use anchor_lang::prelude::*;

use crate::{
    events::TreasuryUpdated,
    helpers::require_role,
    state::{CollectorConfig, Role, RoleRegistry},
};

pub fn handler(ctx: Context<SetTreasury>, treasury: Pubkey) -> Result<()> {
    require_role(
        &ctx.accounts.authority,
        &ctx.accounts.role_registry,
        Role::Governor,
    )?;

    let config = &mut ctx.accounts.collector_config;
    let previous = config.treasury;
    config.treasury = treasury;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(TreasuryUpdated {
        previous,
        current: treasury,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTreasury<'info> {
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
