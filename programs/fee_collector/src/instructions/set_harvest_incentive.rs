use anchor_lang::prelude::*;

use crate::{
    events::HarvestIncentiveUpdated,
    helpers::require_role,
    state::{CollectorConfig, Role, RoleRegistry},
};

pub fn handler(ctx: Context<SetHarvestIncentive>, bps: u16) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.role_registry, Role::Admin)?;

    let config = &mut ctx.accounts.collector_config;
    let previous_bps = config.fees.set_harvest_incentive(bps)?;
    config.last_updated_at = Clock::get()?.unix_timestamp;

    emit!(HarvestIncentiveUpdated {
        previous_bps,
        current_bps: bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetHarvestIncentive<'info> {
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
