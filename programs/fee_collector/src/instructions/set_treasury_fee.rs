use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    events::TreasuryFeeUpdated,
    helpers::require_role,
    state::{CollectorConfig, Role, RoleRegistry},
};

pub fn handler(ctx: Context<SetTreasuryFee>, bps: u16) -> Result<()> {
    require_role(
        &ctx.accounts.authority,
        &ctx.accounts.role_registry,
        Role::Governor,
    )?;

    let config = &mut ctx.accounts.collector_config;
    let previous_bps = config.fees.set_treasury_fee(bps)?;
    config.last_updated_at = Clock::get()?.unix_timestamp;
    if config.fees.treasury_fee() as u64 + config.fees.harvest_incentive() as u64 > BPS_DENOM {
        msg!(
            "treasury fee {} plus harvest incentive {} exceeds {} bps; harvests fail until lowered",
            bps,
            config.fees.harvest_incentive(),
            BPS_DENOM
        );
    }

    emit!(TreasuryFeeUpdated {
        previous_bps,
        current_bps: bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetTreasuryFee<'info> {
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
