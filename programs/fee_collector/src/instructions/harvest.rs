use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    constants::COLLECTOR_AUTHORITY_SEED,
    engine::{self, RouteConfig},
    error::ErrorCode,
    events::Harvested,
    helpers::{require_not_paused, require_role},
    interfaces::{amm::CpiVenue, staking::CpiRewardSink},
    state::{CollectorConfig, Role, RoleRegistry},
};

/// Pair accounts, their LP mints and vaults, and the collector's token
/// accounts for every mint touched go in `remaining_accounts`, in any order.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Harvest<'info>>,
    positions: Vec<Pubkey>,
    redeem_all: bool,
    min_reward_out: u64,
) -> Result<()> {
    require_role(&ctx.accounts.harvester, &ctx.accounts.role_registry, Role::Harvest)?;
    require_not_paused(&ctx.accounts.collector_config)?;

    let accounts = &ctx.accounts;
    let config = &accounts.collector_config;
    let route = RouteConfig {
        reward_mint: config.reward_mint,
        wrapped_native_mint: config.wrapped_native_mint,
    };
    let collector_authority_bump = ctx.bumps.collector_authority;
    let signer_seed_group: &[&[u8]] = &[COLLECTOR_AUTHORITY_SEED, &[collector_authority_bump]];
    let signer_seeds = &[signer_seed_group];

    let mut venue = CpiVenue::new(
        accounts.amm_program.to_account_info(),
        accounts.token_program.to_account_info(),
        accounts.collector_authority.to_account_info(),
        signer_seeds,
        ctx.remaining_accounts,
    )
    .with_account(accounts.reward_vault.to_account_info());
    let mut sink = CpiRewardSink {
        token_program: accounts.token_program.to_account_info(),
        collector_authority: accounts.collector_authority.to_account_info(),
        reward_vault: accounts.reward_vault.to_account_info(),
        staking_program: accounts.staking_program.to_account_info(),
        staking_state: accounts.staking_state.to_account_info(),
        staking_reward_vault: accounts.staking_reward_vault.to_account_info(),
        treasury_account: accounts.treasury_reward_account.to_account_info(),
        caller_account: accounts.harvester_reward_account.to_account_info(),
        signer_seeds,
    };

    let receipt = engine::harvest(
        &mut venue,
        &mut sink,
        &route,
        &config.fees,
        &positions,
        redeem_all,
        min_reward_out,
    )?;

    msg!(
        "harvest: redeemed {} skipped {} distributed {}",
        receipt.redeemed,
        receipt.skipped,
        receipt.balance_after
    );
    emit!(Harvested {
        harvester: accounts.harvester.key(),
        balance_before: receipt.balance_before,
        balance_after: receipt.balance_after,
        staking_amount: receipt.split.staking,
        treasury_amount: receipt.split.treasury,
        caller_amount: receipt.split.caller,
        redeemed: receipt.redeemed,
        skipped: receipt.skipped,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Harvest<'info> {
    pub harvester: Signer<'info>,
    #[account(
        seeds = [b"collector-config"],
        bump = collector_config.bump,
        has_one = amm_program @ ErrorCode::InvalidProgramAccount,
        has_one = staking_program @ ErrorCode::InvalidProgramAccount,
        has_one = staking_state @ ErrorCode::InvalidProgramAccount,
        has_one = staking_reward_vault @ ErrorCode::InvalidTokenAccount,
        has_one = reward_vault @ ErrorCode::InvalidTokenAccount,
    )]
    pub collector_config: Box<Account<'info, CollectorConfig>>,
    #[account(
        seeds = [b"role-registry"],
        bump = role_registry.bump,
    )]
    pub role_registry: Box<Account<'info, RoleRegistry>>,
    /// CHECK: signing PDA for the collector's token accounts.
    #[account(seeds = [COLLECTOR_AUTHORITY_SEED], bump)]
    pub collector_authority: UncheckedAccount<'info>,
    #[account(mut)]
    pub reward_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = treasury_reward_account.mint == collector_config.reward_mint @ ErrorCode::InvalidTokenAccount,
        constraint = treasury_reward_account.owner == collector_config.treasury @ ErrorCode::InvalidTokenAccount,
    )]
    pub treasury_reward_account: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = harvester_reward_account.mint == collector_config.reward_mint @ ErrorCode::InvalidTokenAccount,
        constraint = harvester_reward_account.owner == harvester.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub harvester_reward_account: Box<Account<'info, TokenAccount>>,
    /// CHECK: matched against the configured staking program.
    pub staking_program: UncheckedAccount<'info>,
    /// CHECK: matched against config; passed through to the staking program.
    #[account(mut)]
    pub staking_state: UncheckedAccount<'info>,
    #[account(mut)]
    pub staking_reward_vault: Box<Account<'info, TokenAccount>>,
    /// CHECK: matched against the configured AMM program.
    pub amm_program: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
