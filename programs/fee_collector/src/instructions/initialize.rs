use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::{COLLECTOR_AUTHORITY_SEED, MAX_RECOVERABLE_MINTS, MAX_ROLE_GRANTS},
    error::ErrorCode,
    events::RoleGranted,
    state::{CollectorConfig, FeeSplitConfig, RecoverableSet, Role, RoleRegistry},
};

pub fn handler(ctx: Context<Initialize>, governor: Pubkey, treasury: Pubkey) -> Result<()> {
    require_keys_neq!(
        ctx.accounts.reward_mint.key(),
        ctx.accounts.wrapped_native_mint.key(),
        ErrorCode::InvalidMint
    );
    require!(
        ctx.accounts.amm_program.executable && ctx.accounts.staking_program.executable,
        ErrorCode::InvalidProgramAccount
    );
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.admin.key();

    let config = &mut ctx.accounts.collector_config;
    config.admin = admin;
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.wrapped_native_mint = ctx.accounts.wrapped_native_mint.key();
    config.amm_program = ctx.accounts.amm_program.key();
    config.staking_program = ctx.accounts.staking_program.key();
    config.staking_state = ctx.accounts.staking_state.key();
    config.staking_reward_vault = ctx.accounts.staking_reward_vault.key();
    config.treasury = treasury;
    config.reward_vault = ctx.accounts.reward_vault.key();
    config.fees = FeeSplitConfig::default();
    config.paused = false;
    config.created_at = now;
    config.last_updated_at = now;
    config.bump = ctx.bumps.collector_config;

    let registry = &mut ctx.accounts.role_registry;
    registry.grants = Vec::with_capacity(MAX_ROLE_GRANTS);
    registry.bump = ctx.bumps.role_registry;
    let seeded = [
        (Role::Admin, admin),
        (Role::Harvest, admin),
        (Role::Pause, admin),
        (Role::Recovery, admin),
        (Role::Governor, governor),
    ];
    for (role, account) in seeded {
        registry.insert(role, account)?;
        emit!(RoleGranted {
            role,
            account,
            sender: admin,
        });
    }

    let recoverable = &mut ctx.accounts.recoverable_set;
    recoverable.mints = Vec::with_capacity(MAX_RECOVERABLE_MINTS);
    recoverable.bump = ctx.bumps.recoverable_set;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"collector-config"],
        bump,
        space = 8 + CollectorConfig::INIT_SPACE,
    )]
    pub collector_config: Box<Account<'info, CollectorConfig>>,
    #[account(
        init,
        payer = admin,
        seeds = [b"role-registry"],
        bump,
        space = 8 + RoleRegistry::INIT_SPACE,
    )]
    pub role_registry: Box<Account<'info, RoleRegistry>>,
    #[account(
        init,
        payer = admin,
        seeds = [b"recoverable-set"],
        bump,
        space = 8 + RecoverableSet::INIT_SPACE,
    )]
    pub recoverable_set: Box<Account<'info, RecoverableSet>>,
    /// CHECK: PDA that owns the collector's token accounts; never read.
    #[account(seeds = [COLLECTOR_AUTHORITY_SEED], bump)]
    pub collector_authority: UncheckedAccount<'info>,
    pub reward_mint: Box<Account<'info, Mint>>,
    pub wrapped_native_mint: Box<Account<'info, Mint>>,
    #[account(
        init,
        payer = admin,
        associated_token::mint = reward_mint,
        associated_token::authority = collector_authority,
    )]
    pub reward_vault: Box<Account<'info, TokenAccount>>,
    /// CHECK: checked to be executable; pairs are derived under it.
    pub amm_program: UncheckedAccount<'info>,
    /// CHECK: checked to be executable.
    pub staking_program: UncheckedAccount<'info>,
    /// CHECK: owned by the staking program; passed through to it.
    #[account(owner = staking_program.key() @ ErrorCode::InvalidProgramAccount)]
    pub staking_state: UncheckedAccount<'info>,
    #[account(
        constraint = staking_reward_vault.mint == reward_mint.key() @ ErrorCode::InvalidMint,
    )]
    pub staking_reward_vault: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
