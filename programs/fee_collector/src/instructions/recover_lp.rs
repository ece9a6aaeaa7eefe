use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::{
    constants::COLLECTOR_AUTHORITY_SEED,
    error::ErrorCode,
    events::LpRecovered,
    helpers::{collector_token_account, require_not_paused, require_role},
    interfaces::token::{load_token_account, transfer_signed},
    state::{CollectorConfig, RecoverableSet, Role, RoleRegistry},
};

/// Sweeps the collector's whole balance of each mint to the treasury.
/// `remaining_accounts` holds one `(collector account, treasury account)`
/// pair per mint, in order.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, RecoverLp<'info>>,
    mints: Vec<Pubkey>,
) -> Result<()> {
    require_role(
        &ctx.accounts.authority,
        &ctx.accounts.role_registry,
        Role::Recovery,
    )?;
    require_not_paused(&ctx.accounts.collector_config)?;

    let config = &ctx.accounts.collector_config;
    for mint in &mints {
        require!(
            *mint != config.reward_mint && ctx.accounts.recoverable_set.is_recoverable(mint),
            ErrorCode::NotRecoverable
        );
    }
    require!(
        ctx.remaining_accounts.len() == mints.len() * 2,
        ErrorCode::InvalidRecoveryAccounts
    );

    let token_program = ctx.accounts.token_program.to_account_info();
    let collector_authority = ctx.accounts.collector_authority.to_account_info();
    let collector_authority_bump = ctx.bumps.collector_authority;
    let signer_seed_group: &[&[u8]] = &[COLLECTOR_AUTHORITY_SEED, &[collector_authority_bump]];
    let signer_seeds = &[signer_seed_group];

    for (mint, accounts) in mints.iter().zip(ctx.remaining_accounts.chunks_exact(2)) {
        let (source, destination) = (&accounts[0], &accounts[1]);
        require_keys_eq!(
            *source.key,
            collector_token_account(collector_authority.key, mint),
            ErrorCode::InvalidRecoveryAccounts
        );
        let treasury_account = load_token_account(destination)?;
        require!(
            treasury_account.mint == *mint && treasury_account.owner == config.treasury,
            ErrorCode::InvalidRecoveryAccounts
        );

        let amount = load_token_account(source)?.amount;
        if amount == 0 {
            continue;
        }
        transfer_signed(
            &token_program,
            source,
            destination,
            &collector_authority,
            signer_seeds,
            amount,
        )?;

        msg!("recovered {} of {} to treasury", amount, mint);
        emit!(LpRecovered {
            mint: *mint,
            amount,
            treasury: config.treasury,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RecoverLp<'info> {
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
        seeds = [b"recoverable-set"],
        bump = recoverable_set.bump,
    )]
    pub recoverable_set: Account<'info, RecoverableSet>,
    /// CHECK: signing PDA for the collector's token accounts.
    #[account(seeds = [COLLECTOR_AUTHORITY_SEED], bump)]
    pub collector_authority: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
