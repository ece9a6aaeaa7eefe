use anchor_lang::prelude::*;

use crate::{
    events::RoleGranted,
    state::{Role, RoleRegistry},
};

pub fn handler(ctx: Context<GrantRole>, role: Role, account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.authority.key();
    if ctx.accounts.role_registry.grant(&sender, role, account)? {
        emit!(RoleGranted {
            role,
            account,
            sender,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct GrantRole<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"role-registry"],
        bump = role_registry.bump,
    )]
    pub role_registry: Account<'info, RoleRegistry>,
}
