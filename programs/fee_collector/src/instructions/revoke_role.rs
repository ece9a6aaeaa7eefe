use anchor_lang::prelude::*;

use crate::{
    events::RoleRevoked,
    state::{Role, RoleRegistry},
};

pub fn handler(ctx: Context<RevokeRole>, role: Role, account: Pubkey) -> Result<()> {
    let sender = ctx.accounts.authority.key();
    if ctx.accounts.role_registry.revoke(&sender, role, &account)? {
        emit!(RoleRevoked {
            role,
            account,
            sender,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeRole<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"role-registry"],
        bump = role_registry.bump,
    )]
    pub role_registry: Account<'info, RoleRegistry>,
}
