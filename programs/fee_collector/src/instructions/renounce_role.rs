use anchor_lang::prelude::*;

use crate::{
    events::RoleRevoked,
    state::{Role, RoleRegistry},
};

pub fn handler(ctx: Context<RenounceRole>, role: Role) -> Result<()> {
    let account = ctx.accounts.authority.key();
    if ctx.accounts.role_registry.renounce(&account, role) {
        emit!(RoleRevoked {
            role,
            account,
            sender: account,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RenounceRole<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"role-registry"],
        bump = role_registry.bump,
    )]
    pub role_registry: Account<'info, RoleRegistry>,
}
