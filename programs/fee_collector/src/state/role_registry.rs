use anchor_lang::prelude::*;

use crate::{constants::MAX_ROLE_GRANTS, error::ErrorCode};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum Role {
    Admin,
    Harvest,
    Pause,
    Recovery,
    Governor,
}

impl Role {
    /// Role whose holders may grant and revoke `self`.
    pub fn admin_role(self) -> Role {
        match self {
            Role::Governor => Role::Governor,
            Role::Admin | Role::Harvest | Role::Pause | Role::Recovery => Role::Admin,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct RoleGrant {
    pub role: Role,
    pub account: Pubkey,
}

/// Explicit `(role, account)` membership table.
#[account]
#[derive(InitSpace)]
pub struct RoleRegistry {
    #[max_len(MAX_ROLE_GRANTS)]
    pub grants: Vec<RoleGrant>,
    pub bump: u8,
}

impl RoleRegistry {
    pub fn has_role(&self, role: Role, account: &Pubkey) -> bool {
        self.grants
            .iter()
            .any(|g| g.role == role && g.account == *account)
    }

    pub fn require_role(&self, role: Role, account: &Pubkey) -> Result<()> {
        require!(self.has_role(role, account), ErrorCode::Unauthorized);
        Ok(())
    }

    /// Grants `role` to `account` on behalf of `sender`. Returns whether the
    /// table changed.
    pub fn grant(&mut self, sender: &Pubkey, role: Role, account: Pubkey) -> Result<bool> {
        self.require_role(role.admin_role(), sender)?;
        self.insert(role, account)
    }

    /// Revokes `role` from `account` on behalf of `sender`. Returns whether
    /// the table changed.
    pub fn revoke(&mut self, sender: &Pubkey, role: Role, account: &Pubkey) -> Result<bool> {
        self.require_role(role.admin_role(), sender)?;
        Ok(self.remove(role, account))
    }

    /// Drops the caller's own grant.
    pub fn renounce(&mut self, account: &Pubkey, role: Role) -> bool {
        self.remove(role, account)
    }

    /// Unchecked insert used while seeding the registry.
    pub fn insert(&mut self, role: Role, account: Pubkey) -> Result<bool> {
        if self.has_role(role, &account) {
            return Ok(false);
        }
        require!(
            self.grants.len() < MAX_ROLE_GRANTS,
            ErrorCode::RoleRegistryFull
        );
        self.grants.push(RoleGrant { role, account });
        Ok(true)
    }

    fn remove(&mut self, role: Role, account: &Pubkey) -> bool {
        match self
            .grants
            .iter()
            .position(|g| g.role == role && g.account == *account)
        {
            Some(idx) => {
                self.grants.swap_remove(idx);
                true
            }
            None => false,
        }
    }
}
