use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{CollectorConfig, Role, RoleRegistry},
};

pub fn require_role(
    authority: &Signer<'_>,
    role_registry: &Account<RoleRegistry>,
    role: Role,
) -> Result<()> {
    role_registry.require_role(role, &authority.key())
}

pub fn require_not_paused(config: &CollectorConfig) -> Result<()> {
    require!(!config.is_paused(), ErrorCode::Paused);
    Ok(())
}
