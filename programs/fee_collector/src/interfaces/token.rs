use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::ErrorCode;

/// Reads an SPL token account that arrived unchecked.
pub fn load_token_account(info: &AccountInfo<'_>) -> Result<TokenAccount> {
    require_keys_eq!(*info.owner, token::ID, ErrorCode::InvalidTokenAccount);
    let data = info.try_borrow_data()?;
    TokenAccount::try_deserialize(&mut &data[..])
}

/// Moves `amount` out of a collector-owned token account.
pub fn transfer_signed<'info>(
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    collector_authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: collector_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
