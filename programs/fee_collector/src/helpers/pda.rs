use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::PAIR_SEED;

/// Mints in the order the AMM uses for pair seeds.
pub fn sort_mints(mint_a: Pubkey, mint_b: Pubkey) -> (Pubkey, Pubkey) {
    if mint_a.to_bytes() < mint_b.to_bytes() {
        (mint_a, mint_b)
    } else {
        (mint_b, mint_a)
    }
}

/// Address of the pair for two mints, derived without touching the chain.
pub fn pair_address(amm_program: &Pubkey, mint_a: Pubkey, mint_b: Pubkey) -> Pubkey {
    let (mint_0, mint_1) = sort_mints(mint_a, mint_b);
    Pubkey::find_program_address(
        &[PAIR_SEED, mint_0.as_ref(), mint_1.as_ref()],
        amm_program,
    )
    .0
}

/// Token account the collector holds `mint` in.
pub fn collector_token_account(collector_authority: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(collector_authority, mint)
}
