//! Adapters for the programs the collector talks to: the AMM, the staking
//! rewards program and the token program.

pub mod amm;
pub mod staking;
pub mod token;

use anchor_lang::solana_program::hash::hash;

/// Anchor instruction discriminator for `name`.
pub fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}
