//! Constant-product AMM: pair account layout, `burn` and `swap` instruction
//! builders, and the [`PairVenue`] backed by real CPIs.

use std::collections::BTreeMap;

use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};
use anchor_spl::token;

use crate::{
    engine::{Pair, PairVenue},
    error::ErrorCode,
    helpers::{collector_token_account, pair_address, quote_amount_out},
    interfaces::{sighash, token::load_token_account},
};

/// Pair account data after the 8-byte discriminator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PairState {
    pub mint_0: Pubkey,
    pub mint_1: Pubkey,
    pub lp_mint: Pubkey,
    pub vault_0: Pubkey,
    pub vault_1: Pubkey,
    pub reserve_0: u64,
    pub reserve_1: u64,
    pub fee_bps: u16,
    pub bump: u8,
}

impl PairState {
    /// `None` for an account that was never created.
    pub fn load(info: &AccountInfo<'_>, amm_program: &Pubkey) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(*info.owner, *amm_program, ErrorCode::InvalidPairAccount);

        let data = info.try_borrow_data()?;
        require!(data.len() > 8, ErrorCode::InvalidPairAccount);
        let state = PairState::deserialize(&mut &data[8..])
            .map_err(|_| error!(ErrorCode::InvalidPairAccount))?;
        Ok(Some(state))
    }

    pub fn mints(&self) -> [Pubkey; 2] {
        [self.mint_0, self.mint_1]
    }

    pub fn other_mint(&self, mint: &Pubkey) -> Result<Pubkey> {
        Ok(self.side(mint)?.3)
    }

    /// `(reserve_in, reserve_out)` when selling `mint_in`.
    pub fn reserves(&self, mint_in: &Pubkey) -> Result<(u64, u64)> {
        let (reserve_in, reserve_out, _, _, _) = self.side(mint_in)?;
        Ok((reserve_in, reserve_out))
    }

    /// `(vault_in, vault_out)` when selling `mint_in`.
    pub fn vaults(&self, mint_in: &Pubkey) -> Result<(Pubkey, Pubkey)> {
        let (_, _, vault_in, _, vault_out) = self.side(mint_in)?;
        Ok((vault_in, vault_out))
    }

    pub fn quote(&self, mint_in: &Pubkey, amount_in: u64) -> Result<u64> {
        let (reserve_in, reserve_out) = self.reserves(mint_in)?;
        quote_amount_out(amount_in, reserve_in, reserve_out, self.fee_bps)
    }

    fn side(&self, mint_in: &Pubkey) -> Result<(u64, u64, Pubkey, Pubkey, Pubkey)> {
        if *mint_in == self.mint_0 {
            Ok((self.reserve_0, self.reserve_1, self.vault_0, self.mint_1, self.vault_1))
        } else if *mint_in == self.mint_1 {
            Ok((self.reserve_1, self.reserve_0, self.vault_1, self.mint_0, self.vault_0))
        } else {
            err!(ErrorCode::InvalidMint)
        }
    }
}

/// Layout: `[sighash("burn"), liquidity: u64 LE]`
pub fn burn_instruction(
    amm_program: &Pubkey,
    pair: &Pair,
    owner: &Pubkey,
    liquidity: u64,
) -> Instruction {
    let state = &pair.state;
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(&sighash("burn"));
    data.extend_from_slice(&liquidity.to_le_bytes());

    Instruction {
        program_id: *amm_program,
        accounts: vec![
            AccountMeta::new(pair.address, false),
            AccountMeta::new(state.lp_mint, false),
            AccountMeta::new(state.vault_0, false),
            AccountMeta::new(state.vault_1, false),
            AccountMeta::new(collector_token_account(owner, &state.lp_mint), false),
            AccountMeta::new(collector_token_account(owner, &state.mint_0), false),
            AccountMeta::new(collector_token_account(owner, &state.mint_1), false),
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(token::ID, false),
        ],
        data,
    }
}

/// Layout: `[sighash("swap"), amount_in: u64 LE, amount_out: u64 LE]`
pub fn swap_instruction(
    amm_program: &Pubkey,
    pair: &Pair,
    owner: &Pubkey,
    mint_in: &Pubkey,
    amount_in: u64,
    amount_out: u64,
) -> Result<Instruction> {
    let (vault_in, vault_out) = pair.state.vaults(mint_in)?;
    let mint_out = pair.state.other_mint(mint_in)?;
    let mut data = Vec::with_capacity(24);
    data.extend_from_slice(&sighash("swap"));
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&amount_out.to_le_bytes());

    Ok(Instruction {
        program_id: *amm_program,
        accounts: vec![
            AccountMeta::new(pair.address, false),
            AccountMeta::new(vault_in, false),
            AccountMeta::new(vault_out, false),
            AccountMeta::new(collector_token_account(owner, mint_in), false),
            AccountMeta::new(collector_token_account(owner, &mint_out), false),
            AccountMeta::new_readonly(*owner, true),
            AccountMeta::new_readonly(token::ID, false),
        ],
        data,
    })
}

/// [`PairVenue`] over the accounts passed to an instruction. Pools and
/// collector token accounts are looked up by address, so their order in
/// `remaining_accounts` does not matter.
pub struct CpiVenue<'a, 'info> {
    amm_program: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    collector_authority: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
    accounts: BTreeMap<Pubkey, AccountInfo<'info>>,
}

impl<'a, 'info> CpiVenue<'a, 'info> {
    pub fn new(
        amm_program: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        collector_authority: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
        remaining_accounts: &[AccountInfo<'info>],
    ) -> Self {
        let accounts = remaining_accounts
            .iter()
            .map(|info| (*info.key, info.clone()))
            .collect();
        Self {
            amm_program,
            token_program,
            collector_authority,
            signer_seeds,
            accounts,
        }
    }

    pub fn with_account(mut self, info: AccountInfo<'info>) -> Self {
        self.accounts.insert(*info.key, info);
        self
    }

    fn account(&self, address: &Pubkey) -> Result<AccountInfo<'info>> {
        self.accounts
            .get(address)
            .cloned()
            .ok_or_else(|| error!(ErrorCode::MissingTokenAccount))
    }

    fn token_account(&self, mint: &Pubkey) -> Result<AccountInfo<'info>> {
        self.account(&collector_token_account(self.collector_authority.key, mint))
    }

    fn invoke(&self, ix: &Instruction) -> Result<()> {
        let mut infos = Vec::with_capacity(ix.accounts.len() + 1);
        for meta in &ix.accounts {
            if meta.pubkey == *self.collector_authority.key {
                infos.push(self.collector_authority.clone());
            } else if meta.pubkey == *self.token_program.key {
                infos.push(self.token_program.clone());
            } else {
                infos.push(self.account(&meta.pubkey)?);
            }
        }
        infos.push(self.amm_program.clone());
        invoke_signed(ix, &infos, self.signer_seeds)?;
        Ok(())
    }
}

impl PairVenue for CpiVenue<'_, '_> {
    fn pair_address(&self, mint_a: Pubkey, mint_b: Pubkey) -> Pubkey {
        pair_address(self.amm_program.key, mint_a, mint_b)
    }

    fn pair_at(&self, address: &Pubkey) -> Result<Option<Pair>> {
        let Some(info) = self.accounts.get(address) else {
            return Ok(None);
        };
        let Some(state) = PairState::load(info, self.amm_program.key)? else {
            return Ok(None);
        };
        require_keys_eq!(
            *address,
            pair_address(self.amm_program.key, state.mint_0, state.mint_1),
            ErrorCode::InvalidPairAccount
        );
        Ok(Some(Pair {
            address: *address,
            state,
        }))
    }

    fn tracked_pairs(&self) -> Vec<Pubkey> {
        self.accounts
            .iter()
            .filter(|(_, info)| info.owner == self.amm_program.key)
            .filter_map(|(address, info)| {
                let state = PairState::load(info, self.amm_program.key).ok()??;
                let lp_account = collector_token_account(self.collector_authority.key, &state.lp_mint);
                self.accounts.contains_key(&lp_account).then_some(*address)
            })
            .collect()
    }

    fn balance(&self, mint: &Pubkey) -> Result<u64> {
        let info = self.token_account(mint)?;
        let account = load_token_account(&info)?;
        require_keys_eq!(account.mint, *mint, ErrorCode::InvalidTokenAccount);
        require_keys_eq!(
            account.owner,
            *self.collector_authority.key,
            ErrorCode::InvalidTokenAccount
        );
        Ok(account.amount)
    }

    fn burn(&mut self, pair: &Pair, liquidity: u64) -> Result<()> {
        let ix = burn_instruction(
            self.amm_program.key,
            pair,
            self.collector_authority.key,
            liquidity,
        );
        self.invoke(&ix)
    }

    fn swap(
        &mut self,
        pair: &Pair,
        mint_in: &Pubkey,
        amount_in: u64,
        amount_out: u64,
    ) -> Result<()> {
        let ix = swap_instruction(
            self.amm_program.key,
            pair,
            self.collector_authority.key,
            mint_in,
            amount_in,
            amount_out,
        )?;
        self.invoke(&ix)
    }
}
