//! Account builders for SPL mints, token accounts and program-owned state.

use anchor_lang::{
    solana_program::{program_option::COption, program_pack::Pack, pubkey::Pubkey},
    system_program, AccountSerialize,
};
use anchor_spl::token::spl_token::{
    self,
    state::{Account as TokenState, AccountState, Mint},
};

use super::runtime::TestAccount;

pub const LAMPORTS: u64 = 1_000_000_000;

pub fn system_account() -> TestAccount {
    TestAccount {
        lamports: LAMPORTS,
        data: Vec::new(),
        owner: system_program::ID,
        executable: false,
    }
}

pub fn program_account() -> TestAccount {
    TestAccount {
        lamports: LAMPORTS,
        data: Vec::new(),
        owner: Pubkey::new_unique(),
        executable: true,
    }
}

pub fn mint_account(supply: u64) -> TestAccount {
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(
        Mint {
            mint_authority: COption::None,
            supply,
            decimals: 6,
            is_initialized: true,
            freeze_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();
    TestAccount {
        lamports: LAMPORTS,
        data,
        owner: spl_token::ID,
        executable: false,
    }
}

pub fn token_account(mint: Pubkey, owner: Pubkey, amount: u64) -> TestAccount {
    let mut data = vec![0u8; TokenState::LEN];
    TokenState::pack(
        TokenState {
            mint,
            owner,
            amount,
            delegate: COption::None,
            state: AccountState::Initialized,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        },
        &mut data,
    )
    .unwrap();
    TestAccount {
        lamports: LAMPORTS,
        data,
        owner: spl_token::ID,
        executable: false,
    }
}

/// Discriminator plus borsh body, zero-padded to `space`.
pub fn state_account<T: AccountSerialize>(value: &T, space: usize) -> TestAccount {
    let mut data = Vec::with_capacity(space);
    value.try_serialize(&mut data).unwrap();
    data.resize(space, 0);
    TestAccount {
        lamports: LAMPORTS,
        data,
        owner: fee_collector::ID,
        executable: false,
    }
}

pub fn unpack_token(account: &TestAccount) -> TokenState {
    TokenState::unpack(&account.data).unwrap()
}

pub fn unpack_mint(account: &TestAccount) -> Mint {
    Mint::unpack(&account.data).unwrap()
}
