//! In-process runtime: runs the program entrypoint over locally held
//! accounts and serves its CPIs (token, AMM, staking) natively.

use std::{collections::BTreeMap, sync::Once};

use anchor_lang::solana_program::{
    account_info::AccountInfo,
    clock::Clock,
    entrypoint::ProgramResult,
    instruction::Instruction,
    program_error::ProgramError,
    program_stubs::{set_syscall_stubs, SyscallStubs},
    pubkey::Pubkey,
};
use anchor_spl::token::spl_token;

use super::programs::{self, AMM_PROGRAM_ID, STAKING_PROGRAM_ID};

/// Unix time every instruction observes.
pub const NOW: i64 = 1_700_000_000;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TestAccount {
    pub lamports: u64,
    pub data: Vec<u8>,
    pub owner: Pubkey,
    pub executable: bool,
}

impl TestAccount {
    fn info<'a>(&'a mut self, key: &'a Pubkey) -> AccountInfo<'a> {
        AccountInfo::new(
            key,
            false,
            false,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }
}

/// Account store with transaction semantics: a failed instruction leaves
/// every account as it was.
pub struct Ledger {
    accounts: BTreeMap<Pubkey, TestAccount>,
}

impl Ledger {
    pub fn new() -> Self {
        install_runtime();
        Self {
            accounts: BTreeMap::new(),
        }
    }

    pub fn set_account(&mut self, key: Pubkey, account: TestAccount) {
        self.accounts.insert(key, account);
    }

    pub fn account(&self, key: &Pubkey) -> &TestAccount {
        self.accounts
            .get(key)
            .unwrap_or_else(|| panic!("unknown account {key}"))
    }

    pub fn snapshot(&self) -> BTreeMap<Pubkey, TestAccount> {
        self.accounts.clone()
    }

    pub fn process(&mut self, ix: &Instruction) -> ProgramResult {
        let snapshot = self.accounts.clone();
        let result = {
            let infos: BTreeMap<Pubkey, AccountInfo> = self
                .accounts
                .iter_mut()
                .map(|(key, account)| (*key, account.info(key)))
                .collect();

            let mut ix_infos = Vec::with_capacity(ix.accounts.len());
            for meta in &ix.accounts {
                let mut info = infos
                    .get(&meta.pubkey)
                    .cloned()
                    .ok_or(ProgramError::NotEnoughAccountKeys)?;
                info.is_signer = meta.is_signer;
                info.is_writable = meta.is_writable;
                ix_infos.push(info);
            }
            fee_collector::entry(&ix.program_id, &ix_infos, &ix.data)
        };

        if result.is_err() {
            self.accounts = snapshot;
        }
        result
    }
}

static INSTALL: Once = Once::new();

/// The stub table is process-wide, so it is installed once and keeps no state.
fn install_runtime() {
    INSTALL.call_once(|| {
        set_syscall_stubs(Box::new(NativeRuntime));
    });
}

struct NativeRuntime;

impl SyscallStubs for NativeRuntime {
    fn sol_get_clock_sysvar(&self, var_addr: *mut u8) -> u64 {
        let clock = Clock {
            unix_timestamp: NOW,
            ..Clock::default()
        };
        unsafe { std::ptr::write(var_addr as *mut Clock, clock) };
        0
    }

    fn sol_invoke_signed(
        &self,
        instruction: &Instruction,
        account_infos: &[AccountInfo],
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        let accounts = callee_accounts(instruction, account_infos, signers_seeds)?;
        if instruction.program_id == spl_token::ID {
            spl_token::processor::Processor::process(&spl_token::ID, &accounts, &instruction.data)
        } else if instruction.program_id == AMM_PROGRAM_ID {
            programs::process_amm(&accounts, &instruction.data)
        } else if instruction.program_id == STAKING_PROGRAM_ID {
            programs::process_staking(&accounts, &instruction.data)
        } else {
            Err(ProgramError::IncorrectProgramId)
        }
    }
}

/// Orders the caller's accounts the way the callee expects them, with signer
/// privilege extended to PDAs the caller signed for and never escalated
/// otherwise.
fn callee_accounts<'a>(
    instruction: &Instruction,
    account_infos: &[AccountInfo<'a>],
    signers_seeds: &[&[&[u8]]],
) -> Result<Vec<AccountInfo<'a>>, ProgramError> {
    let pda_signers = signers_seeds
        .iter()
        .map(|seeds| Pubkey::create_program_address(seeds, &fee_collector::ID))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ProgramError::InvalidSeeds)?;

    instruction
        .accounts
        .iter()
        .map(|meta| {
            let mut info = account_infos
                .iter()
                .find(|info| *info.key == meta.pubkey)
                .cloned()
                .ok_or(ProgramError::NotEnoughAccountKeys)?;
            if meta.is_signer && !info.is_signer && !pda_signers.contains(info.key) {
                return Err(ProgramError::MissingRequiredSignature);
            }
            if meta.is_writable && !info.is_writable {
                return Err(ProgramError::InvalidArgument);
            }
            info.is_signer = meta.is_signer;
            info.is_writable = meta.is_writable;
            Ok(info)
        })
        .collect()
}
