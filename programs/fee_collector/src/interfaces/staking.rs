use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
};

use crate::{engine::RewardSink, interfaces::{sighash, token::transfer_signed}};

/// Layout: `[sighash("notify_reward_amount"), amount: u64 LE]`
pub fn notify_reward_amount_instruction(
    staking_program: &Pubkey,
    staking_state: &Pubkey,
    staking_reward_vault: &Pubkey,
    funder: &Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(&sighash("notify_reward_amount"));
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: *staking_program,
        accounts: vec![
            AccountMeta::new(*staking_state, false),
            AccountMeta::new_readonly(*staking_reward_vault, false),
            AccountMeta::new_readonly(*funder, true),
        ],
        data,
    }
}

/// Pays harvest shares out of the collector's reward vault.
pub struct CpiRewardSink<'a, 'info> {
    pub token_program: AccountInfo<'info>,
    pub collector_authority: AccountInfo<'info>,
    pub reward_vault: AccountInfo<'info>,
    pub staking_program: AccountInfo<'info>,
    pub staking_state: AccountInfo<'info>,
    pub staking_reward_vault: AccountInfo<'info>,
    pub treasury_account: AccountInfo<'info>,
    pub caller_account: AccountInfo<'info>,
    pub signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'info> CpiRewardSink<'_, 'info> {
    fn pay(&self, to: &AccountInfo<'info>, amount: u64) -> Result<()> {
        transfer_signed(
            &self.token_program,
            &self.reward_vault,
            to,
            &self.collector_authority,
            self.signer_seeds,
            amount,
        )
    }
}

impl RewardSink for CpiRewardSink<'_, '_> {
    fn fund_staking(&mut self, amount: u64) -> Result<()> {
        self.pay(&self.staking_reward_vault, amount)?;

        let ix = notify_reward_amount_instruction(
            self.staking_program.key,
            self.staking_state.key,
            self.staking_reward_vault.key,
            self.collector_authority.key,
            amount,
        );
        invoke_signed(
            &ix,
            &[
                self.staking_state.clone(),
                self.staking_reward_vault.clone(),
                self.collector_authority.clone(),
                self.staking_program.clone(),
            ],
            self.signer_seeds,
        )?;
        Ok(())
    }

    fn pay_treasury(&mut self, amount: u64) -> Result<()> {
        self.pay(&self.treasury_account, amount)
    }

    fn pay_caller(&mut self, amount: u64) -> Result<()> {
        self.pay(&self.caller_account, amount)
    }
}
