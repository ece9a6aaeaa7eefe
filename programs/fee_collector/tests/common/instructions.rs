//! Instruction builders over the generated client types.

use anchor_lang::{
    solana_program::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
    },
    InstructionData, ToAccountMetas,
};
use anchor_spl::token::spl_token;
use fee_collector::{accounts, instruction, Role};

use super::{
    programs::{AMM_PROGRAM_ID, STAKING_PROGRAM_ID},
    setup::Collector,
};

fn build(
    named: impl ToAccountMetas,
    data: impl InstructionData,
    remaining: &[Pubkey],
) -> Instruction {
    let mut metas = named.to_account_metas(None);
    metas.extend(remaining.iter().map(|key| AccountMeta::new(*key, false)));
    Instruction {
        program_id: fee_collector::ID,
        accounts: metas,
        data: data.data(),
    }
}

impl Collector {
    pub fn grant_role_ix(&self, authority: Pubkey, role: Role, account: Pubkey) -> Instruction {
        build(
            accounts::GrantRole {
                authority,
                role_registry: self.role_registry,
            },
            instruction::GrantRole { role, account },
            &[],
        )
    }

    pub fn revoke_role_ix(&self, authority: Pubkey, role: Role, account: Pubkey) -> Instruction {
        build(
            accounts::RevokeRole {
                authority,
                role_registry: self.role_registry,
            },
            instruction::RevokeRole { role, account },
            &[],
        )
    }

    pub fn renounce_role_ix(&self, authority: Pubkey, role: Role) -> Instruction {
        build(
            accounts::RenounceRole {
                authority,
                role_registry: self.role_registry,
            },
            instruction::RenounceRole { role },
            &[],
        )
    }

    fn set_paused_accounts(&self, authority: Pubkey) -> accounts::SetPaused {
        accounts::SetPaused {
            authority,
            collector_config: self.collector_config,
            role_registry: self.role_registry,
        }
    }

    pub fn pause_ix(&self, authority: Pubkey) -> Instruction {
        build(self.set_paused_accounts(authority), instruction::Pause, &[])
    }

    pub fn unpause_ix(&self, authority: Pubkey) -> Instruction {
        build(self.set_paused_accounts(authority), instruction::Unpause, &[])
    }

    pub fn set_treasury_fee_ix(&self, authority: Pubkey, bps: u16) -> Instruction {
        build(
            accounts::SetTreasuryFee {
                authority,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
            },
            instruction::SetTreasuryFee { bps },
            &[],
        )
    }

    pub fn set_harvest_incentive_ix(&self, authority: Pubkey, bps: u16) -> Instruction {
        build(
            accounts::SetHarvestIncentive {
                authority,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
            },
            instruction::SetHarvestIncentive { bps },
            &[],
        )
    }

    pub fn set_treasury_ix(&self, authority: Pubkey, treasury: Pubkey) -> Instruction {
        build(
            accounts::SetTreasury {
                authority,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
            },
            instruction::SetTreasury { treasury },
            &[],
        )
    }

    pub fn set_staking_rewards_ix(
        &self,
        authority: Pubkey,
        staking_state: Pubkey,
        staking_reward_vault: Pubkey,
    ) -> Instruction {
        build(
            accounts::SetStakingRewards {
                authority,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
                staking_program: STAKING_PROGRAM_ID,
                staking_state,
                staking_reward_vault,
            },
            instruction::SetStakingRewards,
            &[],
        )
    }

    pub fn set_recoverable_ix(
        &self,
        authority: Pubkey,
        mint: Pubkey,
        recoverable: bool,
    ) -> Instruction {
        build(
            accounts::SetRecoverable {
                authority,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
                recoverable_set: self.recoverable_set,
            },
            instruction::SetRecoverable { mint, recoverable },
            &[],
        )
    }

    /// `pairs` holds `(collector account, treasury account)` per mint.
    pub fn recover_lp_ix(
        &self,
        authority: Pubkey,
        mints: Vec<Pubkey>,
        pairs: &[(Pubkey, Pubkey)],
    ) -> Instruction {
        let remaining: Vec<Pubkey> = pairs
            .iter()
            .flat_map(|(source, destination)| [*source, *destination])
            .collect();
        build(
            accounts::RecoverLp {
                authority,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
                recoverable_set: self.recoverable_set,
                collector_authority: self.collector_authority,
                token_program: spl_token::ID,
            },
            instruction::RecoverLp { mints },
            &remaining,
        )
    }

    pub fn harvest_ix(
        &self,
        harvester: Pubkey,
        harvester_reward_account: Pubkey,
        positions: Vec<Pubkey>,
        redeem_all: bool,
        min_reward_out: u64,
        remaining: &[Pubkey],
    ) -> Instruction {
        build(
            accounts::Harvest {
                harvester,
                collector_config: self.collector_config,
                role_registry: self.role_registry,
                collector_authority: self.collector_authority,
                reward_vault: self.reward_vault,
                treasury_reward_account: self.treasury_reward_account,
                harvester_reward_account,
                staking_program: STAKING_PROGRAM_ID,
                staking_state: self.staking_state,
                staking_reward_vault: self.staking_reward_vault,
                amm_program: AMM_PROGRAM_ID,
                token_program: spl_token::ID,
            },
            instruction::Harvest {
                positions,
                redeem_all,
                min_reward_out,
            },
            remaining,
        )
    }
}
