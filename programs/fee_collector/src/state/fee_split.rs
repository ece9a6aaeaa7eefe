use anchor_lang::prelude::*;

use crate::{
    constants::{
        DEFAULT_HARVEST_INCENTIVE_BPS, DEFAULT_TREASURY_FEE_BPS, MAX_HARVEST_INCENTIVE_BPS,
        MAX_TREASURY_FEE_BPS,
    },
    error::ErrorCode,
    helpers::mul_bps,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct FeeSplitConfig {
    pub treasury_fee_bps: u16,
    pub harvest_incentive_bps: u16,
}

impl Default for FeeSplitConfig {
    fn default() -> Self {
        Self {
            treasury_fee_bps: DEFAULT_TREASURY_FEE_BPS,
            harvest_incentive_bps: DEFAULT_HARVEST_INCENTIVE_BPS,
        }
    }
}

/// Outbound amounts of one harvest.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HarvestSplit {
    pub staking: u64,
    pub treasury: u64,
    pub caller: u64,
}

impl FeeSplitConfig {
    pub fn treasury_fee(&self) -> u16 {
        self.treasury_fee_bps
    }

    pub fn harvest_incentive(&self) -> u16 {
        self.harvest_incentive_bps
    }

    /// Returns the previous value. The cap is checked alone, so a fee that
    /// leaves no room for the harvest incentive makes [`Self::split`] fail
    /// with `MathOverflow` until one of the two is lowered.
    pub fn set_treasury_fee(&mut self, bps: u16) -> Result<u16> {
        require!(bps <= MAX_TREASURY_FEE_BPS, ErrorCode::FeeTooHigh);
        Ok(std::mem::replace(&mut self.treasury_fee_bps, bps))
    }

    /// Returns the previous value.
    pub fn set_harvest_incentive(&mut self, bps: u16) -> Result<u16> {
        require!(
            bps <= MAX_HARVEST_INCENTIVE_BPS,
            ErrorCode::IncentiveTooHigh
        );
        Ok(std::mem::replace(&mut self.harvest_incentive_bps, bps))
    }

    /// Splits `net` into caller incentive, treasury cut and the staking
    /// remainder. The three parts always sum to `net`.
    pub fn split(&self, net: u64) -> Result<HarvestSplit> {
        let caller = mul_bps(net, self.harvest_incentive_bps as u64)?;
        let treasury = mul_bps(net, self.treasury_fee_bps as u64)?;
        let staking = net
            .checked_sub(caller)
            .and_then(|x| x.checked_sub(treasury))
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        Ok(HarvestSplit {
            staking,
            treasury,
            caller,
        })
    }
}
