use anchor_lang::prelude::*;

use crate::{
    constants::MAX_HARVEST_POSITIONS,
    engine::{redeem_position, PairVenue, Redemption, RewardSink, RouteConfig},
    error::ErrorCode,
    state::{FeeSplitConfig, HarvestSplit},
};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct HarvestReceipt {
    pub balance_before: u64,
    pub balance_after: u64,
    pub split: HarvestSplit,
    pub redeemed: u8,
    pub skipped: u8,
}

/// Redeems `positions` (and, with `redeem_all`, every tracked pair), converts
/// the proceeds into the reward mint and pays out the collector's whole
/// reward balance.
///
/// `min_reward_out` is a floor on the reward balance after conversion and is
/// checked before any payout. A failed call must be discarded as a whole by
/// the caller.
pub fn harvest<V: PairVenue, S: RewardSink>(
    venue: &mut V,
    sink: &mut S,
    route: &RouteConfig,
    fees: &FeeSplitConfig,
    positions: &[Pubkey],
    redeem_all: bool,
    min_reward_out: u64,
) -> Result<HarvestReceipt> {
    require!(
        positions.len() <= MAX_HARVEST_POSITIONS,
        ErrorCode::TooManyPositions
    );

    let balance_before = venue.balance(&route.reward_mint)?;
    let mut receipt = HarvestReceipt {
        balance_before,
        ..HarvestReceipt::default()
    };

    for address in harvest_targets(venue, positions, redeem_all) {
        let counter = match redeem_position(venue, route, &address, redeem_all)? {
            Redemption::Redeemed { .. } => &mut receipt.redeemed,
            Redemption::Skipped => &mut receipt.skipped,
        };
        *counter = counter
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }

    let balance_after = venue.balance(&route.reward_mint)?;
    require!(
        balance_after >= min_reward_out,
        ErrorCode::SlippageExceeded
    );

    let split = fees.split(balance_after)?;
    if split.staking > 0 {
        sink.fund_staking(split.staking)?;
    }
    if split.treasury > 0 {
        sink.pay_treasury(split.treasury)?;
    }
    if split.caller > 0 {
        sink.pay_caller(split.caller)?;
    }

    receipt.balance_after = balance_after;
    receipt.split = split;
    Ok(receipt)
}

/// Explicit positions first, then the tracked set, without repeats.
fn harvest_targets<V: PairVenue>(venue: &V, positions: &[Pubkey], redeem_all: bool) -> Vec<Pubkey> {
    let tracked = if redeem_all {
        venue.tracked_pairs()
    } else {
        Vec::new()
    };

    let mut targets: Vec<Pubkey> = Vec::with_capacity(positions.len() + tracked.len());
    for address in positions.iter().chain(tracked.iter()) {
        if !targets.contains(address) {
            targets.push(*address);
        }
    }
    targets
}
