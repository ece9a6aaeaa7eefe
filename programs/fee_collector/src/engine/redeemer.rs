use anchor_lang::prelude::*;

use crate::{
    engine::{Pair, PairVenue},
    error::ErrorCode,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RouteConfig {
    pub reward_mint: Pubkey,
    pub wrapped_native_mint: Pubkey,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Redemption {
    Redeemed { liquidity: u64, swaps: u8 },
    Skipped,
}

/// Pools to sell `mint` through, in order, to end up with the reward mint.
/// `None` when a required pool is missing.
pub fn plan_route<V: PairVenue>(
    venue: &V,
    route: &RouteConfig,
    mint: Pubkey,
) -> Result<Option<Vec<Pubkey>>> {
    let reward = route.reward_mint;
    let native = route.wrapped_native_mint;

    if mint == native {
        return Ok(venue.pair(native, reward)?.map(|p| vec![p.address]));
    }
    if let Some(direct) = venue.pair(mint, reward)? {
        return Ok(Some(vec![direct.address]));
    }
    match (venue.pair(mint, native)?, venue.pair(native, reward)?) {
        (Some(first), Some(second)) => Ok(Some(vec![first.address, second.address])),
        _ => Ok(None),
    }
}

/// Redeems the collector's LP balance of the pool at `address` and converts
/// every non-reward side into the reward mint.
///
/// Routes are planned before anything moves, so a skipped position is left
/// exactly as it was.
pub fn redeem_position<V: PairVenue>(
    venue: &mut V,
    route: &RouteConfig,
    address: &Pubkey,
    tolerate_missing: bool,
) -> Result<Redemption> {
    let Some(pair) = venue.pair_at(address)? else {
        return missing(tolerate_missing);
    };

    let mut routes = Vec::with_capacity(2);
    for mint in pair.state.mints() {
        if mint == route.reward_mint {
            continue;
        }
        match plan_route(venue, route, mint)? {
            Some(hops) => routes.push((mint, hops)),
            None => return missing(tolerate_missing),
        }
    }

    let liquidity = venue.balance(&pair.state.lp_mint)?;
    if liquidity > 0 {
        venue.burn(&pair, liquidity)?;
    }

    let mut swaps: u8 = 0;
    for (mint, hops) in routes {
        let executed = convert(venue, mint, &hops)?;
        swaps = swaps
            .checked_add(executed)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }

    Ok(Redemption::Redeemed { liquidity, swaps })
}

fn missing(tolerate_missing: bool) -> Result<Redemption> {
    require!(tolerate_missing, ErrorCode::MissingPool);
    Ok(Redemption::Skipped)
}

/// Sells the whole collector balance of `mint` along `hops`. Reserves are
/// re-read before every hop. Returns the number of swaps sent.
fn convert<V: PairVenue>(venue: &mut V, mint: Pubkey, hops: &[Pubkey]) -> Result<u8> {
    let mut mint_in = mint;
    let mut amount_in = venue.balance(&mint_in)?;
    let mut swaps = 0;

    for address in hops {
        if amount_in == 0 {
            break;
        }
        let pair: Pair = venue
            .pair_at(address)?
            .ok_or_else(|| error!(ErrorCode::MissingPool))?;
        let amount_out = pair.state.quote(&mint_in, amount_in)?;
        if amount_out == 0 {
            break;
        }

        venue.swap(&pair, &mint_in, amount_in, amount_out)?;
        mint_in = pair.state.other_mint(&mint_in)?;
        amount_in = amount_out;
        swaps += 1;
    }

    Ok(swaps)
}
