use anchor_lang::prelude::*;

use crate::interfaces::amm::PairState;

/// A pool as seen at one point of a harvest.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pair {
    pub address: Pubkey,
    pub state: PairState,
}

/// Pools plus the collector's own balances.
pub trait PairVenue {
    /// Deterministic pool address for two mints.
    fn pair_address(&self, mint_a: Pubkey, mint_b: Pubkey) -> Pubkey;

    /// The pool at `address`, or `None` when it does not exist.
    fn pair_at(&self, address: &Pubkey) -> Result<Option<Pair>>;

    fn pair(&self, mint_a: Pubkey, mint_b: Pubkey) -> Result<Option<Pair>> {
        self.pair_at(&self.pair_address(mint_a, mint_b))
    }

    /// Pools whose LP tokens the collector can redeem right now.
    fn tracked_pairs(&self) -> Vec<Pubkey>;

    /// Collector balance of `mint`.
    fn balance(&self, mint: &Pubkey) -> Result<u64>;

    /// Burns `liquidity` LP tokens of `pair`; the underlying lands with the collector.
    fn burn(&mut self, pair: &Pair, liquidity: u64) -> Result<()>;

    /// Sells `amount_in` of `mint_in` into `pair` for exactly `amount_out`.
    fn swap(&mut self, pair: &Pair, mint_in: &Pubkey, amount_in: u64, amount_out: u64)
        -> Result<()>;
}

/// Outbound side of a harvest. Amounts are paid from the collector's reward balance.
pub trait RewardSink {
    fn fund_staking(&mut self, amount: u64) -> Result<()>;
    fn pay_treasury(&mut self, amount: u64) -> Result<()>;
    fn pay_caller(&mut self, amount: u64) -> Result<()>;
}
