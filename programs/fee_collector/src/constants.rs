pub const BPS_DENOM: u64 = 10_000;

pub const MAX_TREASURY_FEE_BPS: u16 = 10_000;
pub const MAX_HARVEST_INCENTIVE_BPS: u16 = 200;
pub const DEFAULT_TREASURY_FEE_BPS: u16 = 1_500;
pub const DEFAULT_HARVEST_INCENTIVE_BPS: u16 = 10;

pub const MAX_ROLE_GRANTS: usize = 32;
pub const MAX_RECOVERABLE_MINTS: usize = 32;
pub const MAX_HARVEST_POSITIONS: usize = 16;

pub const COLLECTOR_AUTHORITY_SEED: &[u8] = b"collector-authority";
pub const PAIR_SEED: &[u8] = b"pair";
