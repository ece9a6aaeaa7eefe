//! Harvest logic, written against the collaborator traits in [`venue`] so the
//! same code drives both the on-chain CPI adapters and in-memory test venues.

pub mod harvest;
pub mod redeemer;
pub mod venue;

pub use harvest::*;
pub use redeemer::*;
pub use venue::*;
