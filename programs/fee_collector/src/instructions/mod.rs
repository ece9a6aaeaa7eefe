pub mod grant_role;
pub mod harvest;
pub mod initialize;
pub mod recover_lp;
pub mod renounce_role;
pub mod revoke_role;
pub mod set_harvest_incentive;
pub mod set_paused;
pub mod set_recoverable;
pub mod set_staking_rewards;
pub mod set_treasury;
pub mod set_treasury_fee;

pub use grant_role::*;
pub use harvest::*;
pub use initialize::*;
pub use recover_lp::*;
pub use renounce_role::*;
pub use revoke_role::*;
pub use set_harvest_incentive::*;
pub use set_paused::*;
pub use set_recoverable::*;
pub use set_staking_rewards::*;
pub use set_treasury::*;
pub use set_treasury_fee::*;
