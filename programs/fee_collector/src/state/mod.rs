pub mod collector_config;
pub mod fee_split;
pub mod recoverable_set;
pub mod role_registry;

pub use collector_config::*;
pub use fee_split::*;
pub use recoverable_set::*;
pub use role_registry::*;
