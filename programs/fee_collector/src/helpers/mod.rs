pub mod access;
pub mod math;
pub mod pda;

pub use access::*;
pub use math::*;
pub use pda::*;
