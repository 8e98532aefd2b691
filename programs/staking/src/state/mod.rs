pub mod global_config;
pub mod stake_account;
pub mod positions;
pub mod vesting;

pub use global_config::*;
pub use stake_account::*;
pub use positions::*;
pub use vesting::*;
