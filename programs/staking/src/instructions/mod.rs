// Every module exports a `handler`; lib.rs calls them by full path
#![allow(ambiguous_glob_reexports)]

pub mod init_config;
pub mod update_config;
pub mod create_stake_account;
pub mod deposit;
pub mod withdraw_stake;
pub mod positions;

pub use init_config::*;
pub use update_config::*;
pub use create_stake_account::*;
pub use deposit::*;
pub use withdraw_stake::*;
pub use positions::*;
