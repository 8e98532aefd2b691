use anchor_lang::prelude::*;
use crate::state::VestingSchedule;

// ============================================================
// CONFIG EVENTS
// ============================================================

#[event]
pub struct ConfigInitialized {
    pub governance_authority: Pubkey,
    pub asset_mint: Pubkey,
    pub unlocking_duration: u8,
    pub epoch_duration: u64,
}

#[event]
pub struct ConfigUpdated {
    pub governance_authority: Pubkey,
    pub unlocking_duration: u8,
    pub epoch_duration: u64,
}

// ============================================================
// STAKE ACCOUNT EVENTS
// ============================================================

#[event]
pub struct StakeAccountCreated {
    pub stake_account_positions: Pubkey,
    pub owner: Pubkey,
    pub custody: Pubkey,
    pub lock: VestingSchedule,
}

#[event]
pub struct StakeDeposited {
    pub stake_account_positions: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub custody_balance: u64,
}

#[event]
pub struct StakeWithdrawn {
    pub stake_account_positions: Pubkey,
    pub owner: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub custody_balance: u64,
    pub epoch: u64,
}

// ============================================================
// POSITION EVENTS
// ============================================================

#[event]
pub struct PositionCreated {
    pub stake_account_positions: Pubkey,
    pub index: u8,
    pub product: Pubkey,
    pub publisher: Pubkey,
    pub amount: u64,
    pub activation_epoch: u64,
    pub total_committed: u64,
}

#[event]
pub struct PositionClosed {
    pub stake_account_positions: Pubkey,
    pub index: u8,
    pub amount: u64,
    pub epoch: u64,
    pub total_committed: u64,
}
