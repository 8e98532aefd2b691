// ============================================================
// POSITION LEDGER
// ============================================================

/// Number of position slots pre-allocated in every stake account
pub const MAX_POSITIONS: usize = 100;

/// Size of one serialized position slot in bytes
pub const POSITION_SIZE: usize = 104;

/// Anchor account discriminator length
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Exact size the client must allocate for the position buffer
pub const POSITIONS_ACCOUNT_SIZE: usize = DISCRIMINATOR_SIZE + MAX_POSITIONS * POSITION_SIZE;

// ============================================================
// TIME CONSTANTS (in seconds)
// ============================================================

/// 1 hour in seconds
pub const ONE_HOUR: u64 = 60 * 60;

/// Default epoch length (1 hour)
pub const DEFAULT_EPOCH_DURATION: u64 = ONE_HOUR;

/// Default number of epochs a position takes to unlock
pub const DEFAULT_UNLOCKING_DURATION: u8 = 2;

// ============================================================
// PDA SEEDS
// ============================================================

pub const CONFIG_SEED: &[u8] = b"config";
pub const STAKE_ACCOUNT_METADATA_SEED: &[u8] = b"stake_metadata";
pub const CUSTODY_SEED: &[u8] = b"custody";
pub const AUTHORITY_SEED: &[u8] = b"authority";
