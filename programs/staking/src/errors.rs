use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    // ============================================================
    // CONFIGURATION ERRORS
    // ============================================================

    #[msg("Global config has already been initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid configuration parameter")]
    InvalidConfig,

    #[msg("Token mint does not match the configured staking mint")]
    InvalidMint,

    // ============================================================
    // CAPACITY ERRORS
    // ============================================================

    #[msg("Number of position limit reached")]
    PositionLimitReached,

    // ============================================================
    // VALIDATION ERRORS
    // ============================================================

    #[msg("New position needs to have positive balance")]
    NonPositiveAmount,

    #[msg("Insufficient balance to take on a new position")]
    InsufficientBalance,

    #[msg("Insufficient withdrawable balance")]
    InsufficientWithdrawableBalance,

    // ============================================================
    // LOOKUP ERRORS
    // ============================================================

    #[msg("Position not found")]
    PositionNotFound,

    // ============================================================
    // ARITHMETIC ERRORS
    // ============================================================

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Clock is before the epoch origin")]
    InvalidEpoch,
}
