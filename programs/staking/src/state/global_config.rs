use anchor_lang::prelude::*;
use crate::errors::StakingError;

/// Program-wide configuration
/// Single PDA, written once by `init_config` and afterwards only by the governance authority
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct GlobalConfig {
    /// PDA bump seed
    pub bump: u8,

    /// Identity allowed to update this config
    pub governance_authority: Pubkey,

    /// The only mint accepted into custody accounts
    pub asset_mint: Pubkey,

    /// Epochs a position takes to fully unlock once unlocking begins
    pub unlocking_duration: u8,

    /// Wall-clock length of one epoch in seconds
    pub epoch_duration: u64,
}

impl GlobalConfig {
    pub const LEN: usize = 8  // discriminator
        + 1   // bump
        + 32  // governance_authority
        + 32  // asset_mint
        + 1   // unlocking_duration
        + 8   // epoch_duration
        + 32; // padding for future expansion

    /// A zeroed config has never been written by `init_config`
    pub fn is_initialized(&self) -> bool {
        self.governance_authority != Pubkey::default()
    }

    /// Epoch containing `unix_timestamp`
    pub fn epoch_at(&self, unix_timestamp: i64) -> Result<u64> {
        require!(self.epoch_duration > 0, StakingError::InvalidConfig);
        let timestamp = u64::try_from(unix_timestamp).map_err(|_| StakingError::InvalidEpoch)?;
        Ok(timestamp / self.epoch_duration)
    }

    /// Current epoch according to the Clock sysvar
    pub fn current_epoch(&self) -> Result<u64> {
        self.epoch_at(Clock::get()?.unix_timestamp)
    }
}
