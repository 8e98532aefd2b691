use anchor_lang::prelude::*;
use crate::state::VestingSchedule;

/// Per-participant record that sits beside the position ledger
/// Seeds: [STAKE_ACCOUNT_METADATA_SEED, stake_account_positions]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakeAccountMetadata {
    /// Bump of the custody token account PDA
    pub custody_bump: u8,

    /// Bump of the custody authority PDA
    pub authority_bump: u8,

    /// Bump of this metadata PDA
    pub metadata_bump: u8,

    /// Wallet allowed to manage positions and withdraw
    pub owner: Pubkey,

    /// Default lock applied to the custody balance
    pub lock: VestingSchedule,
}

impl StakeAccountMetadata {
    pub const LEN: usize = 8  // discriminator
        + 1   // custody_bump
        + 1   // authority_bump
        + 1   // metadata_bump
        + 32  // owner
        + VestingSchedule::LEN // lock
        + 16; // padding

    /// Custody balance the owner may withdraw right now
    pub fn withdrawable_amount(
        &self,
        custody_balance: u64,
        total_committed: u64,
        current_epoch: u64,
    ) -> Result<u64> {
        self.lock
            .withdrawable_amount(custody_balance, total_committed, current_epoch)
    }
}
