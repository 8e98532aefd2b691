use anchor_lang::prelude::*;
use crate::errors::StakingError;

/// Lock descriptor attached to every stake account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum VestingSchedule {
    /// Balance is always unlocked
    #[default]
    FullyVested,
    /// `initial_balance` vests linearly over `vesting_duration` epochs starting at `start_epoch`
    Locked {
        initial_balance: u64,
        start_epoch: u64,
        vesting_duration: u64,
    },
}

/// Where a schedule sits at a given epoch
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VestingStatus {
    FullyVested,
    NotStarted,
    Vesting,
    FullyUnlocked,
}

impl VestingSchedule {
    /// Borsh size of the largest variant
    pub const LEN: usize = 1 + 8 + 8 + 8;

    pub fn status(&self, current_epoch: u64) -> VestingStatus {
        match *self {
            VestingSchedule::FullyVested => VestingStatus::FullyVested,
            VestingSchedule::Locked { start_epoch, vesting_duration, .. } => {
                if current_epoch < start_epoch {
                    VestingStatus::NotStarted
                } else if current_epoch < start_epoch.saturating_add(vesting_duration) {
                    VestingStatus::Vesting
                } else {
                    VestingStatus::FullyUnlocked
                }
            }
        }
    }

    /// Portion of the grant still locked at `current_epoch`.
    /// Rounds up so nothing unlocks ahead of schedule.
    pub fn locked_amount(&self, current_epoch: u64) -> Result<u64> {
        match (*self, self.status(current_epoch)) {
            (VestingSchedule::Locked { initial_balance, .. }, VestingStatus::NotStarted) => {
                Ok(initial_balance)
            }
            (
                VestingSchedule::Locked { initial_balance, start_epoch, vesting_duration },
                VestingStatus::Vesting,
            ) => {
                let end_epoch = start_epoch
                    .checked_add(vesting_duration)
                    .ok_or(StakingError::Overflow)?;
                let remaining = (end_epoch - current_epoch) as u128;
                let duration = vesting_duration as u128;
                let locked = (initial_balance as u128)
                    .checked_mul(remaining)
                    .ok_or(StakingError::Overflow)?
                    .div_ceil(duration);
                u64::try_from(locked).map_err(|_| error!(StakingError::Overflow))
            }
            _ => Ok(0),
        }
    }

    /// Custody balance that may leave the account at `current_epoch`.
    /// Committed position amounts stay in custody regardless of vesting, and nothing
    /// leaves a `Locked` account before `start_epoch`.
    pub fn withdrawable_amount(
        &self,
        custody_balance: u64,
        total_committed: u64,
        current_epoch: u64,
    ) -> Result<u64> {
        let locked = match self.status(current_epoch) {
            VestingStatus::NotStarted => custody_balance,
            _ => self.locked_amount(current_epoch)?,
        };
        Ok(custody_balance.saturating_sub(locked.max(total_committed)))
    }
}
