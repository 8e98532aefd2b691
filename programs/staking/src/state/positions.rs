use anchor_lang::prelude::*;
use static_assertions::const_assert_eq;
use crate::constants::{MAX_POSITIONS, POSITION_SIZE, POSITIONS_ACCOUNT_SIZE, DISCRIMINATOR_SIZE};
use crate::errors::StakingError;

/// Fixed-capacity position ledger of a stake account
///
/// The client allocates this account with exactly `POSITIONS_ACCOUNT_SIZE` bytes before
/// `create_stake_account`; the program never resizes it. Slots are toggled in place so a
/// position keeps its index for its whole life.
#[account(zero_copy)]
#[repr(C)]
pub struct PositionData {
    pub positions: [Position; MAX_POSITIONS], // 104 * 100 = 10400
}

const_assert_eq!(std::mem::size_of::<Position>(), POSITION_SIZE);
const_assert_eq!(
    DISCRIMINATOR_SIZE + std::mem::size_of::<PositionData>(),
    POSITIONS_ACCOUNT_SIZE
);

/// A single slot. An all-zero slot is empty.
#[zero_copy]
#[repr(C)]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Position {
    pub amount: u64,           // 8
    pub product: Pubkey,       // 32
    pub publisher: Pubkey,     // 32
    pub activation_epoch: u64, // 8
    pub in_use: u8,            // 1
    pub _pad0: [u8; 7],        // 7
    pub _reserved: [u64; 2],   // 16
}

impl Position {
    pub fn is_in_use(&self) -> bool {
        self.in_use != 0
    }

    pub fn new(product: Pubkey, publisher: Pubkey, amount: u64, activation_epoch: u64) -> Self {
        Position {
            amount,
            product,
            publisher,
            activation_epoch,
            in_use: 1,
            ..Default::default()
        }
    }
}

impl PositionData {
    /// Lowest-index empty slot
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.positions.iter().position(|p| !p.is_in_use())
    }

    pub fn occupied_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_in_use()).count()
    }

    pub fn get_position(&self, index: usize) -> Option<&Position> {
        self.positions.get(index).filter(|p| p.is_in_use())
    }

    pub fn active_positions_iter(&self) -> impl Iterator<Item = (usize, &Position)> {
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_in_use())
    }

    /// Sum of amounts over occupied slots
    pub fn total_committed(&self) -> Result<u64> {
        self.positions
            .iter()
            .filter(|p| p.is_in_use())
            .try_fold(0u64, |total, p| total.checked_add(p.amount))
            .ok_or_else(|| error!(StakingError::Overflow))
    }

    /// Commits `amount` of the uncommitted custody balance to a new position in the first
    /// empty slot and returns that slot's index
    pub fn create_position(
        &mut self,
        product: Pubkey,
        publisher: Pubkey,
        amount: u64,
        custody_balance: u64,
        current_epoch: u64,
    ) -> Result<usize> {
        require!(amount > 0, StakingError::NonPositiveAmount);

        let index = self
            .first_empty_slot()
            .ok_or(StakingError::PositionLimitReached)?;

        let uncommitted = custody_balance.saturating_sub(self.total_committed()?);
        require!(amount <= uncommitted, StakingError::InsufficientBalance);

        self.positions[index] = Position::new(product, publisher, amount, current_epoch);

        Ok(index)
    }

    /// Zeroes the slot at `index` so it can be reused, returning what it held
    pub fn close_position(&mut self, index: usize) -> Result<Position> {
        let position = *self
            .get_position(index)
            .ok_or(StakingError::PositionNotFound)?;

        self.positions[index] = Position::default();

        Ok(position)
    }
}
