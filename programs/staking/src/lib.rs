use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::VestingSchedule;

declare_id!("Bb1KofGs2Y8nrELPbi3tz6GUF1JoMWYNFCmjKDCaoYJj");

#[program]
pub mod staking {
    use super::*;

    // ============ Configuration ============

    /// Initialize the global config (one-time setup)
    pub fn init_config(ctx: Context<InitConfig>, params: InitConfigParams) -> Result<()> {
        instructions::init_config::handler(ctx, params)
    }

    /// Update global config (governance authority only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_governance_authority: Option<Pubkey>,
        new_unlocking_duration: Option<u8>,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, new_governance_authority, new_unlocking_duration)
    }

    // ============ Stake Account ============

    /// Set up custody and metadata over a pre-allocated position buffer
    pub fn create_stake_account(
        ctx: Context<CreateStakeAccount>,
        owner: Pubkey,
        lock: VestingSchedule,
    ) -> Result<()> {
        instructions::create_stake_account::handler(ctx, owner, lock)
    }

    /// Move tokens from the owner into custody
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Move unlocked, uncommitted tokens out of custody
    pub fn withdraw_stake(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
        instructions::withdraw_stake::handler(ctx, amount)
    }

    // ============ Positions ============

    /// Commit part of the custody balance to a new position
    pub fn create_position(
        ctx: Context<CreatePosition>,
        product: Pubkey,
        publisher: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::positions::create_position_handler(ctx, product, publisher, amount)
    }

    /// Free a position slot
    pub fn close_position(ctx: Context<ClosePosition>, index: u8) -> Result<()> {
        instructions::positions::close_position_handler(ctx, index)
    }
}
