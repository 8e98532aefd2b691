use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;
use crate::state::*;
use crate::constants::*;
use crate::errors::StakingError;
use crate::events::{PositionCreated, PositionClosed};

#[derive(Accounts)]
pub struct CreatePosition<'info> {
    #[account(
        address = stake_account_metadata.owner @ StakingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(mut)]
    pub stake_account_positions: AccountLoader<'info, PositionData>,

    #[account(
        seeds = [STAKE_ACCOUNT_METADATA_SEED, stake_account_positions.key().as_ref()],
        bump = stake_account_metadata.metadata_bump
    )]
    pub stake_account_metadata: Account<'info, StakeAccountMetadata>,

    #[account(
        seeds = [CUSTODY_SEED, stake_account_positions.key().as_ref()],
        bump = stake_account_metadata.custody_bump
    )]
    pub stake_account_custody: Account<'info, TokenAccount>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,
}

pub fn create_position_handler(
    ctx: Context<CreatePosition>,
    product: Pubkey,
    publisher: Pubkey,
    amount: u64,
) -> Result<()> {
    let current_epoch = ctx.accounts.config.current_epoch()?;
    let positions = &mut ctx.accounts.stake_account_positions.load_mut()?;

    let index = positions.create_position(
        product,
        publisher,
        amount,
        ctx.accounts.stake_account_custody.amount,
        current_epoch,
    )?;

    emit!(PositionCreated {
        stake_account_positions: ctx.accounts.stake_account_positions.key(),
        index: index as u8,
        product,
        publisher,
        amount,
        activation_epoch: current_epoch,
        total_committed: positions.total_committed()?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClosePosition<'info> {
    #[account(
        address = stake_account_metadata.owner @ StakingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(mut)]
    pub stake_account_positions: AccountLoader<'info, PositionData>,

    #[account(
        seeds = [STAKE_ACCOUNT_METADATA_SEED, stake_account_positions.key().as_ref()],
        bump = stake_account_metadata.metadata_bump
    )]
    pub stake_account_metadata: Account<'info, StakeAccountMetadata>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,
}

pub fn close_position_handler(ctx: Context<ClosePosition>, index: u8) -> Result<()> {
    let current_epoch = ctx.accounts.config.current_epoch()?;
    let positions = &mut ctx.accounts.stake_account_positions.load_mut()?;

    let closed = positions.close_position(index as usize)?;

    msg!("Closed position {} ({} committed since epoch {})", index, closed.amount, closed.activation_epoch);

    emit!(PositionClosed {
        stake_account_positions: ctx.accounts.stake_account_positions.key(),
        index,
        amount: closed.amount,
        epoch: current_epoch,
        total_committed: positions.total_committed()?,
    });

    Ok(())
}
