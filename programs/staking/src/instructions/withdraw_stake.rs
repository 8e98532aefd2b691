use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::state::*;
use crate::constants::*;
use crate::errors::StakingError;
use crate::events::StakeWithdrawn;

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(
        address = stake_account_metadata.owner @ StakingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    #[account(
        mut,
        constraint = destination.mint == config.asset_mint @ StakingError::InvalidMint
    )]
    pub destination: Account<'info, TokenAccount>,

    pub stake_account_positions: AccountLoader<'info, PositionData>,

    #[account(
        seeds = [STAKE_ACCOUNT_METADATA_SEED, stake_account_positions.key().as_ref()],
        bump = stake_account_metadata.metadata_bump
    )]
    pub stake_account_metadata: Account<'info, StakeAccountMetadata>,

    #[account(
        mut,
        seeds = [CUSTODY_SEED, stake_account_positions.key().as_ref()],
        bump = stake_account_metadata.custody_bump
    )]
    pub stake_account_custody: Account<'info, TokenAccount>,

    /// CHECK: PDA signing for custody transfers, holds no data
    #[account(
        seeds = [AUTHORITY_SEED, stake_account_positions.key().as_ref()],
        bump = stake_account_metadata.authority_bump
    )]
    pub custody_authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<WithdrawStake>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::NonPositiveAmount);

    let current_epoch = ctx.accounts.config.current_epoch()?;
    let total_committed = ctx.accounts.stake_account_positions.load()?.total_committed()?;

    let withdrawable = ctx.accounts.stake_account_metadata.withdrawable_amount(
        ctx.accounts.stake_account_custody.amount,
        total_committed,
        current_epoch,
    )?;
    require!(
        amount <= withdrawable,
        StakingError::InsufficientWithdrawableBalance
    );

    // Transfer out of custody signed by the authority PDA
    let positions_key = ctx.accounts.stake_account_positions.key();
    let seeds = &[
        AUTHORITY_SEED,
        positions_key.as_ref(),
        &[ctx.accounts.stake_account_metadata.authority_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.stake_account_custody.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.custody_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let custody = &mut ctx.accounts.stake_account_custody;
    custody.reload()?;

    emit!(StakeWithdrawn {
        stake_account_positions: positions_key,
        owner: ctx.accounts.owner.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        custody_balance: custody.amount,
        epoch: current_epoch,
    });

    Ok(())
}
