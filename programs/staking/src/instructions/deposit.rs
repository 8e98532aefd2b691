use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::state::*;
use crate::constants::*;
use crate::errors::StakingError;
use crate::events::StakeDeposited;

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        address = stake_account_metadata.owner @ StakingError::Unauthorized
    )]
    pub owner: Signer<'info>,

    /// Owner's token account funding the deposit
    #[account(
        mut,
        constraint = source.mint == config.asset_mint @ StakingError::InvalidMint,
        constraint = source.owner == owner.key() @ StakingError::Unauthorized
    )]
    pub source: Account<'info, TokenAccount>,

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

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::NonPositiveAmount);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.source.to_account_info(),
                to: ctx.accounts.stake_account_custody.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    let custody = &mut ctx.accounts.stake_account_custody;
    custody.reload()?;

    emit!(StakeDeposited {
        stake_account_positions: ctx.accounts.stake_account_positions.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        custody_balance: custody.amount,
    });

    Ok(())
}
