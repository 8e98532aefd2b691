use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount, Mint};
use crate::state::*;
use crate::constants::*;
use crate::errors::StakingError;
use crate::events::StakeAccountCreated;

/// Initialize a stake account for `owner`
/// The position buffer must already exist, owned by this program, zero-filled and
/// exactly `POSITIONS_ACCOUNT_SIZE` bytes long.
#[derive(Accounts)]
pub struct CreateStakeAccount<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(zero)]
    pub stake_account_positions: AccountLoader<'info, PositionData>,

    #[account(
        init,
        payer = payer,
        space = StakeAccountMetadata::LEN,
        seeds = [STAKE_ACCOUNT_METADATA_SEED, stake_account_positions.key().as_ref()],
        bump
    )]
    pub stake_account_metadata: Account<'info, StakeAccountMetadata>,

    #[account(
        init,
        payer = payer,
        seeds = [CUSTODY_SEED, stake_account_positions.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = custody_authority,
    )]
    pub stake_account_custody: Account<'info, TokenAccount>,

    /// CHECK: PDA signing for custody transfers, holds no data
    #[account(
        seeds = [AUTHORITY_SEED, stake_account_positions.key().as_ref()],
        bump
    )]
    pub custody_authority: UncheckedAccount<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        address = config.asset_mint @ StakingError::InvalidMint
    )]
    pub mint: Account<'info, Mint>,

    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateStakeAccount>, owner: Pubkey, lock: VestingSchedule) -> Result<()> {
    // Claims the buffer; the discriminator is written when the loader exits
    ctx.accounts.stake_account_positions.load_init()?;

    let metadata = &mut ctx.accounts.stake_account_metadata;
    metadata.custody_bump = ctx.bumps.stake_account_custody;
    metadata.authority_bump = ctx.bumps.custody_authority;
    metadata.metadata_bump = ctx.bumps.stake_account_metadata;
    metadata.owner = owner;
    metadata.lock = lock;

    emit!(StakeAccountCreated {
        stake_account_positions: ctx.accounts.stake_account_positions.key(),
        owner,
        custody: ctx.accounts.stake_account_custody.key(),
        lock,
    });

    Ok(())
}
