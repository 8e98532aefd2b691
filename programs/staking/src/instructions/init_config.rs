use anchor_lang::prelude::*;
use crate::state::GlobalConfig;
use crate::constants::*;
use crate::errors::StakingError;
use crate::events::ConfigInitialized;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitConfigParams {
    pub governance_authority: Pubkey,
    pub asset_mint: Pubkey,
    pub unlocking_duration: u8,
    pub epoch_duration: u64,
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = GlobalConfig::LEN,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config_account: Account<'info, GlobalConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitConfig>, params: InitConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.config_account;

    require!(!config.is_initialized(), StakingError::AlreadyInitialized);
    require!(
        params.governance_authority != Pubkey::default(),
        StakingError::InvalidConfig
    );
    require!(params.epoch_duration > 0, StakingError::InvalidConfig);

    config.bump = ctx.bumps.config_account;
    config.governance_authority = params.governance_authority;
    config.asset_mint = params.asset_mint;
    config.unlocking_duration = params.unlocking_duration;
    config.epoch_duration = params.epoch_duration;

    emit!(ConfigInitialized {
        governance_authority: config.governance_authority,
        asset_mint: config.asset_mint,
        unlocking_duration: config.unlocking_duration,
        epoch_duration: config.epoch_duration,
    });

    Ok(())
}
