use anchor_lang::prelude::*;
use crate::state::GlobalConfig;
use crate::constants::*;
use crate::errors::StakingError;
use crate::events::ConfigUpdated;

/// Update global configuration
/// Only callable by the governance authority. `epoch_duration` is fixed at `init_config`:
/// every stored epoch number is relative to it.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        address = config.governance_authority @ StakingError::Unauthorized
    )]
    pub governance_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, GlobalConfig>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    new_governance_authority: Option<Pubkey>,
    new_unlocking_duration: Option<u8>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(authority) = new_governance_authority {
        require!(authority != Pubkey::default(), StakingError::InvalidConfig);
        msg!("Governance authority: {} -> {}", config.governance_authority, authority);
        config.governance_authority = authority;
    }

    if let Some(duration) = new_unlocking_duration {
        config.unlocking_duration = duration;
    }

    emit!(ConfigUpdated {
        governance_authority: config.governance_authority,
        unlocking_duration: config.unlocking_duration,
        epoch_duration: config.epoch_duration,
    });

    Ok(())
}
