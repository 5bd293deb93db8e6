use anchor_lang::prelude::*;
use crate::state::CanvasConfig;
use crate::errors::CanvasError;

#[derive(Accounts)]
pub struct SetCooldown<'info> {
    #[account(
        constraint = authority.key() == canvas_config.authority @ CanvasError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CanvasConfig::SEED],
        bump = canvas_config.bump
    )]
    pub canvas_config: Account<'info, CanvasConfig>,
}

pub fn handler(ctx: Context<SetCooldown>, cooldown_seconds: i64) -> Result<()> {
    let config = &mut ctx.accounts.canvas_config;
    let previous = config.cooldown_seconds;
    config.set_cooldown(cooldown_seconds)?;

    msg!("Updated cooldown from {}s to {}s", previous, cooldown_seconds);
    Ok(())
}
