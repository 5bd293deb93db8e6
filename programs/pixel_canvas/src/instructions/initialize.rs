use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::{CanvasConfig, FEE_VAULT_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the canvas administrator
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Fee token mint - supports both Token and Token-2022
    pub fee_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = 8 + CanvasConfig::INIT_SPACE,
        seeds = [CanvasConfig::SEED],
        bump
    )]
    pub canvas_config: Account<'info, CanvasConfig>,

    /// Fee vault - receives every paid placement fee
    #[account(
        init,
        payer = authority,
        seeds = [FEE_VAULT_SEED, canvas_config.key().as_ref()],
        bump,
        token::mint = fee_mint,
        token::authority = canvas_config,
        token::token_program = token_program,
    )]
    pub fee_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, cooldown_seconds: i64) -> Result<()> {
    let config = &mut ctx.accounts.canvas_config;

    config.authority = ctx.accounts.authority.key();
    config.fee_mint = ctx.accounts.fee_mint.key();
    config.fee_vault = ctx.accounts.fee_vault.key();
    config.set_cooldown(cooldown_seconds)?;
    config.total_collected = 0;
    config.total_withdrawn = 0;
    config.free_placements = 0;
    config.paid_placements = 0;
    config.bump = ctx.bumps.canvas_config;
    config._padding = [0u8; 64];

    msg!(
        "Canvas initialized: authority {}, cooldown {}s, fee mint {}",
        config.authority,
        cooldown_seconds,
        config.fee_mint
    );
    Ok(())
}
