use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022,
    token_interface::{Mint as InterfaceMint, TokenAccount as InterfaceTokenAccount, TokenInterface},
};
use crate::errors::CanvasError;
use crate::events::PixelPlaced;
use crate::state::{CanvasConfig, Pixel, FEE_VAULT_SEED, PAID_PIXEL_FEE};
use crate::utils::validate_placement;

#[derive(Accounts)]
#[instruction(x: u16, y: u16)]
pub struct PlacePixelPaid<'info> {
    #[account(mut)]
    pub actor: Signer<'info>,

    #[account(
        mut,
        seeds = [CanvasConfig::SEED],
        bump = canvas_config.bump
    )]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        constraint = fee_mint.key() == canvas_config.fee_mint @ CanvasError::FeeTransferFailed
    )]
    pub fee_mint: InterfaceAccount<'info, InterfaceMint>,

    /// Actor's own token account the fee is debited from (delegated accounts are rejected)
    #[account(
        mut,
        constraint = actor_token_account.mint == fee_mint.key() @ CanvasError::FeeTransferFailed,
        constraint = actor_token_account.owner == actor.key() @ CanvasError::FeeTransferFailed,
    )]
    pub actor_token_account: InterfaceAccount<'info, InterfaceTokenAccount>,

    #[account(
        mut,
        seeds = [FEE_VAULT_SEED, canvas_config.key().as_ref()],
        bump,
        constraint = fee_vault.key() == canvas_config.fee_vault @ CanvasError::InvalidFeeVault
    )]
    pub fee_vault: InterfaceAccount<'info, InterfaceTokenAccount>,

    #[account(
        init_if_needed,
        payer = actor,
        space = 8 + Pixel::INIT_SPACE,
        seeds = [Pixel::SEED, &x.to_le_bytes(), &y.to_le_bytes()],
        bump
    )]
    pub pixel: Account<'info, Pixel>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Rejects a fee debit the token program would refuse.
pub(crate) fn ensure_fee_payable(balance: u64, frozen: bool, amount: u64) -> Result<()> {
    require!(!frozen, CanvasError::FeeTransferFailed);
    if balance < amount {
        return Err(error!(CanvasError::FeeTransferFailed).with_values((balance, amount)));
    }
    Ok(())
}

/// Validates the placement, collects the fee through `collect`, then books what the vault
/// received and writes the cell. `collect` returns the amount that actually arrived, which
/// is less than the fee for mints with a transfer fee. If anything fails neither the cell
/// nor the fee totals change.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_paid_placement<F>(
    pixel: &mut Pixel,
    config: &mut CanvasConfig,
    actor: Pubkey,
    x: u16,
    y: u16,
    color: u32,
    now: i64,
    collect: F,
) -> Result<()>
where
    F: FnOnce(u64) -> Result<u64>,
{
    validate_placement(x, y, color)?;
    let received = collect(PAID_PIXEL_FEE)?;
    require!(received > 0, CanvasError::FeeTransferFailed);

    config.record_fee_collected(received)?;
    config.count_placement(true)?;
    pixel.x = x;
    pixel.y = y;
    pixel.paint(color, actor, now);
    Ok(())
}

pub fn handler(ctx: Context<PlacePixelPaid>, x: u16, y: u16, color: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let actor = ctx.accounts.actor.key();
    let balance = ctx.accounts.actor_token_account.amount;
    let frozen = ctx.accounts.actor_token_account.is_frozen();
    let vault_before = ctx.accounts.fee_vault.amount;
    let decimals = ctx.accounts.fee_mint.decimals;

    let token_program = ctx.accounts.token_program.to_account_info();
    let vault_info = ctx.accounts.fee_vault.to_account_info();
    let cpi_accounts = token_2022::TransferChecked {
        from: ctx.accounts.actor_token_account.to_account_info(),
        to: ctx.accounts.fee_vault.to_account_info(),
        authority: ctx.accounts.actor.to_account_info(),
        mint: ctx.accounts.fee_mint.to_account_info(),
    };
    let collect = move |amount: u64| -> Result<u64> {
        ensure_fee_payable(balance, frozen, amount)?;
        token_2022::transfer_checked(CpiContext::new(token_program, cpi_accounts), amount, decimals)?;

        let data = vault_info.try_borrow_data()?;
        let vault_after = InterfaceTokenAccount::try_deserialize(&mut &data[..])?.amount;
        let received = vault_after.checked_sub(vault_before).ok_or(CanvasError::Overflow)?;
        Ok(received)
    };

    let pixel = &mut ctx.accounts.pixel;
    pixel.bump = ctx.bumps.pixel;

    apply_paid_placement(pixel, &mut ctx.accounts.canvas_config, actor, x, y, color, now, collect)?;

    emit!(PixelPlaced {
        x,
        y,
        color,
        actor,
        timestamp: now,
        paid: true,
    });

    msg!(
        "Paid pixel ({}, {}) set to {:06x} by {}, {} fees collected in total",
        x,
        y,
        color,
        actor,
        ctx.accounts.canvas_config.total_collected
    );
    Ok(())
}
