use anchor_lang::prelude::*;
use crate::events::PixelPlaced;
use crate::state::{CanvasConfig, CooldownRecord, Pixel};
use crate::utils::validate_placement;

#[derive(Accounts)]
#[instruction(x: u16, y: u16)]
pub struct PlacePixelFree<'info> {
    #[account(mut)]
    pub actor: Signer<'info>,

    #[account(
        mut,
        seeds = [CanvasConfig::SEED],
        bump = canvas_config.bump
    )]
    pub canvas_config: Account<'info, CanvasConfig>,

    #[account(
        init_if_needed,
        payer = actor,
        space = 8 + Pixel::INIT_SPACE,
        seeds = [Pixel::SEED, &x.to_le_bytes(), &y.to_le_bytes()],
        bump
    )]
    pub pixel: Account<'info, Pixel>,

    #[account(
        init_if_needed,
        payer = actor,
        space = 8 + CooldownRecord::INIT_SPACE,
        seeds = [CooldownRecord::SEED, actor.key().as_ref()],
        bump
    )]
    pub cooldown_record: Account<'info, CooldownRecord>,

    pub system_program: Program<'info, System>,
}

/// Placement guard, cooldown check, cell write, then cooldown update.
/// Nothing is written if any check fails.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_free_placement(
    pixel: &mut Pixel,
    record: &mut CooldownRecord,
    actor: Pubkey,
    x: u16,
    y: u16,
    color: u32,
    now: i64,
    cooldown_seconds: i64,
) -> Result<()> {
    validate_placement(x, y, color)?;
    record.ensure_ready(now, cooldown_seconds)?;
    pixel.x = x;
    pixel.y = y;
    pixel.paint(color, actor, now);
    record.record_free_write(now);
    Ok(())
}

pub fn handler(ctx: Context<PlacePixelFree>, x: u16, y: u16, color: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let actor = ctx.accounts.actor.key();
    let cooldown_seconds = ctx.accounts.canvas_config.cooldown_seconds;

    let pixel = &mut ctx.accounts.pixel;
    pixel.bump = ctx.bumps.pixel;

    let record = &mut ctx.accounts.cooldown_record;
    record.actor = actor;
    record.bump = ctx.bumps.cooldown_record;

    apply_free_placement(pixel, record, actor, x, y, color, now, cooldown_seconds)?;
    ctx.accounts.canvas_config.count_placement(false)?;

    emit!(PixelPlaced {
        x,
        y,
        color,
        actor,
        timestamp: now,
        paid: false,
    });

    msg!("Free pixel ({}, {}) set to {:06x} by {}", x, y, color, actor);
    Ok(())
}
