use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;
use state::PixelView;

declare_id!("CrU2AZh17FgbmjNGzFrAzEQx7wCBX27rvjhag1feZB3z");

#[program]
pub mod pixel_canvas {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, cooldown_seconds: i64) -> Result<()> {
        instructions::initialize::handler(ctx, cooldown_seconds)
    }

    pub fn get_pixel(ctx: Context<GetPixel>, x: u16, y: u16) -> Result<PixelView> {
        instructions::get_pixel::handler(ctx, x, y)
    }

    pub fn place_pixel_free(
        ctx: Context<PlacePixelFree>,
        x: u16,
        y: u16,
        color: u32,
    ) -> Result<()> {
        instructions::place_pixel_free::handler(ctx, x, y, color)
    }

    pub fn place_pixel_paid(
        ctx: Context<PlacePixelPaid>,
        x: u16,
        y: u16,
        color: u32,
    ) -> Result<()> {
        instructions::place_pixel_paid::handler(ctx, x, y, color)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        instructions::withdraw_fees::handler(ctx, amount)
    }

    pub fn set_cooldown(ctx: Context<SetCooldown>, cooldown_seconds: i64) -> Result<()> {
        instructions::set_cooldown::handler(ctx, cooldown_seconds)
    }
}
