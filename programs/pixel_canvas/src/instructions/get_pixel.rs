use anchor_lang::prelude::*;
use crate::state::{Pixel, PixelView};
use crate::utils::validate_coordinates;

#[derive(Accounts)]
#[instruction(x: u16, y: u16)]
pub struct GetPixel<'info> {
    /// Pixel PDA, which does not exist until the cell is first placed
    /// CHECK: Address pinned by seeds, owner and contents checked in handler
    #[account(
        seeds = [Pixel::SEED, &x.to_le_bytes(), &y.to_le_bytes()],
        bump
    )]
    pub pixel: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetPixel>, x: u16, y: u16) -> Result<PixelView> {
    validate_coordinates(x, y)?;

    let info = ctx.accounts.pixel.to_account_info();
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(PixelView::default());
    }

    let data = info.try_borrow_data()?;
    let pixel = Pixel::try_deserialize(&mut &data[..])?;
    Ok(pixel.view())
}
