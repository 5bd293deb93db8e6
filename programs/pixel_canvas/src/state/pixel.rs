use anchor_lang::prelude::*;

pub const CANVAS_WIDTH: u16 = 500;
pub const CANVAS_HEIGHT: u16 = 500;

/// Largest packed 0xRRGGBB value.
pub const MAX_COLOR: u32 = 0x00FF_FFFF;

/// A written cell. Cells that were never written have no account at all.
#[account]
#[derive(InitSpace)]
pub struct Pixel {
    pub x: u16,
    pub y: u16,
    /// Packed 0xRRGGBB
    pub color: u32,
    /// Last actor to place this pixel
    pub writer: Pubkey,
    /// Unix timestamp of the last placement
    pub written_at: i64,
    pub bump: u8,
}

impl Pixel {
    pub const SEED: &'static [u8] = b"pixel";

    pub fn paint(&mut self, color: u32, writer: Pubkey, now: i64) {
        self.color = color;
        self.writer = writer;
        self.written_at = now;
    }

    pub fn view(&self) -> PixelView {
        PixelView {
            color: self.color,
            writer: Some(self.writer),
            written_at: self.written_at,
            written: true,
        }
    }
}

/// Return data of `get_pixel`. `written == false` marks a cell nobody has placed yet.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelView {
    pub color: u32,
    pub writer: Option<Pubkey>,
    pub written_at: i64,
    pub written: bool,
}
