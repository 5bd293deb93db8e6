use anchor_lang::prelude::*;

/// Emitted on every successful placement, free or paid.
#[event]
pub struct PixelPlaced {
    pub x: u16,
    pub y: u16,
    pub color: u32,
    pub actor: Pubkey,
    pub timestamp: i64,
    pub paid: bool,
}
