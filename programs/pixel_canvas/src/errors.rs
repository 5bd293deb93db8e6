use anchor_lang::prelude::*;

#[error_code]
pub enum CanvasError {
    #[msg("Pixel coordinates out of bounds")]
    InvalidCoordinates,

    #[msg("Color must be a 24-bit RGB value")]
    InvalidColor,

    #[msg("Free placement cooldown is still active")]
    CooldownActive,

    #[msg("Fee transfer from actor failed")]
    FeeTransferFailed,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Fee withdrawal failed")]
    WithdrawFailed,

    #[msg("Cooldown must not be negative")]
    InvalidCooldown,

    #[msg("Invalid fee vault")]
    InvalidFeeVault,

    #[msg("Arithmetic overflow")]
    Overflow,
}
