use anchor_lang::prelude::*;

use crate::errors::CanvasError;
use crate::state::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_COLOR};

/// Rejects coordinates outside the canvas. Runs before any other effect of an instruction.
pub fn validate_coordinates(x: u16, y: u16) -> Result<()> {
    if x >= CANVAS_WIDTH || y >= CANVAS_HEIGHT {
        return Err(error!(CanvasError::InvalidCoordinates).with_values((x, y)));
    }
    Ok(())
}

pub fn validate_color(color: u32) -> Result<()> {
    require!(color <= MAX_COLOR, CanvasError::InvalidColor);
    Ok(())
}

/// Full placement guard shared by the free and paid paths.
pub fn validate_placement(x: u16, y: u16, color: u32) -> Result<()> {
    validate_coordinates(x, y)?;
    validate_color(color)
}
