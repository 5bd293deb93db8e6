#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod get_pixel;
pub mod place_pixel_free;
pub mod place_pixel_paid;
pub mod withdraw_fees;
pub mod set_cooldown;

pub use initialize::*;
pub use get_pixel::*;
pub use place_pixel_free::*;
pub use place_pixel_paid::*;
pub use withdraw_fees::*;
pub use set_cooldown::*;
