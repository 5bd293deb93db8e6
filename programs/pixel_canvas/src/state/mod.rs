pub mod canvas_config;
pub mod cooldown_record;
pub mod pixel;

pub use canvas_config::*;
pub use cooldown_record::*;
pub use pixel::*;
