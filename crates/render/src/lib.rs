//! colorview-render: Cairo rendering of the checkerboard swatch.

pub mod checkerboard;
pub mod render_utils;
pub mod swatch_renderer;

pub use checkerboard::{checkerboard_pattern, create_checkerboard_tile};
pub use render_utils::{read_pixel, rounded_rectangle};
pub use swatch_renderer::{SwatchRenderer, DEFAULT_MINIMUM_SIZE};
