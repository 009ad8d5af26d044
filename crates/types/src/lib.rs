//! colorview-types: Shared data types for the ColorView swatch.
//!
//! This crate contains the pure data types (colors and swatch options) that
//! are shared across all ColorView crates. Cairo and GTK conversions are
//! available behind the `cairo` and `gtk` features.

pub mod color;
pub mod swatch;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ParseColorError};
pub use swatch::{AttributeError, SwatchConfig, DEFAULT_CORNER_RADIUS, DEFAULT_PIXEL_SIZE};
