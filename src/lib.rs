//! ColorView: a color swatch drawn over a tiled checkerboard
//!
//! This library provides:
//! - Application configuration (`AppConfig`)
//! - A GTK4 host widget for the swatch (feature `gtk`)
//!
//! Colors, the renderer and the `Renderable` capability live in the
//! `colorview-types`, `colorview-render` and `colorview-core` crates and are
//! re-exported here.

pub mod config;
#[cfg(feature = "gtk")]
pub mod ui;

// Re-export commonly used types
pub use colorview_core::{Constraints, MeasureSpec, Renderable, Size, SwatchError};
pub use colorview_render::{read_pixel, SwatchRenderer};
pub use colorview_types::{Color, SwatchConfig};
pub use config::AppConfig;
