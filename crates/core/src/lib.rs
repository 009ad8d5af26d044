//! colorview-core: Core traits and types for the ColorView swatch.
//!
//! This crate contains the `Renderable` capability a host uses to embed a
//! swatch, the measurement types it negotiates sizes with, and the shared
//! error type.

mod error;
pub mod measure;
mod renderable;

pub use error::SwatchError;
pub use measure::{Constraints, MeasureSpec, Measurement, Size};
pub use renderable::Renderable;

// Re-export types used in trait signatures for convenience
pub use colorview_types::{Color, SwatchConfig};
