//! Error types for swatch rendering

/// Errors produced while rendering a swatch
#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    /// A tile size, width or height that is zero or negative
    #[error("invalid {what}: {value} (must be positive)")]
    InvalidDimension { what: &'static str, value: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    /// Pixel data was requested while the surface is still referenced elsewhere
    #[error("surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("pixel ({x}, {y}) is outside the surface")]
    OutOfBounds { x: i32, y: i32 },
}

impl SwatchError {
    /// Check that a dimension is strictly positive
    pub fn check_dimension(what: &'static str, value: i32) -> Result<i32, SwatchError> {
        if value > 0 {
            Ok(value)
        } else {
            Err(SwatchError::InvalidDimension { what, value })
        }
    }
}
