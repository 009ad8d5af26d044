//! Renderable trait

use crate::error::SwatchError;
use crate::measure::{Constraints, Size};
use cairo::{Context, ImageSurface};

/// Trait for anything a host can measure and paint
///
/// Hosts (a GTK drawing area, an offscreen exporter, a test) call
/// [`Renderable::measure`] to negotiate a size, then either paint onto their
/// own context with [`Renderable::draw`] or ask for a standalone surface with
/// [`Renderable::render`].
pub trait Renderable {
    /// Negotiate a size with the host
    fn measure(&mut self, constraints: Constraints) -> Size;

    /// Render into a new ARGB32 surface of exactly `size`
    fn render(&self, size: Size) -> Result<ImageSurface, SwatchError>;

    /// Paint onto a host-owned context whose origin is the top-left corner
    fn draw(&self, cr: &Context, size: Size) -> Result<(), SwatchError>;

    /// Whether the host should route clicks to this region
    fn is_clickable(&self) -> bool {
        false
    }
}
