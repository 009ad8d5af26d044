//! Shared rendering utilities

use std::f64::consts::PI;

use cairo::{Context, ImageSurface};
use colorview_core::SwatchError;
use colorview_types::Color;

/// Largest usable corner radius for a box; negative or non-finite radii become 0
pub fn clamp_corner_radius(radius: f64, width: f64, height: f64) -> f64 {
    if !radius.is_finite() || radius <= 0.0 {
        return 0.0;
    }
    radius.min(width / 2.0).min(height / 2.0)
}

/// Draw a rounded rectangle path
pub fn rounded_rectangle(cr: &Context, x: f64, y: f64, width: f64, height: f64, radius: f64) {
    let radius = clamp_corner_radius(radius, width, height);

    cr.new_path();
    if radius == 0.0 {
        cr.rectangle(x, y, width, height);
        return;
    }
    cr.arc(x + radius, y + radius, radius, PI, 3.0 * PI / 2.0);
    cr.arc(x + width - radius, y + radius, radius, 3.0 * PI / 2.0, 0.0);
    cr.arc(x + width - radius, y + height - radius, radius, 0.0, PI / 2.0);
    cr.arc(x + radius, y + height - radius, radius, PI / 2.0, PI);
    cr.close_path();
}

/// Read one pixel back from an ARGB32 surface, undoing premultiplication.
///
/// Fails with [`SwatchError::Borrow`] while a context or pattern still holds
/// the surface.
pub fn read_pixel(surface: &mut ImageSurface, x: i32, y: i32) -> Result<Color, SwatchError> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return Err(SwatchError::OutOfBounds { x, y });
    }

    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data()?;
    let offset = y as usize * stride + x as usize * 4;
    let mut word = [0u8; 4];
    word.copy_from_slice(&data[offset..offset + 4]);

    Ok(Color::from_premultiplied_argb32(u32::from_ne_bytes(word)))
}
