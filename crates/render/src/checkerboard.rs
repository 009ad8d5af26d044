//! Checkerboard tile used to show transparency behind a swatch
//!
//! One tile is a full period of the pattern: a 2x2 seed of the two colors
//! scaled up without smoothing to `2 * tile_size` pixels square. The tile is
//! cut to the area being drawn, since repeats past it are never sampled.

use cairo::{Context, Extend, Filter, Format, ImageSurface, Operator, SurfacePattern};
use colorview_core::{Size, SwatchError};
use colorview_types::Color;

/// Build one checkerboard period, no larger than `extent`.
///
/// Cells on the diagonal hold `color1`, the anti-diagonal holds `color2`.
/// Cell boundaries stay at multiples of `tile_size` whatever the extent.
pub fn create_checkerboard_tile(
    color1: Color,
    color2: Color,
    tile_size: i32,
    extent: Size,
) -> Result<ImageSurface, SwatchError> {
    let tile_size = SwatchError::check_dimension("tile size", tile_size)?;
    let width = SwatchError::check_dimension("width", extent.width)?;
    let height = SwatchError::check_dimension("height", extent.height)?;
    let period = tile_size.saturating_mul(2);

    let seed = create_seed(color1, color2)?;
    let tile = ImageSurface::create(Format::ARgb32, period.min(width), period.min(height))?;
    {
        let cr = Context::new(&tile)?;
        cr.scale(tile_size as f64, tile_size as f64);
        cr.set_source_surface(&seed, 0.0, 0.0)?;
        cr.source().set_filter(Filter::Nearest);
        cr.set_operator(Operator::Source);
        cr.paint()?;
    }
    // The seed is released here, once the context referencing it is gone
    drop(seed);

    tile.flush();
    Ok(tile)
}

/// Build a repeating pattern of checkerboard tiles anchored at the origin,
/// for filling an area of `extent`.
///
/// The pattern keeps its own reference to the tile, so no full-size
/// intermediate outlives this call.
pub fn checkerboard_pattern(
    color1: Color,
    color2: Color,
    tile_size: i32,
    extent: Size,
) -> Result<SurfacePattern, SwatchError> {
    let tile = create_checkerboard_tile(color1, color2, tile_size, extent)?;
    let pattern = SurfacePattern::create(&tile);
    pattern.set_extend(Extend::Repeat);
    pattern.set_filter(Filter::Nearest);
    Ok(pattern)
}

fn create_seed(color1: Color, color2: Color) -> Result<ImageSurface, SwatchError> {
    let mut seed = ImageSurface::create(Format::ARgb32, 2, 2)?;
    let stride = seed.stride() as usize;
    {
        let mut data = seed.data()?;
        let cells = [color1, color2, color2, color1];
        for (i, color) in cells.iter().enumerate() {
            let offset = (i / 2) * stride + (i % 2) * 4;
            data[offset..offset + 4].copy_from_slice(&color.to_premultiplied_argb32().to_ne_bytes());
        }
    }
    Ok(seed)
}
