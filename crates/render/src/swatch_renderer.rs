//! Swatch renderer: a rounded rectangle of color over a checkerboard
//!
//! Drawing is always two fills of the same rounded rectangle: first the
//! repeating checkerboard pattern, then the solid color composited with
//! `OVER`, so a translucent color lets the checkerboard show through.

use std::fmt;

use cairo::{Context, Format, ImageSurface, Operator};
use colorview_core::{Constraints, Measurement, Renderable, Size, SwatchError};
use colorview_types::{Color, SwatchConfig};

use crate::checkerboard::checkerboard_pattern;
use crate::render_utils::{clamp_corner_radius, rounded_rectangle};

/// Natural size reported when the host leaves an axis unconstrained
pub const DEFAULT_MINIMUM_SIZE: Size = Size::new(40, 40);

/// Color swatch state plus the routine that draws it
pub struct SwatchRenderer {
    background_color1: Color,
    background_color2: Color,
    background_tile_size: i32,
    corner_radius: f64,
    color: Color,
    measurement: Measurement,
    generation: u64,
    on_invalidate: Option<Box<dyn Fn()>>,
}

impl SwatchRenderer {
    pub fn new() -> Self {
        Self::from_config(&SwatchConfig::default())
    }

    /// Create a renderer from style options
    pub fn from_config(config: &SwatchConfig) -> Self {
        Self {
            background_color1: config.background_color1,
            background_color2: config.background_color2,
            background_tile_size: config.background_pixel_size,
            corner_radius: config.corner_radius,
            color: config.color,
            measurement: Measurement::new(DEFAULT_MINIMUM_SIZE),
            generation: 0,
            on_invalidate: None,
        }
    }

    /// Replace the size reported for unconstrained axes
    pub fn with_minimum_size(mut self, minimum: Size) -> Self {
        self.measurement = Measurement::new(minimum);
        self
    }

    /// Snapshot of the current style options
    pub fn config(&self) -> SwatchConfig {
        SwatchConfig {
            background_color1: self.background_color1,
            background_color2: self.background_color2,
            corner_radius: self.corner_radius,
            background_pixel_size: self.background_tile_size,
            color: self.color,
        }
    }

    /// Apply every option from `config`, requesting a single redraw
    pub fn apply_config(&mut self, config: &SwatchConfig) {
        self.background_color1 = config.background_color1;
        self.background_color2 = config.background_color2;
        self.background_tile_size = config.background_pixel_size;
        self.corner_radius = config.corner_radius;
        self.color = config.color;
        self.invalidate();
    }

    /// Set a callback run after every mutation (hosts queue a redraw here)
    pub fn set_on_invalidate<F: Fn() + 'static>(&mut self, callback: F) {
        self.on_invalidate = Some(Box::new(callback));
    }

    /// Number of mutations so far; changes whenever a redraw is requested
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        if let Some(ref callback) = self.on_invalidate {
            callback();
        }
    }

    pub fn background_color1(&self) -> Color {
        self.background_color1
    }

    pub fn background_color2(&self) -> Color {
        self.background_color2
    }

    pub fn set_background_color1(&mut self, color: Color) {
        self.background_color1 = color;
        self.invalidate();
    }

    pub fn set_background_color2(&mut self, color: Color) {
        self.background_color2 = color;
        self.invalidate();
    }

    pub fn set_background_colors(&mut self, color1: Color, color2: Color) {
        self.background_color1 = color1;
        self.background_color2 = color2;
        self.invalidate();
    }

    pub fn background_tile_size(&self) -> i32 {
        self.background_tile_size
    }

    /// Set the checkerboard square size. Non-positive sizes are stored and
    /// reported as [`SwatchError::InvalidDimension`] at render time.
    pub fn set_background_tile_size(&mut self, tile_size: i32) {
        self.background_tile_size = tile_size;
        self.invalidate();
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Set the corner radius. Out-of-range values are clamped when drawing.
    pub fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius;
        self.invalidate();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.invalidate();
    }

    /// Render into a new surface of `size`
    pub fn render(&self, size: Size) -> Result<ImageSurface, SwatchError> {
        SwatchError::check_dimension("width", size.width)?;
        SwatchError::check_dimension("height", size.height)?;

        let surface = ImageSurface::create(Format::ARgb32, size.width, size.height)?;
        {
            let cr = Context::new(&surface)?;
            self.draw(&cr, size)?;
        }
        surface.flush();
        Ok(surface)
    }

    /// Paint onto an existing context. An empty area draws nothing.
    pub fn draw(&self, cr: &Context, size: Size) -> Result<(), SwatchError> {
        if size.is_empty() {
            log::debug!("Skipping swatch draw for empty area {:?}", size);
            return Ok(());
        }

        let width = size.width as f64;
        let height = size.height as f64;
        let radius = self.effective_corner_radius(width, height);

        let pattern = checkerboard_pattern(
            self.background_color1,
            self.background_color2,
            self.background_tile_size,
            size,
        )?;

        log::debug!(
            "Drawing swatch {}x{} radius {} tile {} color {}",
            size.width,
            size.height,
            radius,
            self.background_tile_size,
            self.color
        );

        cr.save()?;
        let result = (|| -> Result<(), SwatchError> {
            cr.set_operator(Operator::Over);

            cr.set_source(&pattern)?;
            rounded_rectangle(cr, 0.0, 0.0, width, height, radius);
            cr.fill()?;

            self.color.apply_to_cairo(cr);
            rounded_rectangle(cr, 0.0, 0.0, width, height, radius);
            cr.fill()?;
            Ok(())
        })();
        cr.restore()?;
        result
    }
}

impl SwatchRenderer {
    /// Corner radius actually drawn for a `width` x `height` box
    fn effective_corner_radius(&self, width: f64, height: f64) -> f64 {
        let radius = clamp_corner_radius(self.corner_radius, width, height);
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            log::warn!(
                "Corner radius {} is not a non-negative number, drawing square corners",
                self.corner_radius
            );
        } else if radius < self.corner_radius {
            log::warn!(
                "Corner radius {} does not fit a {}x{} box, using {}",
                self.corner_radius,
                width,
                height,
                radius
            );
        }
        radius
    }
}

impl Default for SwatchRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SwatchRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwatchRenderer")
            .field("background_color1", &self.background_color1)
            .field("background_color2", &self.background_color2)
            .field("background_tile_size", &self.background_tile_size)
            .field("corner_radius", &self.corner_radius)
            .field("color", &self.color)
            .field("measurement", &self.measurement)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Renderable for SwatchRenderer {
    fn measure(&mut self, constraints: Constraints) -> Size {
        self.measurement.measure(constraints)
    }

    fn render(&self, size: Size) -> Result<ImageSurface, SwatchError> {
        SwatchRenderer::render(self, size)
    }

    fn draw(&self, cr: &Context, size: Size) -> Result<(), SwatchError> {
        SwatchRenderer::draw(self, cr, size)
    }

    fn is_clickable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_utils::read_pixel;
    use colorview_core::MeasureSpec;
    use std::cell::Cell;
    use std::rc::Rc;

    const LIGHT: Color = Color::from_argb(0xFFCC_CCCC);
    const DARK: Color = Color::from_argb(0xFF88_8888);

    fn renderer(tile_size: i32, radius: f64, color: Color) -> SwatchRenderer {
        SwatchRenderer::from_config(&SwatchConfig {
            background_color1: LIGHT,
            background_color2: DARK,
            corner_radius: radius,
            background_pixel_size: tile_size,
            color,
        })
    }

    fn checker_at(x: i32, y: i32, tile_size: i32) -> Color {
        if (x / tile_size + y / tile_size) % 2 == 0 {
            LIGHT
        } else {
            DARK
        }
    }

    fn assert_close(actual: Color, expected: (f64, f64, f64, f64), tolerance: f64) {
        let (r, g, b, a) = actual.to_rgba_f64();
        for (got, want) in [(r, expected.0), (g, expected.1), (b, expected.2), (a, expected.3)] {
            assert!(
                (got - want).abs() * 255.0 <= tolerance,
                "{} differs from {:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_render_size() {
        let surface = renderer(4, 0.0, Color::TRANSPARENT)
            .render(Size::new(30, 12))
            .unwrap();
        assert_eq!(surface.width(), 30);
        assert_eq!(surface.height(), 12);
        assert_eq!(surface.format(), Format::ARgb32);
    }

    #[test]
    fn test_transparent_color_shows_checkerboard() {
        let mut surface = renderer(4, 0.0, Color::TRANSPARENT)
            .render(Size::new(20, 20))
            .unwrap();
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(read_pixel(&mut surface, x, y).unwrap(), checker_at(x, y, 4));
            }
        }
    }

    #[test]
    fn test_opaque_color_covers_checkerboard() {
        let blue = Color::from_argb(0xFF20_40C0);
        let mut surface = renderer(3, 0.0, blue).render(Size::new(17, 9)).unwrap();
        for y in 0..9 {
            for x in 0..17 {
                assert_eq!(read_pixel(&mut surface, x, y).unwrap(), blue);
            }
        }
    }

    #[test]
    fn test_half_transparent_red_over_gray_checkerboard() {
        let tint = Color::from_argb(0x80FF_0000);
        let mut surface = renderer(4, 0.0, tint).render(Size::new(40, 40)).unwrap();
        let alpha = 128.0 / 255.0;

        for (x, y) in [(0, 0), (4, 0), (0, 4), (5, 5), (39, 0), (0, 39), (39, 39), (21, 14)] {
            let (br, bg, bb, _) = checker_at(x, y, 4).to_rgba_f64();
            let expected = (
                alpha + br * (1.0 - alpha),
                bg * (1.0 - alpha),
                bb * (1.0 - alpha),
                1.0,
            );
            assert_close(read_pixel(&mut surface, x, y).unwrap(), expected, 2.0);
        }

        // Neighbouring squares still differ under the tint
        let a = read_pixel(&mut surface, 1, 1).unwrap();
        let b = read_pixel(&mut surface, 5, 1).unwrap();
        assert_ne!(a, b);
        assert!(a.green() > b.green());
    }

    #[test]
    fn test_rounded_corners_are_left_empty() {
        let mut surface = renderer(4, 10.0, Color::from_argb(0xFF00_FF00))
            .render(Size::new(40, 40))
            .unwrap();

        for (x, y) in [(0, 0), (39, 0), (0, 39), (39, 39)] {
            assert_eq!(read_pixel(&mut surface, x, y).unwrap(), Color::TRANSPARENT);
        }
        for (x, y) in [(20, 20), (20, 0), (0, 20), (39, 20), (20, 39)] {
            assert_eq!(
                read_pixel(&mut surface, x, y).unwrap(),
                Color::from_argb(0xFF00_FF00)
            );
        }
    }

    #[test]
    fn test_rounded_corners_with_transparent_color() {
        let mut surface = renderer(2, 8.0, Color::TRANSPARENT)
            .render(Size::new(32, 32))
            .unwrap();
        assert_eq!(read_pixel(&mut surface, 0, 0).unwrap(), Color::TRANSPARENT);
        assert_eq!(read_pixel(&mut surface, 16, 16).unwrap(), checker_at(16, 16, 2));
        assert_eq!(read_pixel(&mut surface, 17, 16).unwrap(), checker_at(17, 16, 2));
    }

    #[test]
    fn test_negative_radius_draws_square_corners() {
        let red = Color::from_argb(0xFFFF_0000);
        let mut surface = renderer(4, -6.0, red).render(Size::new(12, 12)).unwrap();
        assert_eq!(read_pixel(&mut surface, 0, 0).unwrap(), red);
        assert_eq!(read_pixel(&mut surface, 11, 11).unwrap(), red);
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let green = Color::from_argb(0xFF00_FF00);
        let swatch = renderer(4, 100.0, green);
        assert_eq!(swatch.effective_corner_radius(40.0, 20.0), 10.0);
        assert_eq!(swatch.effective_corner_radius(400.0, 400.0), 100.0);

        let mut surface = swatch.render(Size::new(40, 20)).unwrap();
        assert_eq!(read_pixel(&mut surface, 0, 0).unwrap(), Color::TRANSPARENT);
        assert_eq!(read_pixel(&mut surface, 20, 10).unwrap(), green);
        assert_eq!(read_pixel(&mut surface, 20, 0).unwrap(), green);
    }

    #[test]
    fn test_tile_larger_than_area_renders_first_color() {
        for tile_size in [16_384, 20_000] {
            let mut surface = renderer(tile_size, 0.0, Color::TRANSPARENT)
                .render(Size::new(40, 40))
                .unwrap();
            for y in 0..40 {
                for x in 0..40 {
                    assert_eq!(read_pixel(&mut surface, x, y).unwrap(), LIGHT);
                }
            }
        }
    }

    #[test]
    fn test_latest_background_colors_are_used() {
        let mut swatch = renderer(4, 0.0, Color::TRANSPARENT);
        swatch.set_background_colors(Color::WHITE, Color::BLACK);
        let mut surface = swatch.render(Size::new(8, 8)).unwrap();
        assert_eq!(read_pixel(&mut surface, 0, 0).unwrap(), Color::WHITE);
        assert_eq!(read_pixel(&mut surface, 4, 0).unwrap(), Color::BLACK);

        swatch.set_background_color2(Color::DARK_GRAY);
        let mut surface = swatch.render(Size::new(8, 8)).unwrap();
        assert_eq!(read_pixel(&mut surface, 4, 0).unwrap(), Color::DARK_GRAY);
    }

    #[test]
    fn test_tile_size_change_is_applied() {
        let mut swatch = renderer(4, 0.0, Color::TRANSPARENT);
        swatch.set_background_tile_size(1);
        let mut surface = swatch.render(Size::new(4, 4)).unwrap();
        assert_eq!(read_pixel(&mut surface, 0, 0).unwrap(), LIGHT);
        assert_eq!(read_pixel(&mut surface, 1, 0).unwrap(), DARK);
        assert_eq!(read_pixel(&mut surface, 1, 1).unwrap(), LIGHT);
    }

    #[test]
    fn test_invalid_dimensions() {
        let swatch = renderer(4, 0.0, Color::TRANSPARENT);
        assert!(matches!(
            swatch.render(Size::new(0, 10)),
            Err(SwatchError::InvalidDimension { what: "width", value: 0 })
        ));
        assert!(matches!(
            swatch.render(Size::new(10, -2)),
            Err(SwatchError::InvalidDimension { what: "height", value: -2 })
        ));

        let swatch = renderer(0, 0.0, Color::TRANSPARENT);
        assert!(matches!(
            swatch.render(Size::new(10, 10)),
            Err(SwatchError::InvalidDimension { what: "tile size", value: 0 })
        ));
    }

    #[test]
    fn test_draw_on_empty_area_is_noop() {
        let surface = ImageSurface::create(Format::ARgb32, 4, 4).unwrap();
        let cr = Context::new(&surface).unwrap();
        // Even an invalid tile size is not an error when nothing is drawn
        let swatch = renderer(0, 0.0, Color::BLACK);
        assert!(swatch.draw(&cr, Size::new(0, 4)).is_ok());
    }

    #[test]
    fn test_draw_restores_context_state() {
        let surface = ImageSurface::create(Format::ARgb32, 8, 8).unwrap();
        let cr = Context::new(&surface).unwrap();
        cr.set_operator(Operator::Source);
        renderer(2, 2.0, Color::BLACK)
            .draw(&cr, Size::new(8, 8))
            .unwrap();
        assert_eq!(cr.operator(), Operator::Source);
    }

    #[test]
    fn test_render_releases_intermediates() {
        // read_pixel needs exclusive access, so any leaked context or pattern
        // still referencing the surface would fail here
        let mut surface = SwatchRenderer::new().render(Size::new(16, 16)).unwrap();
        assert!(read_pixel(&mut surface, 8, 8).is_ok());
    }

    #[test]
    fn test_setters_request_redraw() {
        let calls = Rc::new(Cell::new(0));
        let mut swatch = SwatchRenderer::new();
        let calls_clone = calls.clone();
        swatch.set_on_invalidate(move || calls_clone.set(calls_clone.get() + 1));

        swatch.set_color(Color::BLACK);
        swatch.set_background_colors(Color::WHITE, Color::GRAY);
        swatch.set_background_color1(Color::GRAY);
        swatch.set_background_tile_size(2);
        swatch.set_corner_radius(1.5);

        assert_eq!(calls.get(), 5);
        assert_eq!(swatch.generation(), 5);
        assert_eq!(swatch.color(), Color::BLACK);
        assert_eq!(swatch.background_tile_size(), 2);
        assert_eq!(swatch.corner_radius(), 1.5);
    }

    #[test]
    fn test_config_round_trip() {
        let config = SwatchConfig {
            background_color1: Color::WHITE,
            background_color2: Color::BLACK,
            corner_radius: 12.0,
            background_pixel_size: 3,
            color: Color::from_argb(0x40FF_FF00),
        };
        let mut swatch = SwatchRenderer::new();
        swatch.apply_config(&config);
        assert_eq!(swatch.config(), config);
        assert_eq!(swatch.generation(), 1);
        assert_eq!(SwatchRenderer::from_config(&config).config(), config);
    }

    #[test]
    fn test_renderable_measure() {
        let mut swatch = SwatchRenderer::new().with_minimum_size(Size::new(24, 24));
        let boxed: &mut dyn Renderable = &mut swatch;
        assert!(boxed.is_clickable());
        assert_eq!(boxed.measure(Constraints::unspecified()), Size::new(24, 24));
        assert_eq!(
            boxed.measure(Constraints::new(
                MeasureSpec::AtMost(300),
                MeasureSpec::Exactly(50)
            )),
            Size::new(24, 50)
        );
    }
}
