//! GTK host for the swatch renderer.
//!
//! Wraps a `DrawingArea`: sizing goes through the renderer's measurement,
//! painting through `SwatchRenderer::draw`, and every setter queues a redraw.

use colorview_core::{Constraints, Renderable, Size};
use colorview_render::SwatchRenderer;
use colorview_types::{Color, SwatchConfig};
use gtk4::prelude::*;
use gtk4::{DrawingArea, GestureClick};
use std::cell::RefCell;
use std::rc::Rc;

/// A clickable color swatch drawn over a checkerboard
pub struct ColorViewWidget {
    drawing_area: DrawingArea,
    renderer: Rc<RefCell<SwatchRenderer>>,
    on_click: Rc<RefCell<Option<Box<dyn Fn(Color)>>>>,
}

impl ColorViewWidget {
    /// Create a widget from style options.
    pub fn new(config: &SwatchConfig) -> Self {
        let renderer = Rc::new(RefCell::new(SwatchRenderer::from_config(config)));
        let on_click: Rc<RefCell<Option<Box<dyn Fn(Color)>>>> = Rc::new(RefCell::new(None));

        let drawing_area = DrawingArea::new();
        let natural = renderer.borrow_mut().measure(Constraints::unspecified());
        drawing_area.set_size_request(natural.width, natural.height);

        // Redraw requests hold a weak reference so the renderer does not keep
        // the widget alive
        let weak_area = drawing_area.downgrade();
        renderer.borrow_mut().set_on_invalidate(move || {
            if let Some(area) = weak_area.upgrade() {
                area.queue_draw();
            }
        });

        // GTK hands out exact allocations, so the measured size tracks them
        let renderer_for_resize = renderer.clone();
        drawing_area.connect_resize(move |_, width, height| {
            renderer_for_resize
                .borrow_mut()
                .measure(Constraints::exactly(width, height));
        });

        let renderer_for_draw = renderer.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            if let Err(e) = renderer_for_draw.borrow().draw(cr, Size::new(width, height)) {
                log::warn!("Failed to draw color swatch: {}", e);
            }
        });

        if renderer.borrow().is_clickable() {
            let gesture = GestureClick::new();
            let renderer_for_click = renderer.clone();
            let on_click_clone = on_click.clone();
            gesture.connect_released(move |_, _, _, _| {
                let color = renderer_for_click.borrow().color();
                if let Some(ref callback) = *on_click_clone.borrow() {
                    callback(color);
                }
            });
            drawing_area.add_controller(gesture);
        }

        Self {
            drawing_area,
            renderer,
            on_click,
        }
    }

    /// Get the drawing area (for adding to layouts).
    pub fn widget(&self) -> &DrawingArea {
        &self.drawing_area
    }

    pub fn color(&self) -> Color {
        self.renderer.borrow().color()
    }

    pub fn set_color(&self, color: Color) {
        self.renderer.borrow_mut().set_color(color);
    }

    /// Set the color from a GTK RGBA value
    pub fn set_gdk_color(&self, rgba: &gdk4::RGBA) {
        self.set_color(Color::from_gdk_rgba(rgba));
    }

    pub fn set_background_colors(&self, color1: Color, color2: Color) {
        self.renderer
            .borrow_mut()
            .set_background_colors(color1, color2);
    }

    pub fn set_background_tile_size(&self, tile_size: i32) {
        self.renderer.borrow_mut().set_background_tile_size(tile_size);
    }

    pub fn set_corner_radius(&self, radius: f64) {
        self.renderer.borrow_mut().set_corner_radius(radius);
    }

    pub fn config(&self) -> SwatchConfig {
        self.renderer.borrow().config()
    }

    /// Set a callback to be called when the swatch is clicked.
    pub fn set_on_click<F: Fn(Color) + 'static>(&self, callback: F) {
        *self.on_click.borrow_mut() = Some(Box::new(callback));
    }
}
