//! UI components

mod color_view_widget;

pub use color_view_widget::ColorViewWidget;
