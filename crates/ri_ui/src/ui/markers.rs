//! Marker icon style and drawing.
//!
//! The style is process-wide and installed once at startup, before the app
//! is constructed. Drawing code only ever reads it.

use std::sync::OnceLock;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Stroke};
use tracing::warn;

static MARKER_STYLE: OnceLock<MarkerStyle> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub fill: Color32,
    pub outline: Color32,
    pub shadow: Color32,
    pub label: Color32,
    /// Radius of the round head of the pin.
    pub head_radius: f32,
    /// Distance from the tip to the center of the head.
    pub height: f32,
    /// Draw the 1-based selection order inside the head.
    pub show_order: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: Color32::from_rgb(42, 129, 203),
            outline: Color32::from_rgb(25, 78, 122),
            shadow: Color32::from_black_alpha(90),
            label: Color32::WHITE,
            head_radius: 10.0,
            height: 24.0,
            show_order: true,
        }
    }
}

/// Install the marker style. Returns `false` if one was already installed.
pub fn install_marker_style(style: MarkerStyle) -> bool {
    let installed = MARKER_STYLE.set(style).is_ok();
    if !installed {
        warn!("marker style already installed, keeping the first one");
    }
    installed
}

pub fn marker_style() -> &'static MarkerStyle {
    MARKER_STYLE.get_or_init(MarkerStyle::default)
}

/// Draw a pin whose tip touches `tip`.
pub fn draw_marker(painter: &egui::Painter, tip: Pos2, order: usize, style: &MarkerStyle) {
    let head = tip - egui::vec2(0.0, style.height);
    let stroke = Stroke::new(1.5, style.outline);

    painter.circle_filled(tip + egui::vec2(3.0, -1.0), style.head_radius * 0.4, style.shadow);

    let half_width = style.head_radius * 0.8;
    let shoulder = head + egui::vec2(0.0, style.head_radius * 0.5);
    painter.add(egui::Shape::convex_polygon(
        vec![
            shoulder - egui::vec2(half_width, 0.0),
            shoulder + egui::vec2(half_width, 0.0),
            tip,
        ],
        style.fill,
        stroke,
    ));
    painter.circle(head, style.head_radius, style.fill, stroke);

    if style.show_order {
        painter.text(
            head,
            Align2::CENTER_CENTER,
            order.to_string(),
            FontId::proportional(style.head_radius * 1.2),
            style.label,
        );
    } else {
        painter.circle_filled(head, style.head_radius * 0.35, style.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_is_installed_once() {
        let custom = MarkerStyle {
            show_order: false,
            ..MarkerStyle::default()
        };
        let first = install_marker_style(custom.clone());
        let second = install_marker_style(MarkerStyle::default());
        assert!(!second);
        if first {
            assert_eq!(marker_style(), &custom);
        }
        assert!(std::ptr::eq(marker_style(), marker_style()));
    }

    #[test]
    fn default_pin_stands_above_its_tip() {
        let style = MarkerStyle::default();
        assert!(style.height > style.head_radius);
    }
}
