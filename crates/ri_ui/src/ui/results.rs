use eframe::egui;

use crate::app::overlay::MapOverlay;

/// Result slot under the map; empty unless two points are held.
pub fn render_results(ui: &mut egui::Ui, overlay: &MapOverlay) {
    ui.vertical_centered(|ui| {
        if let Some(text) = overlay.result_text() {
            ui.heading(text);
        }
    });
}
