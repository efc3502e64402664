use eframe::egui::{self, Color32, Rect, Sense};
use tracing::debug;

use crate::app::RhodeIslandApp;
use crate::ui::constants::{
    ATTRIBUTION_BACKGROUND, MAP_BORDER, TILE_FAILED, TILE_PLACEHOLDER, ZOOM_BUTTON_SIZE,
};
use crate::ui::markers::{draw_marker, marker_style};

pub fn render_map_panel(ui: &mut egui::Ui, app: &mut RhodeIslandApp) {
    app.map_tiles.drain_results(ui.ctx());

    let map_size = egui::vec2(ui.available_width(), app.config.map_height);
    let (map_rect, response) = ui.allocate_exact_size(map_size, Sense::click_and_drag());

    handle_map_input(ui, app, map_rect, &response);

    let painter = ui.painter_at(map_rect);
    painter.rect_filled(map_rect, 0.0, TILE_PLACEHOLDER);

    let tiles = app.viewport.visible_tiles(map_rect);
    app.map_tiles
        .request_missing_tiles(ui.ctx(), tiles.iter().map(|tile| tile.key));
    let full_uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    for tile in &tiles {
        if let Some(texture) = app.map_tiles.texture(&tile.key) {
            painter.image(texture.id(), tile.rect, full_uv, Color32::WHITE);
        } else if app.map_tiles.failed(&tile.key) {
            painter.rect_filled(tile.rect, 0.0, TILE_FAILED);
        }
    }

    let style = marker_style();
    for (index, location) in app.overlay().markers().iter().enumerate() {
        let tip = app.viewport.location_to_screen(*location, map_rect);
        draw_marker(&painter, tip, index + 1, style);
    }

    painter.rect_stroke(
        map_rect,
        0.0,
        egui::Stroke::new(1.0, MAP_BORDER),
        egui::StrokeKind::Middle,
    );

    render_zoom_buttons(ui, app, map_rect);
    render_attribution(ui, app, map_rect);
}

fn handle_map_input(
    ui: &egui::Ui,
    app: &mut RhodeIslandApp,
    map_rect: Rect,
    response: &egui::Response,
) {
    if response.dragged() {
        app.viewport.pan_by(response.drag_delta());
    }

    if response.hovered() {
        if let Some(pointer) = response.hover_pos() {
            let (scroll, pinch) = ui.input(|input| (input.raw_scroll_delta.y, input.zoom_delta()));
            // Ctrl+scroll also arrives as a zoom delta; use only one of the two.
            let zoomed = if pinch != 1.0 {
                app.viewport.pinch_zoom(pointer, map_rect, pinch)
            } else {
                app.viewport.scroll_zoom(pointer, map_rect, scroll)
            };
            if zoomed {
                let center = app.viewport.center();
                debug!(
                    zoom = app.viewport.zoom(),
                    lat = center.lat,
                    lng = center.lng,
                    "viewport zoomed"
                );
            }
        }
    }

    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let location = app.viewport.screen_to_location(pointer, map_rect);
            app.handle_map_click(location);
        }
    }
}

fn render_zoom_buttons(ui: &mut egui::Ui, app: &mut RhodeIslandApp, map_rect: Rect) {
    let size = egui::vec2(ZOOM_BUTTON_SIZE, ZOOM_BUTTON_SIZE);
    let zoom_in = Rect::from_min_size(map_rect.left_top() + egui::vec2(10.0, 10.0), size);
    let zoom_out = zoom_in.translate(egui::vec2(0.0, ZOOM_BUTTON_SIZE + 2.0));

    if ui.put(zoom_in, egui::Button::new("+")).clicked() {
        app.viewport.zoom_at(map_rect.center(), map_rect, 1);
    }
    if ui.put(zoom_out, egui::Button::new("-")).clicked() {
        app.viewport.zoom_at(map_rect.center(), map_rect, -1);
    }
}

fn render_attribution(ui: &mut egui::Ui, app: &RhodeIslandApp, map_rect: Rect) {
    let size = egui::vec2(190.0, 18.0);
    let rect = Rect::from_min_size(map_rect.right_bottom() - size, size);
    ui.painter().rect_filled(rect, 0.0, ATTRIBUTION_BACKGROUND);
    ui.put(
        rect,
        egui::Hyperlink::from_label_and_url(
            egui::RichText::new(&app.config.attribution_text).small(),
            &app.config.attribution_url,
        ),
    );
}
