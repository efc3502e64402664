use eframe::egui;
use tracing::info;

use crate::app::config::MapConfig;
use crate::app::RhodeIslandApp;
use crate::ui::constants::{APP_INSTRUCTIONS, APP_TITLE};
use crate::ui::logging;
use crate::ui::map_panel::render_map_panel;
use crate::ui::markers::{install_marker_style, MarkerStyle};
use crate::ui::results::render_results;

pub fn run() -> eframe::Result<()> {
    logging::init();
    install_marker_style(MarkerStyle::default());

    let config = MapConfig::default();
    info!(
        lat = config.center.lat,
        lng = config.center.lng,
        zoom = config.zoom,
        "starting map"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(RhodeIslandApp::new(config)))),
    )
}

impl eframe::App for RhodeIslandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(APP_TITLE);
                ui.label(APP_INSTRUCTIONS);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_map_panel(ui, self);
            ui.add_space(8.0);
            render_results(ui, self.overlay());
        });
    }
}
