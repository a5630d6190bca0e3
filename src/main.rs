// main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod figure;
mod morph;
mod muscles;
mod panels;
mod state;

use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1000.0, 640.0]),
        centered: true,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Posture Lab",
        options,
        Box::new(|cc| {
            let app = app::PostureApp::new(cc)?;
            Ok(Box::new(app))
        }),
    )
}
