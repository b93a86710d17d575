//! Entry point for the dropzone demo UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use dropzone::config;
use dropzone::egui_app::DemoApp;
use dropzone::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Falling back to default settings: {err}");
            config::AppConfig::default()
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([640.0, 480.0])
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Dropzone",
        native_options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(config)))),
    )?;
    Ok(())
}
