//! Drag-and-drop acceptance filtering for desktop drop targets.
/// Application directory helpers.
pub mod app_dirs;
/// Persisted demo settings.
pub mod config;
/// Core drop-acceptance component.
pub mod drop_zone;
/// egui binding and demo application.
pub mod egui_app;
/// Logging setup.
pub mod logging;
