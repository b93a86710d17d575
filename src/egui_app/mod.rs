//! egui binding for the drop component plus the demo application.

mod app;
mod payload;

pub use app::{DemoApp, PanelSurface};
pub use payload::FilePayload;
