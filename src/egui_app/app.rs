use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use eframe::egui;
use tracing::{info, warn};

use crate::config::{self, AppConfig};
use crate::drop_zone::{
    DragOperations, DragView, DragViewOptions, DropSurface, Frame, HoverResponse,
};

use super::payload::FilePayload;

/// Surface binding for the demo.
///
/// egui registers drag-and-drop at the viewport level, so the surface only
/// records the requested geometry and the registration request.
#[derive(Debug, Default)]
pub struct PanelSurface {
    frame: Frame,
    file_drop_registered: bool,
}

impl PanelSurface {
    /// Geometry requested at construction.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Whether the view asked for file-drop registration.
    pub fn file_drop_registered(&self) -> bool {
        self.file_drop_registered
    }
}

impl DropSurface for PanelSurface {
    fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    fn register_file_drop(&mut self) {
        self.file_drop_registered = true;
    }
}

/// Demo application: a single drop area wired to a [`DragView`].
pub struct DemoApp {
    view: DragView<PanelSurface>,
    accepted: Rc<RefCell<Vec<PathBuf>>>,
    hover: Option<HoverResponse>,
    status: String,
    types_input: String,
    accept_folders: bool,
}

impl DemoApp {
    /// Build the demo around persisted settings.
    pub fn new(config: AppConfig) -> Self {
        let types: Vec<String> = config.accept.allowed_extensions().iter().cloned().collect();
        let accept_folders = config.accept.allow_folders();
        let options = DragViewOptions {
            frame: Frame {
                x: 0.0,
                y: 0.0,
                width: 600.0,
                height: 360.0,
            },
            acceptable_types: types.clone(),
            accept_folders,
        };
        let mut view = DragView::create(options, PanelSurface::default());

        let accepted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&accepted);
        view.on_file(move |path| sink.borrow_mut().push(path.to_path_buf()));
        view.on_files(|paths| info!(count = paths.len(), "accepted file batch"));

        Self {
            view,
            accepted,
            hover: None,
            status: String::new(),
            types_input: types.join(" "),
            accept_folders,
        }
    }

    fn consume_drag_input(&mut self, ctx: &egui::Context) {
        let hovered = ctx.input(|i| i.raw.hovered_files.clone());
        self.hover = if hovered.is_empty() {
            None
        } else {
            let payload = FilePayload::from_hovered(&hovered);
            Some(self.view.evaluate_entry(&payload, DragOperations::COPY))
        };

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let payload = FilePayload::from_dropped(&dropped);
        let before = self.accepted.borrow().len();
        if self.view.accept_drop(&payload) {
            let gained = self.accepted.borrow().len() - before;
            self.status = if gained == 0 {
                "Nothing matched the accepted types".to_owned()
            } else {
                format!("Accepted {gained} file(s)")
            };
        } else {
            self.status = "That drop carried no file paths".to_owned();
        }
    }

    fn apply_rule_edits(&mut self) {
        let types: Vec<String> = self
            .types_input
            .split_whitespace()
            .map(|t| t.trim_start_matches('.').to_owned())
            .filter(|t| !t.is_empty())
            .collect();
        self.view.set_acceptable_types(types);
        self.view.set_accept_folders(self.accept_folders);
        let config = AppConfig {
            accept: self.view.rules().clone(),
        };
        if let Err(err) = config::save(&config) {
            warn!("Failed to persist settings: {err}");
            self.status = "Settings apply to this session only".to_owned();
        }
    }

    fn render_rules_editor(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Accepted extensions:");
            let edited = ui
                .add(
                    egui::TextEdit::singleline(&mut self.types_input)
                        .hint_text("e.g. txt png wav"),
                )
                .lost_focus();
            let toggled = ui
                .checkbox(&mut self.accept_folders, "Accept folders")
                .changed();
            if edited || toggled {
                self.apply_rule_edits();
            }
        });
    }

    fn render_drop_area(&mut self, ui: &mut egui::Ui) {
        let tint = match self.hover {
            Some(HoverResponse::AcceptCopy) => ui.visuals().selection.stroke.color,
            Some(HoverResponse::Refuse) => ui.visuals().error_fg_color,
            None => ui.visuals().widgets.noninteractive.bg_stroke.color,
        };
        let frame = self.view.surface().frame();
        egui::Frame::group(ui.style())
            .stroke(egui::Stroke::new(2.0, tint))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(frame.width, frame.height.min(160.0)));
                ui.centered_and_justified(|ui| {
                    ui.label("Drop files here");
                });
            });
    }

    fn render_accepted_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Accepted files");
            if ui.button("Clear").clicked() {
                self.accepted.borrow_mut().clear();
            }
        });
        egui::ScrollArea::vertical().show(ui, |ui| {
            for path in self.accepted.borrow().iter() {
                ui.monospace(path.display().to_string());
            }
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.consume_drag_input(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_rules_editor(ui);
            ui.add_space(8.0);
            self.render_drop_area(ui);
            if !self.status.is_empty() {
                ui.label(&self.status);
            }
            ui.add_space(8.0);
            self.render_accepted_list(ui);
        });
        ctx.request_repaint();
    }
}
