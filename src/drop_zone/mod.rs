//! Drop-acceptance component: rules, observers, and the two-phase drag
//! session protocol, behind host capability traits.

pub mod host;
pub mod observers;
pub mod rules;
pub mod session;

pub use host::{
    DragOperations, DragPayload, DropSurface, FileStatusProbe, HoverResponse, OsFileStatus,
    PathStatus,
};
pub use observers::{BatchCallback, DropObservers, FileCallback};
pub use rules::AcceptRules;
pub use session::{DragView, DragViewOptions};

/// View geometry passed through to the host surface, left uninterpreted by
/// the component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
