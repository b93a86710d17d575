//! Capability seam between the drop component and the host toolkit.
//!
//! The component never talks to a concrete pasteboard, view class, or file
//! manager; the host supplies these traits. A concrete egui binding lives in
//! [`crate::egui_app`].

use std::ops::BitOr;
use std::path::{Path, PathBuf};

use super::Frame;

/// Result of a filesystem existence query for a candidate path.
///
/// A path that cannot be queried at all reports `exists: false`, which makes
/// acceptance fall through to the extension check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathStatus {
    pub exists: bool,
    pub is_directory: bool,
}

/// Synchronous filesystem query used while evaluating drag candidates.
pub trait FileStatusProbe {
    /// Report whether `path` exists and whether it is a directory.
    fn status(&self, path: &Path) -> PathStatus;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileStatus;

impl FileStatusProbe for OsFileStatus {
    fn status(&self, path: &Path) -> PathStatus {
        match std::fs::metadata(path) {
            Ok(meta) => PathStatus {
                exists: true,
                is_directory: meta.is_dir(),
            },
            Err(_) => PathStatus::default(),
        }
    }
}

/// Pasteboard-like drag payload, queryable for a filenames-list
/// representation.
pub trait DragPayload {
    /// Candidate paths in source order, or `None` when the payload does not
    /// carry a filenames-list representation at all. The paths are only
    /// meaningful for the duration of the drag callback that supplied them.
    fn file_paths(&self) -> Option<Vec<PathBuf>>;
}

/// Bitmask of operations a drag source permits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragOperations(u32);

impl DragOperations {
    pub const NONE: Self = Self(0);
    pub const COPY: Self = Self(1);
    pub const MOVE: Self = Self(1 << 1);
    pub const LINK: Self = Self(1 << 2);

    /// True when every operation in `other` is permitted by this mask.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for DragOperations {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Verdict returned to the host from the hover-time eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverResponse {
    /// At least one candidate is acceptable and the source permits a copy.
    AcceptCopy,
    /// The drag cannot be accepted in its current form.
    Refuse,
}

/// Abstract droppable surface supplied by the host toolkit.
///
/// The component passes construction geometry through untouched and asks the
/// surface to register itself for file drags; everything else about the view
/// (layout, painting, event plumbing) stays on the host side.
pub trait DropSurface {
    /// Apply the requested geometry to the underlying view.
    fn set_frame(&mut self, frame: Frame);

    /// Register the surface with the platform's drag subsystem so that file
    /// drags are delivered to it.
    fn register_file_drop(&mut self);
}
