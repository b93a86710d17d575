use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Frame;
use super::host::{
    DragOperations, DragPayload, DropSurface, FileStatusProbe, HoverResponse, OsFileStatus,
};
use super::observers::DropObservers;
use super::rules::AcceptRules;

/// Construction options for a [`DragView`].
#[derive(Debug, Clone, Default)]
pub struct DragViewOptions {
    /// Geometry handed to the host surface untouched.
    pub frame: Frame,
    /// Extensions accepted for file candidates.
    pub acceptable_types: Vec<String>,
    /// Accept directory candidates regardless of extension.
    pub accept_folders: bool,
}

/// Drop-accepting view: filters dragged paths and notifies observers.
///
/// The host toolkit drives the two phases of each drag gesture. While the
/// pointer hovers the surface it may call [`DragView::evaluate_entry`] any
/// number of times; the check is advisory and side-effect free. On drop it
/// calls [`DragView::accept_drop`], which filters the candidates and fires
/// the registered observers. Candidates are re-extracted and rules re-read on
/// every call, so there is no per-gesture state to reset.
///
/// Both entry points expect to run synchronously on the thread that delivers
/// drag events; rules and observers must be mutated from that same thread, as
/// the view adds no synchronization of its own.
pub struct DragView<S> {
    surface: S,
    rules: AcceptRules,
    observers: DropObservers,
    probe: Box<dyn FileStatusProbe>,
}

impl<S: DropSurface> DragView<S> {
    /// Build a view over `surface`, passing the frame through and registering
    /// the surface for file drags.
    pub fn create(options: DragViewOptions, surface: S) -> Self {
        Self::with_probe(options, surface, Box::new(OsFileStatus))
    }

    /// Like [`DragView::create`], with a caller-supplied filesystem probe.
    pub fn with_probe(
        options: DragViewOptions,
        mut surface: S,
        probe: Box<dyn FileStatusProbe>,
    ) -> Self {
        surface.set_frame(options.frame);
        surface.register_file_drop();
        Self {
            surface,
            rules: AcceptRules::new(options.acceptable_types, options.accept_folders),
            observers: DropObservers::default(),
            probe,
        }
    }

    /// Current acceptance rules.
    pub fn rules(&self) -> &AcceptRules {
        &self.rules
    }

    /// Replace the full extension allow-list.
    pub fn set_acceptable_types<I, T>(&mut self, types: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.rules.set_allowed_extensions(types);
    }

    /// Replace the folder-allowance flag.
    pub fn set_accept_folders(&mut self, accept: bool) {
        self.rules.set_allow_folders(accept);
    }

    /// Borrow the host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Borrow the host surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Register the per-file callback, replacing any previous registration.
    pub fn on_file(&mut self, callback: impl FnMut(&Path) + 'static) {
        self.observers.set_on_file(Some(Box::new(callback)));
    }

    /// Remove the per-file callback.
    pub fn clear_on_file(&mut self) {
        self.observers.set_on_file(None);
    }

    /// Register the batch callback, replacing any previous registration.
    pub fn on_files(&mut self, callback: impl FnMut(&[PathBuf]) + 'static) {
        self.observers.set_on_files(Some(Box::new(callback)));
    }

    /// Remove the batch callback.
    pub fn clear_on_files(&mut self) {
        self.observers.set_on_files(None);
    }

    /// Hover-time eligibility check.
    ///
    /// Scans the candidates in source order and stops at the first acceptable
    /// one. Answers [`HoverResponse::AcceptCopy`] only when such a candidate
    /// exists and `source_mask` permits a copy. The check never fires
    /// observers and may be repeated by the host at will.
    pub fn evaluate_entry(
        &self,
        payload: &dyn DragPayload,
        source_mask: DragOperations,
    ) -> HoverResponse {
        let Some(candidates) = payload.file_paths() else {
            return HoverResponse::Refuse;
        };
        let feasible = candidates
            .iter()
            .any(|path| self.rules.accepts(path, self.probe.as_ref()));
        if feasible && source_mask.contains(DragOperations::COPY) {
            debug!("drag entered: accepting as copy");
            HoverResponse::AcceptCopy
        } else {
            debug!(candidates = candidates.len(), "drag entered: refused");
            HoverResponse::Refuse
        }
    }

    /// Drop-time filtering and dispatch.
    ///
    /// Filters every candidate, preserving source order; fires the per-file
    /// callback for each accepted path, then the batch callback once with the
    /// accepted subset when it is non-empty. Returns `true` whenever the
    /// payload carried a filenames representation, even if nothing was
    /// accepted; `false` means the payload type itself was unusable and no
    /// observer fired.
    pub fn accept_drop(&mut self, payload: &dyn DragPayload) -> bool {
        let Some(candidates) = payload.file_paths() else {
            debug!("drop without a filenames representation; ignored");
            return false;
        };
        let mut accepted = Vec::new();
        for path in candidates {
            if self.rules.accepts(&path, self.probe.as_ref()) {
                self.observers.notify_file(&path);
                accepted.push(path);
            }
        }
        if !accepted.is_empty() {
            self.observers.notify_batch(&accepted);
        }
        info!(accepted = accepted.len(), "drop handled");
        true
    }
}
