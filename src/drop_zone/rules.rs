use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::host::FileStatusProbe;

/// Acceptance rule set for dragged candidates: an extension allow-list plus
/// an optional folder bypass.
///
/// Extensions are stored exactly as provided (no leading dot, case
/// preserved) and matched case-sensitively. The rules are mutable at any
/// time; the last write wins.
///
/// Config keys (TOML): `allowed_extensions`, `allow_folders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptRules {
    #[serde(default)]
    allowed_extensions: BTreeSet<String>,
    #[serde(default)]
    allow_folders: bool,
}

impl AcceptRules {
    /// Build rules from an extension list and the folder-allowance flag.
    pub fn new<I, T>(allowed_extensions: I, allow_folders: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            allowed_extensions: allowed_extensions.into_iter().map(Into::into).collect(),
            allow_folders,
        }
    }

    /// Extensions accepted for file candidates.
    pub fn allowed_extensions(&self) -> &BTreeSet<String> {
        &self.allowed_extensions
    }

    /// Whether directory candidates are accepted unconditionally.
    pub fn allow_folders(&self) -> bool {
        self.allow_folders
    }

    /// Replace the full extension allow-list.
    pub fn set_allowed_extensions<I, T>(&mut self, allowed_extensions: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_extensions = allowed_extensions.into_iter().map(Into::into).collect();
    }

    /// Replace the folder-allowance flag.
    pub fn set_allow_folders(&mut self, allow_folders: bool) {
        self.allow_folders = allow_folders;
    }

    /// Pure acceptance predicate.
    ///
    /// A directory is accepted unconditionally when `allow_folders` is set;
    /// every other candidate is accepted iff the extension of its final path
    /// segment is in the allow-list. A candidate without an extension and
    /// without the folder bypass is rejected.
    pub fn is_acceptable(&self, path: &Path, is_directory: bool) -> bool {
        if self.allow_folders && is_directory {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.allowed_extensions.contains(ext))
    }

    /// Evaluation-time form of the predicate.
    ///
    /// Directory-ness is queried from the probe only when the folder bypass
    /// is enabled; drag payloads carry paths, not metadata, and the answer is
    /// never cached.
    pub(crate) fn accepts(&self, path: &Path, probe: &dyn FileStatusProbe) -> bool {
        let is_directory = self.allow_folders && probe.status(path).is_directory;
        self.is_acceptable(path, is_directory)
    }
}
