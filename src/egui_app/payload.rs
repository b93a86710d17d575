use std::path::PathBuf;

use egui::{DroppedFile, HoveredFile};

use crate::drop_zone::DragPayload;

/// Drag payload assembled from egui's hovered or dropped file lists.
///
/// egui reports browser-style drags with a MIME type but no path; a drag
/// where no entry carries a path therefore maps to "no filenames
/// representation". Path order follows the input lists.
pub struct FilePayload {
    paths: Vec<PathBuf>,
}

impl FilePayload {
    /// Payload for the hover phase.
    pub fn from_hovered(files: &[HoveredFile]) -> Self {
        Self::collect(files.iter().map(|file| file.path.clone()))
    }

    /// Payload for the drop phase.
    pub fn from_dropped(files: &[DroppedFile]) -> Self {
        Self::collect(files.iter().map(|file| file.path.clone()))
    }

    fn collect(entries: impl Iterator<Item = Option<PathBuf>>) -> Self {
        Self {
            paths: entries.flatten().collect(),
        }
    }
}

impl DragPayload for FilePayload {
    fn file_paths(&self) -> Option<Vec<PathBuf>> {
        if self.paths.is_empty() {
            None
        } else {
            Some(self.paths.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathless_entries_mean_no_filenames_representation() {
        let files = vec![HoveredFile {
            mime: "text/plain".into(),
            ..Default::default()
        }];
        let payload = FilePayload::from_hovered(&files);
        assert!(payload.file_paths().is_none());
    }

    #[test]
    fn paths_survive_in_order() {
        let files = vec![
            DroppedFile {
                path: Some(PathBuf::from("a.txt")),
                ..Default::default()
            },
            DroppedFile {
                path: None,
                ..Default::default()
            },
            DroppedFile {
                path: Some(PathBuf::from("b.png")),
                ..Default::default()
            },
        ];
        let payload = FilePayload::from_dropped(&files);
        assert_eq!(
            payload.file_paths(),
            Some(vec![PathBuf::from("a.txt"), PathBuf::from("b.png")])
        );
    }
}
