//! End-to-end drop-session tests over a real temporary filesystem, so the
//! OS-backed directory probe is exercised for real.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use dropzone::drop_zone::{
    DragOperations, DragPayload, DragView, DragViewOptions, DropSurface, Frame, HoverResponse,
};
use tempfile::TempDir;

struct TestSurface;

impl DropSurface for TestSurface {
    fn set_frame(&mut self, _frame: Frame) {}

    fn register_file_drop(&mut self) {}
}

struct PathListPayload(Vec<PathBuf>);

impl DragPayload for PathListPayload {
    fn file_paths(&self) -> Option<Vec<PathBuf>> {
        Some(self.0.clone())
    }
}

fn scratch_with(entries: &[(&str, bool)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, is_dir) in entries {
        let path = dir.path().join(name);
        if *is_dir {
            fs::create_dir(&path).unwrap();
        } else {
            fs::write(&path, b"content").unwrap();
        }
    }
    dir
}

fn view_with(types: &[&str], accept_folders: bool) -> DragView<TestSurface> {
    DragView::create(
        DragViewOptions {
            acceptable_types: types.iter().map(|t| t.to_string()).collect(),
            accept_folders,
            ..DragViewOptions::default()
        },
        TestSurface,
    )
}

fn collect_accepted(view: &mut DragView<TestSurface>) -> Rc<RefCell<Vec<PathBuf>>> {
    let accepted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&accepted);
    view.on_file(move |path: &Path| sink.borrow_mut().push(path.to_path_buf()));
    accepted
}

#[test]
fn real_directory_bypasses_extension_check_when_folders_allowed() {
    let dir = scratch_with(&[("samples", true), ("photo.png", false)]);
    let mut view = view_with(&["txt"], true);
    let accepted = collect_accepted(&mut view);

    let payload = PathListPayload(vec![dir.path().join("samples"), dir.path().join("photo.png")]);
    assert_eq!(
        view.evaluate_entry(&payload, DragOperations::COPY),
        HoverResponse::AcceptCopy
    );
    assert!(view.accept_drop(&payload));
    assert_eq!(*accepted.borrow(), vec![dir.path().join("samples")]);
}

#[test]
fn real_directory_follows_extension_rule_when_folders_disallowed() {
    let dir = scratch_with(&[("bundle.txt", true), ("samples", true)]);
    let mut view = view_with(&["txt"], false);
    let accepted = collect_accepted(&mut view);

    let payload = PathListPayload(vec![dir.path().join("samples"), dir.path().join("bundle.txt")]);
    assert!(view.accept_drop(&payload));
    assert_eq!(*accepted.borrow(), vec![dir.path().join("bundle.txt")]);
}

#[test]
fn per_file_order_matches_source_then_batch_fires_once() {
    let dir = scratch_with(&[("a.txt", false), ("b.png", false), ("c.txt", false)]);
    let mut view = view_with(&["txt"], false);

    let events = Rc::new(RefCell::new(Vec::new()));
    let file_sink = Rc::clone(&events);
    view.on_file(move |path: &Path| {
        file_sink.borrow_mut().push(vec![path.to_path_buf()]);
    });
    let batch_sink = Rc::clone(&events);
    view.on_files(move |paths: &[PathBuf]| {
        batch_sink.borrow_mut().push(paths.to_vec());
    });

    let payload = PathListPayload(vec![
        dir.path().join("a.txt"),
        dir.path().join("b.png"),
        dir.path().join("c.txt"),
    ]);
    assert!(view.accept_drop(&payload));

    let a = dir.path().join("a.txt");
    let c = dir.path().join("c.txt");
    assert_eq!(
        *events.borrow(),
        vec![vec![a.clone()], vec![c.clone()], vec![a, c]]
    );
}

#[test]
fn drop_with_no_matches_reports_handled_but_stays_silent() {
    let dir = scratch_with(&[("photo.png", false)]);
    let mut view = view_with(&["txt"], false);
    let accepted = collect_accepted(&mut view);
    let batches = Rc::new(RefCell::new(0));
    let batch_sink = Rc::clone(&batches);
    view.on_files(move |_: &[PathBuf]| *batch_sink.borrow_mut() += 1);

    let payload = PathListPayload(vec![dir.path().join("photo.png")]);
    assert!(view.accept_drop(&payload));
    assert!(accepted.borrow().is_empty());
    assert_eq!(*batches.borrow(), 0);
}

#[test]
fn retyping_rules_between_hover_and_drop_changes_the_outcome() {
    let dir = scratch_with(&[("photo.png", false)]);
    let mut view = view_with(&["txt"], false);
    let accepted = collect_accepted(&mut view);

    let payload = PathListPayload(vec![dir.path().join("photo.png")]);
    assert_eq!(
        view.evaluate_entry(&payload, DragOperations::COPY),
        HoverResponse::Refuse
    );
    view.set_acceptable_types(["png"]);
    assert!(view.accept_drop(&payload));
    assert_eq!(*accepted.borrow(), vec![dir.path().join("photo.png")]);
}
