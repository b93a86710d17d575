use std::path::{Path, PathBuf};

/// Callback invoked once per accepted file.
pub type FileCallback = Box<dyn FnMut(&Path)>;

/// Callback invoked once per drop with every accepted file, in source order.
pub type BatchCallback = Box<dyn FnMut(&[PathBuf])>;

/// Single-slot observer registry for drop notifications.
///
/// Each setter replaces the prior registration outright; at most one callback
/// is active per slot and there is no fan-out. Callbacks run synchronously on
/// the thread that delivers the drop event, all per-file invocations strictly
/// before the single batch invocation. A panic inside a callback is not
/// caught here; it propagates to the host's event dispatch.
#[derive(Default)]
pub struct DropObservers {
    on_file: Option<FileCallback>,
    on_files: Option<BatchCallback>,
}

impl DropObservers {
    /// Install or clear the per-file callback, discarding any previous one.
    pub fn set_on_file(&mut self, callback: Option<FileCallback>) {
        self.on_file = callback;
    }

    /// Install or clear the batch callback, discarding any previous one.
    pub fn set_on_files(&mut self, callback: Option<BatchCallback>) {
        self.on_files = callback;
    }

    pub(crate) fn notify_file(&mut self, path: &Path) {
        if let Some(callback) = self.on_file.as_mut() {
            callback(path);
        }
    }

    pub(crate) fn notify_batch(&mut self, paths: &[PathBuf]) {
        if let Some(callback) = self.on_files.as_mut() {
            callback(paths);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn empty_slots_ignore_notifications() {
        let mut observers = DropObservers::default();
        observers.notify_file(Path::new("a.txt"));
        observers.notify_batch(&[PathBuf::from("a.txt")]);
    }

    #[test]
    fn registering_replaces_the_previous_callback() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = DropObservers::default();

        let first = Rc::clone(&log);
        observers.set_on_file(Some(Box::new(move |_| first.borrow_mut().push("first"))));
        let second = Rc::clone(&log);
        observers.set_on_file(Some(Box::new(move |_| second.borrow_mut().push("second"))));

        observers.notify_file(Path::new("a.txt"));
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn clearing_a_slot_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = DropObservers::default();
        let sink = Rc::clone(&count);
        observers.set_on_files(Some(Box::new(move |_| *sink.borrow_mut() += 1)));
        observers.set_on_files(None);
        observers.notify_batch(&[PathBuf::from("a.txt")]);
        assert_eq!(*count.borrow(), 0);
    }
}
