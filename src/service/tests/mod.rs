use std::cell::RefCell;
use std::io;

use crate::store::external::ExternalFileStore;


/// an external store that refuses every call
struct BrokenStore;

impl ExternalFileStore for BrokenStore {
    fn write(&self, _path: &str, _content: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    fn read(&self, _path: &str) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"))
    }
}

/// an in-memory external store that remembers what was written to it
#[derive(Default)]
struct RecordingStore {
    writes: RefCell<Vec<(String, String)>>,
}

impl ExternalFileStore for RecordingStore {
    fn write(&self, path: &str, content: &str) -> io::Result<()> {
        self.writes
            .borrow_mut()
            .push((path.to_string(), content.to_string()));
        Ok(())
    }

    fn read(&self, path: &str) -> io::Result<Option<String>> {
        Ok(self
            .writes
            .borrow()
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone()))
    }
}
