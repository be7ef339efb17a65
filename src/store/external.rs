use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// where uploaded file bytes live, outside of the database
pub trait ExternalFileStore {
    fn write(&self, path: &str, content: &str) -> std::io::Result<()>;
    /// `Ok(None)` if nothing is stored at `path`
    fn read(&self, path: &str) -> std::io::Result<Option<String>>;
    /// like [`read`](Self::read), but for uploads that aren't text
    fn read_bytes(&self, path: &str) -> std::io::Result<Option<Vec<u8>>> {
        Ok(self.read(path)?.map(String::into_bytes))
    }
}

/// an [`ExternalFileStore`] backed by a directory on disk
pub struct DiskFileStore {
    base: PathBuf,
}

#[cfg(not(test))]
fn upload_dir() -> String {
    crate::config::NOTE_SERVER_CONFIG.uploads.directory.clone()
}

#[cfg(test)]
pub fn upload_dir() -> String {
    let thread_name = crate::test::current_thread_name();
    format!("./{thread_name}_uploads")
}

impl DiskFileStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// a store rooted at the configured upload directory
    pub fn from_config() -> Self {
        Self::new(upload_dir())
    }

    /// relative paths are resolved against the upload directory, absolute paths are used as-is
    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }
}

impl ExternalFileStore for DiskFileStore {
    fn write(&self, path: &str, content: &str) -> std::io::Result<()> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)
    }

    fn read(&self, path: &str) -> std::io::Result<Option<String>> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read_bytes(&self, path: &str) -> std::io::Result<Option<Vec<u8>>> {
        match fs::read(self.resolve(path)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{cleanup, init_db};

    #[test]
    fn write_then_read() {
        init_db();
        let store = DiskFileStore::from_config();
        store.write("notes/a.md", "# hello").unwrap();
        assert_eq!(Some("# hello".to_string()), store.read("notes/a.md").unwrap());
        cleanup();
    }

    #[test]
    fn read_bytes_of_binary_file() {
        init_db();
        let store = DiskFileStore::from_config();
        fs::create_dir_all(upload_dir()).unwrap();
        fs::write(format!("{}/image.png", upload_dir()), [0x89, 0x50, 0xff, 0x00]).unwrap();
        assert_eq!(Some(vec![0x89, 0x50, 0xff, 0x00]), store.read_bytes("image.png").unwrap());
        assert_eq!(None, store.read_bytes("nope.png").unwrap());
        cleanup();
    }

    #[test]
    fn read_missing_file_is_none() {
        init_db();
        let store = DiskFileStore::from_config();
        assert_eq!(None, store.read("nope.md").unwrap());
        cleanup();
    }
}
