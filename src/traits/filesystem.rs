use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::path::PathBuf;
#[cfg(test)]
use std::sync::{Arc, RwLock};

/// What a path points at, as reported by [`FileSystem::stat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    /// Sockets, FIFOs, devices
    Other,
}

impl FileKind {
    pub fn is_file(&self) -> bool {
        matches!(self, FileKind::File)
    }
}

/// Trait for filesystem operations to enable testing with mocks
///
/// Errors are plain `io::Error`s so callers can classify them by kind.
pub trait FileSystem: Send + Sync {
    /// Inspect a path, following symlinks
    fn stat(&self, path: &Path) -> io::Result<FileKind>;

    /// Read file contents as UTF-8 string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Append to a file, creating it if needed
    fn append(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Real filesystem implementation using std::fs
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        let metadata = std::fs::metadata(path)?;

        Ok(if metadata.is_file() {
            FileKind::File
        } else if metadata.is_dir() {
            FileKind::Directory
        } else {
            FileKind::Other
        })
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(contents.as_bytes())
    }
}

/// Mock filesystem implementation for testing (in-memory)
#[cfg(test)]
pub struct MockFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    directories: Arc<RwLock<HashMap<PathBuf, ()>>>,
    failures: Arc<RwLock<HashMap<PathBuf, io::ErrorKind>>>,
}

#[cfg(test)]
impl MockFileSystem {
    /// Create new empty mock filesystem
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
            directories: Arc::new(RwLock::new(HashMap::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add a file with contents
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), contents.to_string());
        self
    }

    /// Add an empty directory
    pub fn with_directory(self, path: impl Into<PathBuf>) -> Self {
        self.directories.write().unwrap().insert(path.into(), ());
        self
    }

    /// Make every operation on `path` fail with the given error kind
    pub fn with_failure(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.write().unwrap().insert(path.into(), kind);
        self
    }

    /// Get captured file contents for testing assertions
    pub fn get_file_contents(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }

    fn injected_failure(&self, path: &Path) -> io::Result<()> {
        match self.failures.read().unwrap().get(path) {
            Some(kind) => Err(io::Error::new(
                *kind,
                format!("mock failure for {}", path.display()),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileKind> {
        self.injected_failure(path)?;

        if self.files.read().unwrap().contains_key(path) {
            Ok(FileKind::File)
        } else if self.directories.read().unwrap().contains_key(path) {
            Ok(FileKind::Directory)
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found in mock filesystem: {}", path.display()),
            ))
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.injected_failure(path)?;

        if self.directories.read().unwrap().contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }

        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File not found in mock filesystem: {}", path.display()),
                )
            })
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.injected_failure(path)?;

        self.files
            .write()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default()
            .push_str(contents);
        Ok(())
    }
}
