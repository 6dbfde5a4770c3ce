//! Markdown source loading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::LoadError;

/// File rendered when no path is given, relative to the working directory.
pub const README_FILE: &str = "README.md";

/// Markdown source text read from disk.
///
/// A document is loaded fresh for every render and never mutated. Its only
/// identity is the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    /// Reads the full UTF-8 content of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the path does not exist, and
    /// [`LoadError::Io`] for any other read failure, including content that
    /// is not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();

        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.clone() },
            _ => LoadError::Io {
                path: path.clone(),
                source,
            },
        })?;

        debug!(path = %path.display(), bytes = content.len(), "loaded document");

        Ok(Self { path, content })
    }

    /// Wraps in-memory Markdown as if it had been read from `path`.
    pub fn from_source(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name component of the path, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_exact_content() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("README.md");
        let source = "# Title\r\n\nSome *text* with trailing spaces  \n\u{1F980}\n";
        fs::write(&path, source).expect("Should write fixture");

        // Act
        let document = Document::load(&path).expect("Should load document");

        // Assert
        assert_eq!(document.content(), source);
        assert_eq!(document.content().as_bytes(), source.as_bytes());
        assert_eq!(document.path(), path.as_path());
    }

    #[test]
    fn test_load_missing_file() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("absent.md");

        // Act
        let result = Document::load(&path);

        // Assert
        match result {
            Err(LoadError::NotFound { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_directory_is_io_error() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");

        // Act
        let result = Document::load(dir.path());

        // Assert
        assert!(
            matches!(result, Err(LoadError::Io { .. })),
            "Reading a directory should fail with Io: {:?}",
            result
        );
    }

    #[test]
    fn test_load_invalid_utf8_is_io_error() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).expect("Should write fixture");

        // Act
        let result = Document::load(&path);

        // Assert
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_file_name() {
        // Arrange
        let document = Document::from_source("docs/GUIDE.md", "");

        // Act & Assert
        assert_eq!(document.file_name(), "GUIDE.md");
    }
}
