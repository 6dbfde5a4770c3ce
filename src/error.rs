//! Error types for loading and rendering documents.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read the Markdown source from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read document {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
        }
    }
}

/// Failure inside the rendering pipeline or its style assets.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to highlight {language} code block")]
    Highlight {
        language: String,
        #[source]
        source: syntect::Error,
    },

    #[error("unknown code theme: {name}")]
    UnknownTheme { name: String },

    #[error("failed to generate code theme stylesheet")]
    Css(#[source] syntect::Error),
}

/// Any failure that aborts a single page request.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_path() {
        // Arrange
        let err = LoadError::NotFound {
            path: PathBuf::from("missing.md"),
        };

        // Act & Assert
        assert_eq!(err.path(), &PathBuf::from("missing.md"));
        assert_eq!(err.to_string(), "document not found: missing.md");
    }

    #[test]
    fn test_error_from_render_error() {
        // Arrange
        let err = RenderError::UnknownTheme {
            name: "nope".to_string(),
        };

        // Act
        let wrapped: Error = err.into();

        // Assert
        assert!(matches!(wrapped, Error::Render(RenderError::UnknownTheme { .. })));
        assert_eq!(wrapped.to_string(), "unknown code theme: nope");
    }
}
