//! Error types for workbook loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that stop a workbook document from being extracted at all.
///
/// Irregularities inside a well-formed document (missing attributes,
/// odd shelf text) are never reported through this type.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error (for packaged workbooks).
    #[error("Archive error: {0}")]
    Archive(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error while reading a workbook file.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing required entry or element.
    #[error("Missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },

    /// Unsupported file type or disabled feature.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl WorkbookError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an archive error.
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create an IO error tagged with the path being read.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing archive entry error.
    pub fn missing_entry(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "entry",
            name: name.into(),
        }
    }

    /// Create a missing element error.
    pub fn missing_element(name: impl Into<String>) -> Self {
        Self::Missing {
            kind: "element",
            name: name.into(),
        }
    }

    /// Tag the error with the document it came from.
    ///
    /// IO errors already carry their path and are returned unchanged.
    pub fn with_path(self, path: &Path) -> Self {
        let at = |message: String| format!("{}: {message}", path.display());
        match self {
            Self::Xml(message) => Self::Xml(at(message)),
            Self::Archive(message) => Self::Archive(at(message)),
            Self::Json(message) => Self::Json(at(message)),
            Self::Unsupported(message) => Self::Unsupported(at(message)),
            Self::Missing { kind, name } => Self::Missing {
                kind,
                name: format!("{name} in {}", path.display()),
            },
            io @ Self::Io { .. } => io,
        }
    }
}
