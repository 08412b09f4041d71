//! Error types for word source loading and lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a word source or looking up words.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordsError {
    /// Word source file does not exist.
    #[error("word source not found: {path}")]
    NotFound { path: PathBuf },

    /// Word source exists but could not be read.
    #[error("failed to read word source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Word source is not well-formed JSON.
    #[error("failed to parse word source {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Word source is JSON but not an object of string lists.
    #[error("invalid word source {path}: {message}")]
    Schema { path: PathBuf, message: String },

    /// Requested category is not in the loaded word source.
    #[error("category '{category}' not found. Available categories: {}", format_categories(.available))]
    CategoryNotFound {
        category: String,
        available: Vec<String>,
    },

    /// Requested category exists but has no words to pick from.
    #[error("category '{category}' is empty")]
    EmptyCategory { category: String },
}

/// Coarse classification of a [`WordsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Parse,
    Schema,
    CategoryNotFound,
    EmptyCategory,
}

impl WordsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn schema(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Schema { .. } => ErrorKind::Schema,
            Self::CategoryNotFound { .. } => ErrorKind::CategoryNotFound,
            Self::EmptyCategory { .. } => ErrorKind::EmptyCategory,
        }
    }

    /// Valid category names carried by a `CategoryNotFound` error.
    pub fn available_categories(&self) -> Option<&[String]> {
        match self {
            Self::CategoryNotFound { available, .. } => Some(available),
            _ => None,
        }
    }
}

fn format_categories(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// Result type for word store operations.
pub type Result<T> = std::result::Result<T, WordsError>;
