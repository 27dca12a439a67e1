//! # Data Layer Error Types
//!
//! Error types for catalog documents and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / toml::de::Error                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Adds the path and operation context         │
//! │       │                                                                 │
//! │       ├── wraps CoreError for entries that fail catalog rules          │
//! │       ▼                                                                 │
//! │  Caller (showcase binary prints it and exits 1)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use lavka_core::CoreError;
use thiserror::Error;

// =============================================================================
// Data Error
// =============================================================================

/// Catalog document and configuration errors.
#[derive(Debug, Error)]
pub enum DataError {
    // -------------------------------------------------------------------------
    // Document errors
    // -------------------------------------------------------------------------
    /// The requested path does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The document exists but could not be read.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - The file is not valid UTF-8
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Malformed JSON in {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A document entry failed catalog rules (wraps the core error).
    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(#[from] CoreError),

    // -------------------------------------------------------------------------
    // Configuration errors
    // -------------------------------------------------------------------------
    /// The config file is not valid TOML.
    #[error("Malformed config: {0}")]
    MalformedConfig(#[from] toml::de::Error),

    /// The config parsed but failed validation.
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl DataError {
    /// Maps an I/O error for `path` to the matching document variant.
    ///
    /// `NotFound` gets its own variant so callers can distinguish a missing
    /// catalog from an unreadable one.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DataError::FileNotFound { path }
        } else {
            DataError::ReadFailed { path, source }
        }
    }

    /// Returns true if this error reports a missing document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::FileNotFound { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DataError.
pub type DataResult<T> = Result<T, DataError>;

// =============================================================================
// Unit Tests
// =============================================================================
