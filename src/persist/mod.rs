//! Storage seam for catalog snapshots.

/// JSON file backend.
pub mod json;

use std::path::PathBuf;

use thiserror::Error;

use crate::core::catalog::CatalogSnapshot;

/// Descriptive failure of a load or save.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be opened, read, or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The content is not a valid book list.
    #[error("malformed catalog data in {path}: {source}")]
    Format {
        /// File involved.
        path: PathBuf,
        /// Underlying decode or encode error.
        #[source]
        source: serde_json::Error,
    },
    /// The file declares a format this build does not read.
    #[error("unsupported catalog format version {version} in {path}")]
    UnsupportedVersion {
        /// File involved.
        path: PathBuf,
        /// Declared version.
        version: u16,
    },
    /// Backend-specific failure.
    #[error("{0}")]
    Message(String),
}

/// Result alias for storage operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// A place a catalog can be loaded from and saved to.
///
/// `load` must either return the complete snapshot or fail; callers rely on
/// that to leave their contents untouched on error.
pub trait BookStorage {
    /// Reads the stored snapshot.
    fn load(&self) -> PersistResult<CatalogSnapshot>;
    /// Replaces the stored snapshot.
    fn save(&mut self, snapshot: &CatalogSnapshot) -> PersistResult<()>;
    /// Human-readable location, used in logs.
    fn describe(&self) -> String {
        "storage".to_string()
    }
}
