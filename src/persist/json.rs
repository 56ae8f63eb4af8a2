//! Pretty-printed JSON file backend.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{book::Book, core::catalog::CatalogSnapshot};

use super::{BookStorage, PersistError, PersistResult};

/// Version written into every saved file.
pub const CATALOG_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a> {
    format_version: u16,
    books: &'a [Book],
}

#[derive(Debug, Deserialize)]
struct Envelope {
    format_version: u16,
    books: Vec<Book>,
}

/// Stores a catalog as one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend for `path`. Nothing is touched until load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> PersistResult<CatalogSnapshot> {
        let text = fs::read_to_string(&self.path).map_err(|source| PersistError::Io {
            path: self.path.clone(),
            source,
        })?;
        decode_catalog(&text, &self.path)
    }

    fn save(&mut self, snapshot: &CatalogSnapshot) -> PersistResult<()> {
        // Encode fully before opening the file so a failure cannot truncate it.
        let text = encode_catalog(&snapshot.books, &self.path)?;
        fs::write(&self.path, text).map_err(|source| PersistError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn encode_catalog(books: &[Book], path: &Path) -> PersistResult<String> {
    let env = EnvelopeRef {
        format_version: CATALOG_FORMAT_VERSION,
        books,
    };
    let mut text = serde_json::to_string_pretty(&env).map_err(|source| PersistError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    text.push('\n');
    Ok(text)
}

fn decode_catalog(text: &str, path: &Path) -> PersistResult<CatalogSnapshot> {
    let format_err = |source| PersistError::Format {
        path: path.to_path_buf(),
        source,
    };

    // Hand-written files may hold a bare array of books.
    if text.trim_start().starts_with('[') {
        let books: Vec<Book> = serde_json::from_str(text).map_err(format_err)?;
        return Ok(CatalogSnapshot { books });
    }

    let env: Envelope = serde_json::from_str(text).map_err(format_err)?;
    if env.format_version != CATALOG_FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: env.format_version,
        });
    }
    Ok(CatalogSnapshot { books: env.books })
}
