//! Book record and update payload.

use serde::{Deserialize, Serialize};

use crate::types::Year;

/// One catalog entry.
///
/// Field order is part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Title text; lookups treat it as a case-insensitive key.
    pub title: String,
    /// Author text.
    pub author: String,
    /// Publication year.
    pub year: Year,
    /// True while the book is lent out.
    #[serde(default)]
    pub checked_out: bool,
}

impl Book {
    /// Creates an available book.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: Year) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            checked_out: false,
        }
    }

    /// Marks the book as checked out. Does not look at the previous state.
    pub fn check_out(&mut self) {
        self.checked_out = true;
    }

    /// Marks the book as available. Does not look at the previous state.
    pub fn return_book(&mut self) {
        self.checked_out = false;
    }

    /// Returns true when the book is not checked out.
    pub fn is_available(&self) -> bool {
        !self.checked_out
    }
}

/// Replacement values written by [`crate::core::catalog::Catalog::update`].
///
/// All three fields are overwritten; `checked_out` is left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookUpdate {
    /// New title.
    pub title: String,
    /// New author.
    pub author: String,
    /// New publication year.
    pub year: Year,
}

impl BookUpdate {
    /// Overwrites the descriptive fields of `book`.
    pub fn apply_to(&self, book: &mut Book) {
        book.title = self.title.clone();
        book.author = self.author.clone();
        book.year = self.year;
    }
}
