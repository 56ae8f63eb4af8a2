use std::{cmp::Ordering, path::Path};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    book::{Book, BookUpdate},
    persist::{BookStorage, PersistResult, json::JsonFileStorage},
    types::SortKey,
};

/// Failure of a lookup-by-title mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No title matched.
    #[error("no book titled \"{title}\"")]
    NotFound {
        /// Title as requested.
        title: String,
    },
    /// Check-out requested for a book that is already out.
    #[error("\"{title}\" is already checked out")]
    AlreadyCheckedOut {
        /// Title of the matched book.
        title: String,
    },
    /// Return requested for a book that is on the shelf.
    #[error("\"{title}\" is not checked out")]
    NotCheckedOut {
        /// Title of the matched book.
        title: String,
    },
}

impl CatalogError {
    /// True when a book matched but was in the wrong state for the request.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            Self::AlreadyCheckedOut { .. } | Self::NotCheckedOut { .. }
        )
    }
}

/// Owned copy of a catalog's books, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    /// Books in catalog order.
    pub books: Vec<Book>,
}

/// Ordered, in-memory collection of books.
///
/// Titles are not unique. Every lookup by title picks the first
/// case-insensitive exact match in the current order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog holding exactly the snapshot's books.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            books: snapshot.books,
        }
    }

    /// Clones the current books into a snapshot.
    pub fn export_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            books: self.books.clone(),
        }
    }

    /// Appends `book` at the end.
    pub fn add(&mut self, book: Book) {
        debug!(title = %book.title, position = self.books.len(), "adding book");
        self.books.push(book);
    }

    /// Current books in catalog order.
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books whose title contains `needle`, ignoring case, in catalog order.
    pub fn search_by_title(&self, needle: &str) -> Vec<&Book> {
        let needle = fold(needle);
        self.books
            .iter()
            .filter(|b| fold(&b.title).contains(&needle))
            .collect()
    }

    /// Books whose author contains `needle`, ignoring case, in catalog order.
    pub fn search_by_author(&self, needle: &str) -> Vec<&Book> {
        let needle = fold(needle);
        self.books
            .iter()
            .filter(|b| fold(&b.author).contains(&needle))
            .collect()
    }

    /// First book whose title equals `title`, ignoring case.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.position_of(title).map(|idx| &self.books[idx])
    }

    /// Stable ascending reorder of the whole catalog by `key`.
    pub fn sort_by(&mut self, key: SortKey) {
        debug!(?key, count = self.books.len(), "sorting catalog");
        // slice::sort_by is stable, so equal keys keep their previous order.
        self.books.sort_by(|a, b| compare(a, b, key));
    }

    /// Shorthand for `sort_by(SortKey::Title)`.
    pub fn sort_by_title(&mut self) {
        self.sort_by(SortKey::Title);
    }

    /// Shorthand for `sort_by(SortKey::Author)`.
    pub fn sort_by_author(&mut self) {
        self.sort_by(SortKey::Author);
    }

    /// Shorthand for `sort_by(SortKey::Year)`.
    pub fn sort_by_year(&mut self) {
        self.sort_by(SortKey::Year);
    }

    /// Checks out the first book titled `title`.
    pub fn check_out(&mut self, title: &str) -> Result<(), CatalogError> {
        let book = self.first_match_mut(title)?;
        if book.checked_out {
            return Err(CatalogError::AlreadyCheckedOut {
                title: book.title.clone(),
            });
        }
        book.check_out();
        debug!(title = %book.title, "checked out");
        Ok(())
    }

    /// Returns the first book titled `title`.
    pub fn return_book(&mut self, title: &str) -> Result<(), CatalogError> {
        let book = self.first_match_mut(title)?;
        if !book.checked_out {
            return Err(CatalogError::NotCheckedOut {
                title: book.title.clone(),
            });
        }
        book.return_book();
        debug!(title = %book.title, "returned");
        Ok(())
    }

    /// Overwrites title, author, and year of the first book titled `title`.
    pub fn update(&mut self, title: &str, update: BookUpdate) -> Result<(), CatalogError> {
        let book = self.first_match_mut(title)?;
        debug!(old_title = %book.title, new_title = %update.title, "updating book");
        update.apply_to(book);
        Ok(())
    }

    /// Removes and returns the first book titled `title`.
    pub fn delete(&mut self, title: &str) -> Result<Book, CatalogError> {
        let idx = self.position_of(title).ok_or_else(|| not_found(title))?;
        let removed = self.books.remove(idx);
        debug!(title = %removed.title, position = idx, "deleted book");
        Ok(removed)
    }

    /// Replaces the contents with the books stored at `path`.
    ///
    /// On error the catalog is left exactly as it was.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> PersistResult<usize> {
        self.load_from(&JsonFileStorage::new(path.as_ref()))
    }

    /// Writes every book, in current order, to `path`, overwriting the file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> PersistResult<usize> {
        self.save_to(&mut JsonFileStorage::new(path.as_ref()))
    }

    /// Replaces the contents with the books held by `storage`.
    pub fn load_from(&mut self, storage: &dyn BookStorage) -> PersistResult<usize> {
        match storage.load() {
            Ok(snapshot) => {
                let count = snapshot.books.len();
                *self = Self::from_snapshot(snapshot);
                info!(source = %storage.describe(), count, "catalog loaded");
                Ok(count)
            }
            Err(err) => {
                warn!(source = %storage.describe(), error = %err, "catalog load failed; keeping current contents");
                Err(err)
            }
        }
    }

    /// Writes every book to `storage`.
    pub fn save_to(&self, storage: &mut dyn BookStorage) -> PersistResult<usize> {
        match storage.save(&self.export_snapshot()) {
            Ok(()) => {
                info!(destination = %storage.describe(), count = self.books.len(), "catalog saved");
                Ok(self.books.len())
            }
            Err(err) => {
                warn!(destination = %storage.describe(), error = %err, "catalog save failed");
                Err(err)
            }
        }
    }

    fn position_of(&self, title: &str) -> Option<usize> {
        let title = fold(title);
        self.books.iter().position(|b| fold(&b.title) == title)
    }

    fn first_match_mut(&mut self, title: &str) -> Result<&mut Book, CatalogError> {
        let idx = self.position_of(title).ok_or_else(|| not_found(title))?;
        Ok(&mut self.books[idx])
    }
}

fn not_found(title: &str) -> CatalogError {
    CatalogError::NotFound {
        title: title.to_string(),
    }
}

// Per-character so the fold of a substring is a substring of the fold.
fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_uppercase).collect()
}

fn compare(a: &Book, b: &Book, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Author => a.author.cmp(&b.author),
        SortKey::Year => a.year.cmp(&b.year),
    }
}
