//! Shared primitive aliases and ordering keys.

/// Publication year.
pub type Year = i32;

/// Field a catalog can be reordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Ordinal comparison of titles.
    Title,
    /// Ordinal comparison of authors.
    Author,
    /// Numeric comparison of publication years.
    Year,
}
