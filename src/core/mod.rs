//! In-memory catalog of books.

/// Ordered book collection and its lookup, sort, and mutation operations.
pub mod catalog;
