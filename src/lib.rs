//! Single-user, in-memory book catalog with JSON file persistence.
//!
//! # Examples
//!
//! ```
//! use bookcat::{book::Book, core::catalog::{Catalog, CatalogError}};
//!
//! let mut catalog = Catalog::new();
//! catalog.add(Book::new("Dune", "Herbert", 1965));
//! catalog.add(Book::new("Dune Messiah", "Herbert", 1969));
//!
//! catalog.check_out("dune").expect("check out");
//! assert!(catalog.all()[0].checked_out);
//! assert!(!catalog.all()[1].checked_out);
//! assert!(matches!(
//!     catalog.check_out("DUNE"),
//!     Err(CatalogError::AlreadyCheckedOut { .. })
//! ));
//! ```
//!
//! Saving and loading:
//! ```no_run
//! use bookcat::core::catalog::Catalog;
//!
//! let mut catalog = Catalog::new();
//! if let Err(err) = catalog.load_from_file("books.json") {
//!     eprintln!("{err}");
//! }
//! catalog.save_to_file("books.json").expect("save");
//! ```
#![deny(missing_docs)]

/// Book record and update payload.
pub mod book;
/// Command-line configuration.
pub mod config;
/// In-memory catalog.
pub mod core;
/// Storage seam and JSON file backend.
pub mod persist;
/// Interactive numbered-menu shell.
pub mod shell;
/// Shared primitive types and enums.
pub mod types;
