//! Line-oriented menu loop over a [`Catalog`].
//!
//! The shell owns no book state of its own; every entry maps to one catalog
//! call and prints its outcome.

/// Menu entries and table rendering.
pub mod menu;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    book::{Book, BookUpdate},
    config::ShellConfig,
    core::catalog::{Catalog, CatalogError},
    types::{SortKey, Year},
};

use self::menu::{MenuChoice, render_books, render_menu};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session reading from `R` and printing to `W`.
pub struct Shell<R, W> {
    catalog: Catalog,
    config: ShellConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a session over an existing catalog.
    pub fn new(catalog: Catalog, config: ShellConfig, input: R, output: W) -> Self {
        Self {
            catalog,
            config,
            input,
            output,
        }
    }

    /// Catalog as currently held by the session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ends the session and hands back the catalog.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Runs menus until the user picks Exit or input ends.
    ///
    /// Only I/O errors on the terminal streams end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.load_on_start {
            self.load()?;
        }

        loop {
            write!(self.output, "{}", render_menu())?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };
            debug!(?choice, "menu choice");
            writeln!(self.output, "{}", choice.label())?;
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting the program...")?;
        self.output.flush()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => {
                let Some((title, author, year)) = self.prompt_book("Enter book")? else {
                    return Ok(Flow::Exit);
                };
                if let Some(year) = year {
                    self.catalog.add(Book::new(title, author, year));
                    writeln!(self.output, "Book added successfully!")?;
                }
            }
            MenuChoice::ListAll => {
                write!(self.output, "{}", render_books(self.catalog.all()))?;
            }
            MenuChoice::SearchTitle => {
                let Some(needle) = self.prompt("Enter title to search: ")? else {
                    return Ok(Flow::Exit);
                };
                let found = self.catalog.search_by_title(&needle);
                write!(self.output, "{}", render_books(found))?;
            }
            MenuChoice::SearchAuthor => {
                let Some(needle) = self.prompt("Enter author to search: ")? else {
                    return Ok(Flow::Exit);
                };
                let found = self.catalog.search_by_author(&needle);
                write!(self.output, "{}", render_books(found))?;
            }
            MenuChoice::SortTitle => self.sort(SortKey::Title, "title")?,
            MenuChoice::SortAuthor => self.sort(SortKey::Author, "author")?,
            MenuChoice::SortYear => self.sort(SortKey::Year, "year")?,
            MenuChoice::CheckOut => {
                let Some(title) = self.prompt("Enter book title: ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = self.catalog.check_out(&title);
                self.report(outcome, "The book has been checked out successfully.")?;
            }
            MenuChoice::Return => {
                let Some(title) = self.prompt("Enter book title: ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = self.catalog.return_book(&title);
                self.report(outcome, "The book has been returned successfully.")?;
            }
            MenuChoice::Update => {
                let Some(title) = self.prompt("Enter book title: ")? else {
                    return Ok(Flow::Exit);
                };
                let Some((new_title, new_author, year)) = self.prompt_book("Enter new")? else {
                    return Ok(Flow::Exit);
                };
                if let Some(year) = year {
                    let update = BookUpdate {
                        title: new_title,
                        author: new_author,
                        year,
                    };
                    let outcome = self.catalog.update(&title, update);
                    self.report(outcome, "The book has been updated successfully.")?;
                }
            }
            MenuChoice::Delete => {
                let Some(title) = self.prompt("Enter book title: ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = self.catalog.delete(&title).map(|_| ());
                self.report(outcome, "The book has been deleted successfully.")?;
            }
            MenuChoice::Load => self.load()?,
            MenuChoice::Save => match self.catalog.save_to_file(&self.config.data_file) {
                Ok(count) => writeln!(self.output, "{count} book(s) written to file successfully!")?,
                Err(err) => writeln!(self.output, "Error while writing books to file: {err}")?,
            },
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> io::Result<()> {
        match self.catalog.load_from_file(&self.config.data_file) {
            Ok(count) => writeln!(self.output, "{count} book(s) loaded from file successfully!"),
            Err(err) => writeln!(self.output, "Error while reading books from file: {err}"),
        }
    }

    fn sort(&mut self, key: SortKey, field: &str) -> io::Result<()> {
        self.catalog.sort_by(key);
        writeln!(self.output, "Books sorted by {field}!")
    }

    fn report(&mut self, outcome: Result<(), CatalogError>, success: &str) -> io::Result<()> {
        match outcome {
            Ok(()) => writeln!(self.output, "{success}"),
            Err(err @ CatalogError::NotFound { .. }) => {
                writeln!(self.output, "The book does not exist ({err}).")
            }
            Err(err) => writeln!(self.output, "Not possible: {err}."),
        }
    }

    /// Prompts for title, author, and year. `None` means input ended; an
    /// inner `None` year means the year was rejected and already reported.
    fn prompt_book(&mut self, lead: &str) -> io::Result<Option<(String, String, Option<Year>)>> {
        let Some(title) = self.prompt(&format!("{lead} title: "))? else {
            return Ok(None);
        };
        let Some(author) = self.prompt(&format!("{lead} author: "))? else {
            return Ok(None);
        };
        let Some(year) = self.prompt(&format!("{lead} year: "))? else {
            return Ok(None);
        };
        let year = match year.trim().parse::<Year>() {
            Ok(year) => Some(year),
            Err(_) => {
                writeln!(self.output, "Invalid year: {:?}", year.trim())?;
                None
            }
        };
        Ok(Some((title, author, year)))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
