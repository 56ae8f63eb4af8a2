//! Menu choices and result rendering.

use std::{fmt::Write as _, str::FromStr};

use crate::book::Book;

/// One numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1
    Add,
    /// 2
    ListAll,
    /// 3
    SearchTitle,
    /// 4
    SearchAuthor,
    /// 5
    SortTitle,
    /// 6
    SortAuthor,
    /// 7
    SortYear,
    /// 8
    CheckOut,
    /// 9
    Return,
    /// 10
    Update,
    /// 11
    Delete,
    /// 12
    Load,
    /// 13
    Save,
    /// 0
    Exit,
}

impl MenuChoice {
    /// Entries in display order.
    pub const ALL: [MenuChoice; 14] = [
        MenuChoice::Add,
        MenuChoice::ListAll,
        MenuChoice::SearchTitle,
        MenuChoice::SearchAuthor,
        MenuChoice::SortTitle,
        MenuChoice::SortAuthor,
        MenuChoice::SortYear,
        MenuChoice::CheckOut,
        MenuChoice::Return,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Load,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    /// Number the user types.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::Add => 1,
            MenuChoice::ListAll => 2,
            MenuChoice::SearchTitle => 3,
            MenuChoice::SearchAuthor => 4,
            MenuChoice::SortTitle => 5,
            MenuChoice::SortAuthor => 6,
            MenuChoice::SortYear => 7,
            MenuChoice::CheckOut => 8,
            MenuChoice::Return => 9,
            MenuChoice::Update => 10,
            MenuChoice::Delete => 11,
            MenuChoice::Load => 12,
            MenuChoice::Save => 13,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a book",
            MenuChoice::ListAll => "Display all books",
            MenuChoice::SearchTitle => "Search books by title",
            MenuChoice::SearchAuthor => "Search books by author",
            MenuChoice::SortTitle => "Sort books by title",
            MenuChoice::SortAuthor => "Sort books by author",
            MenuChoice::SortYear => "Sort books by year",
            MenuChoice::CheckOut => "Check out a book",
            MenuChoice::Return => "Return a book",
            MenuChoice::Update => "Update a book",
            MenuChoice::Delete => "Delete a book",
            MenuChoice::Load => "Read books from file",
            MenuChoice::Save => "Write books to file",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("not a menu number: {:?}", s.trim()))?;
        MenuChoice::ALL
            .into_iter()
            .find(|c| c.number() == n)
            .ok_or_else(|| format!("no menu entry {n}"))
    }
}

const RULE: &str = "========================================";

/// Full menu text, ending with the choice prompt.
pub fn render_menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Library Management System Menu");
    for choice in MenuChoice::ALL {
        let _ = writeln!(out, "{}. {}", choice.number(), choice.label());
    }
    let _ = writeln!(out, "{RULE}");
    out.push_str("Enter your choice: ");
    out
}

/// Status column text.
pub fn status_label(book: &Book) -> &'static str {
    if book.checked_out {
        "Checked Out"
    } else {
        "Available"
    }
}

/// Left-aligned table of books, or "No books found." when empty.
pub fn render_books<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    let rows: Vec<[String; 4]> = books
        .into_iter()
        .map(|b| {
            [
                b.title.clone(),
                b.author.clone(),
                b.year.to_string(),
                status_label(b).to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return "No books found.\n".to_string();
    }

    let header = ["Title", "Author", "Year", "Status"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.map(str::to_string), &widths);
    let total = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_number() {
        for choice in MenuChoice::ALL {
            assert_eq!(choice.number().to_string().parse::<MenuChoice>(), Ok(choice));
        }
        assert!(" 8 \n".parse::<MenuChoice>().is_ok());
        assert!("14".parse::<MenuChoice>().is_err());
        assert!("add".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(render_books(Vec::<&Book>::new()), "No books found.\n");
    }

    #[test]
    fn table_aligns_columns() {
        let mut dune = Book::new("Dune", "Herbert", 1965);
        dune.check_out();
        let books = [dune, Book::new("Emma", "Jane Austen", 1815)];
        let table = render_books(&books);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Title | Author      | Year | Status");
        assert_eq!(lines[2], "Dune  | Herbert     | 1965 | Checked Out");
        assert_eq!(lines[3], "Emma  | Jane Austen | 1815 | Available");
    }
}
