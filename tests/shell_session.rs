use std::io::Cursor;

use tempfile::TempDir;

use bookcat::{
    book::Book,
    config::ShellConfig,
    core::catalog::Catalog,
    shell::Shell,
};

fn run_script(catalog: Catalog, config: ShellConfig, script: &str) -> (Catalog, String) {
    let mut out = Vec::new();
    let mut shell = Shell::new(catalog, config, Cursor::new(script.as_bytes()), &mut out);
    shell.run().expect("run");
    let catalog = shell.into_catalog();
    (catalog, String::from_utf8(out).expect("utf8"))
}

#[test]
fn add_check_out_and_list() {
    let script = "1\nDune\nHerbert\n1965\n1\nDune Messiah\nHerbert\n1969\n8\ndune\n8\nDUNE\n2\n0\n";
    let (catalog, out) = run_script(Catalog::new(), ShellConfig::default(), script);

    assert_eq!(catalog.len(), 2);
    assert!(catalog.all()[0].checked_out);
    assert!(!catalog.all()[1].checked_out);
    assert!(out.contains("Book added successfully!"));
    assert!(out.contains("The book has been checked out successfully."));
    assert!(out.contains("Not possible: \"Dune\" is already checked out."));
    assert!(out.contains("Dune         | Herbert | 1965 | Checked Out"));
    assert!(out.ends_with("Exiting the program...\n"));
}

#[test]
fn bad_input_is_reported_and_loop_continues() {
    let script = "abc\n42\n1\nEmma\nAusten\nlast year\n9\nEmma\n11\nEmma\n";
    let (catalog, out) = run_script(Catalog::new(), ShellConfig::default(), script);

    assert!(catalog.is_empty());
    assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
    assert!(out.contains("Invalid year: \"last year\""));
    assert!(out.contains("The book does not exist (no book titled \"Emma\")."));
    // End of input exits cleanly.
    assert!(out.ends_with("Exiting the program...\n"));
}

#[test]
fn search_sort_update_and_delete() {
    let mut catalog = Catalog::new();
    catalog.add(Book::new("War and Peace", "Tolstoy", 1869));
    catalog.add(Book::new("Anna Karenina", "Tolstoy", 1878));
    catalog.add(Book::new("Emma", "Austen", 1815));

    let script = "3\nwar\n4\nzzz\n7\n10\nemma\nEmma\nJane Austen\n1816\n11\nanna karenina\n0\n";
    let (catalog, out) = run_script(catalog, ShellConfig::default(), script);

    assert!(out.contains("War and Peace | Tolstoy | 1869 | Available"));
    assert!(out.contains("No books found."));
    assert!(out.contains("Books sorted by year!"));
    assert!(out.contains("The book has been updated successfully."));
    assert!(out.contains("The book has been deleted successfully."));

    let titles: Vec<&str> = catalog.all().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Emma", "War and Peace"]);
    assert_eq!(catalog.all()[0].author, "Jane Austen");
    assert_eq!(catalog.all()[0].year, 1816);
}

#[test]
fn save_and_load_use_configured_file() {
    let tmp = TempDir::new().expect("tmp");
    let config = ShellConfig {
        data_file: tmp.path().join("shelf.json"),
        load_on_start: false,
    };

    let (_, out) = run_script(
        Catalog::new(),
        config.clone(),
        "12\n1\nDune\nHerbert\n1965\n13\n0\n",
    );
    assert!(out.contains("Error while reading books from file: cannot access"));
    assert!(out.contains("1 book(s) written to file successfully!"));

    let (catalog, out) = run_script(
        Catalog::new(),
        ShellConfig {
            load_on_start: true,
            ..config
        },
        "0\n",
    );
    assert!(out.starts_with("1 book(s) loaded from file successfully!"));
    assert_eq!(catalog.all(), &[Book::new("Dune", "Herbert", 1965)]);
}
