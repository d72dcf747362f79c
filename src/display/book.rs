//! Book display formatting
//!
//! Formats books for terminal output as single lines and tables.

use crate::models::Book;

/// Format one book as a single descriptive line
pub fn format_book_line(book: &Book) -> String {
    format!(
        "Book Name : {:20} -ID : {:<5}   -Total Quantity : {:<6}-Total borrowed : {}",
        book.name,
        book.id,
        book.total_quantity(),
        book.borrowed_count()
    )
}

/// Format a list of books as a table
pub fn format_book_list<'a, I>(books: I) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    let books: Vec<&Book> = books.into_iter().collect();
    if books.is_empty() {
        return "No books found.\n".to_string();
    }

    // Calculate column widths
    let name_width = books
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>9}\n",
        "Name",
        "ID",
        "Total",
        "Borrowed",
        "Available",
        name_width = name_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:->8}  {:->8}  {:->8}  {:->9}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for book in &books {
        output.push_str(&format!(
            "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>9}\n",
            book.name,
            book.id,
            book.total_quantity(),
            book.borrowed_count(),
            book.available(),
            name_width = name_width,
        ));
    }

    output
}
