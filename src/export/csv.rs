//! CSV Export functionality
//!
//! Exports one row per book with its counters and current borrowers.

use std::io::Write;

use crate::error::{LibraryError, LibraryResult};
use crate::services::LibraryService;

/// Export the catalog to CSV
pub fn export_books_csv<W: Write>(service: &LibraryService, writer: W) -> LibraryResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "total_quantity",
            "borrowed_count",
            "available",
            "borrowers",
        ])
        .map_err(|e| LibraryError::Export(e.to_string()))?;

    for book in service.list_books() {
        let borrowers = service
            .list_users()
            .iter()
            .filter(|u| u.has_borrowed(book.id))
            .map(|u| u.name.as_str())
            .collect::<Vec<_>>()
            .join(";");

        csv_writer
            .write_record([
                book.id.to_string(),
                book.name.clone(),
                book.total_quantity().to_string(),
                book.borrowed_count().to_string(),
                book.available().to_string(),
                borrowers,
            ])
            .map_err(|e| LibraryError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LibraryError::Export(e.to_string()))?;

    Ok(())
}
