//! YAML Export functionality
//!
//! Exports the same snapshot as JSON, in a human-readable form.

use std::io::Write;

use crate::error::{LibraryError, LibraryResult};
use crate::export::json::LibraryExport;
use crate::services::LibraryService;

/// Export the library to YAML format
pub fn export_yaml<W: Write>(service: &LibraryService, writer: &mut W) -> LibraryResult<()> {
    let export = LibraryExport::from_service(service);

    writeln!(writer, "# library-cli session export")
        .map_err(|e| LibraryError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| LibraryError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| LibraryError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LibraryError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LibraryError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_yaml() {
        let mut service = LibraryService::with_demo_data().unwrap();
        service.borrow_book("Khaled", "Test3").unwrap();

        let mut output = Vec::new();
        export_yaml(&service, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("# library-cli session export"));

        let parsed: LibraryExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.books.len(), 3);
        let khaled = parsed.users.iter().find(|u| u.name == "Khaled").unwrap();
        assert_eq!(khaled.borrowed_books().len(), 1);
    }
}
