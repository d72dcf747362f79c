//! Export module for library-cli
//!
//! Writes a snapshot of the session's final state. Nothing here is ever read
//! back at startup; every run begins from an empty (or demo) library.
//! - CSV: one row per book (spreadsheet-compatible)
//! - JSON: machine-readable books and users
//! - YAML: human-readable books and users

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_books_csv;
pub use self::json::{export_json, LibraryExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{LibraryError, LibraryResult};
use crate::services::LibraryService;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (books and users)
    #[default]
    Json,
    /// YAML format (books and users, human-readable)
    Yaml,
    /// CSV format (books only)
    Csv,
}

/// Write the library to `path` in the given format
pub fn export_to_path(
    service: &LibraryService,
    path: &Path,
    format: ExportFormat,
) -> LibraryResult<()> {
    let file = File::create(path).map_err(|e| {
        LibraryError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_json(service, &mut writer, true)?,
        ExportFormat::Yaml => export_yaml(service, &mut writer)?,
        ExportFormat::Csv => export_books_csv(service, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| LibraryError::Export(format!("Failed to flush {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), ?format, "exported library");
    Ok(())
}
