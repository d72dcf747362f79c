//! JSON Export functionality
//!
//! Exports a snapshot of the library's in-memory state with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::LibraryResult;
use crate::models::{Book, User};
use crate::services::LibraryService;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of every book and user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All books, in catalog order
    pub books: Vec<Book>,

    /// All users, in registration order
    pub users: Vec<User>,
}

impl LibraryExport {
    /// Capture the current state of a library
    pub fn from_service(service: &LibraryService) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            books: service.list_books().to_vec(),
            users: service.list_users().to_vec(),
        }
    }
}

/// Export the library to JSON
pub fn export_json<W: Write>(
    service: &LibraryService,
    writer: &mut W,
    pretty: bool,
) -> LibraryResult<()> {
    let export = LibraryExport::from_service(service);

    let written = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    written?;

    Ok(())
}
