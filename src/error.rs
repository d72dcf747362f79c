//! Custom error types for library-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for library operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An entity with the same ID is already registered
    #[error("{entity_type} with ID {id} is already in the system")]
    DuplicateId { entity_type: &'static str, id: u64 },

    /// Every copy of the book is out
    #[error("No copies of '{book}' available ({total} total, all borrowed)")]
    CapacityExceeded { book: String, total: u32 },

    /// Return attempted for a book the user does not hold
    #[error("{user} didn't borrow '{book}'")]
    NotBorrowed { user: String, book: String },

    /// The user already holds a copy of the book
    #[error("{user} has already borrowed '{book}'")]
    AlreadyBorrowed { user: String, book: String },

    /// Internal bookkeeping is inconsistent; never caused by user input
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LibraryError {
    /// Create a "not found" error for books
    pub fn book_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Book",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Fatal errors abort the session instead of being reported and skipped
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for library operations
pub type LibraryResult<T> = Result<T, LibraryError>;
