//! Book model
//!
//! A book is a titled stock of fungible copies. Only the number of copies out
//! is tracked, never which physical copy a borrower holds.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BookId;

/// Maximum length of a book or user name
pub const MAX_NAME_LEN: usize = 100;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: BookId,

    /// Book title
    pub name: String,

    /// Number of copies the library owns, fixed at creation
    total_quantity: u32,

    /// Number of copies currently lent out
    borrowed_count: u32,
}

impl Book {
    /// Create a new book with no copies lent out
    pub fn new(id: BookId, name: impl Into<String>, total_quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            total_quantity,
            borrowed_count: 0,
        }
    }

    pub fn total_quantity(&self) -> u32 {
        self.total_quantity
    }

    pub fn borrowed_count(&self) -> u32 {
        self.borrowed_count
    }

    /// Copies still on the shelf
    pub fn available(&self) -> u32 {
        self.total_quantity - self.borrowed_count
    }

    /// Lend out one copy. Returns `false` when every copy is already out.
    pub fn borrow(&mut self) -> bool {
        if self.available() == 0 {
            return false;
        }
        self.borrowed_count += 1;
        true
    }

    /// Take one copy back.
    ///
    /// Callers must have verified an outstanding borrow first, so a zero
    /// count means the bookkeeping is broken rather than bad input.
    pub fn return_copy(&mut self) -> Result<(), BookValidationError> {
        if self.borrowed_count == 0 {
            return Err(BookValidationError::NothingBorrowed(self.id));
        }
        self.borrowed_count -= 1;
        Ok(())
    }

    /// Validate the book
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.name.trim().is_empty() {
            return Err(BookValidationError::EmptyName);
        }

        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(BookValidationError::NameTooLong(name_len));
        }

        if self.borrowed_count > self.total_quantity {
            return Err(BookValidationError::Overdrawn {
                borrowed: self.borrowed_count,
                total: self.total_quantity,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for books
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyName,
    NameTooLong(usize),
    Overdrawn { borrowed: u32, total: u32 },
    NothingBorrowed(BookId),
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Book name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Book name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::Overdrawn { borrowed, total } => {
                write!(f, "{} copies borrowed but only {} exist", borrowed, total)
            }
            Self::NothingBorrowed(id) => {
                write!(f, "book {} returned with no copies borrowed", id)
            }
        }
    }
}

impl std::error::Error for BookValidationError {}
