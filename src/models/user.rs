//! User model
//!
//! Users refer to the books they hold by ID only; the catalog stays the sole
//! owner of book records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::book::MAX_NAME_LEN;
use super::ids::{BookId, UserId};

/// A registered library user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Books currently held, in borrow order
    #[serde(default)]
    borrowed_books: Vec<BookId>,
}

impl User {
    /// Create a new user holding no books
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed_books: Vec::new(),
        }
    }

    /// IDs of the books this user holds
    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed_books
    }

    /// Add a book to the borrowed list
    pub fn borrow(&mut self, book_id: BookId) {
        self.borrowed_books.push(book_id);
    }

    /// Check whether the user holds a copy of the book
    pub fn has_borrowed(&self, book_id: BookId) -> bool {
        self.borrowed_books.contains(&book_id)
    }

    /// Drop one entry for the book. Returns `false` if it wasn't held.
    pub fn return_book(&mut self, book_id: BookId) -> bool {
        match self.borrowed_books.iter().position(|&id| id == book_id) {
            Some(idx) => {
                self.borrowed_books.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }

        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(UserValidationError::NameTooLong(name_len));
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "User name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "User name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
        }
    }
}

impl std::error::Error for UserValidationError {}
