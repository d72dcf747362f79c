//! In-memory book catalog
//!
//! Holds book records in insertion order with an ID index for lookups.

use std::collections::HashMap;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, BookId};

/// The collection of books and their availability counters
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    /// Index: book_id -> position in `books`
    by_id: HashMap<BookId, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new book with no copies lent out
    pub fn add_book(
        &mut self,
        name: &str,
        id: BookId,
        quantity: u32,
    ) -> LibraryResult<&Book> {
        if self.exists(id) {
            return Err(LibraryError::DuplicateId {
                entity_type: "Book",
                id: id.value(),
            });
        }

        let book = Book::new(id, name.trim(), quantity);
        book.validate()
            .map_err(|e| LibraryError::Validation(e.to_string()))?;

        let idx = self.books.len();
        self.books.push(book);
        self.by_id.insert(id, idx);
        Ok(&self.books[idx])
    }

    /// Check whether a book with this ID is present
    pub fn exists(&self, id: BookId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Check whether this ID is still free
    pub fn is_unique(&self, id: BookId) -> bool {
        !self.exists(id)
    }

    /// Get a book by ID
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.by_id.get(&id).map(|&idx| &self.books[idx])
    }

    /// Get the first book with exactly this name.
    ///
    /// Names are not unique; later books with the same name are shadowed.
    pub fn get_by_name(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.name == name)
    }

    /// Books whose name starts with `prefix` (case-sensitive).
    /// An empty prefix matches every book.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.name.starts_with(prefix))
            .collect()
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Lend out one copy of a book
    pub fn borrow_copy(&mut self, id: BookId) -> LibraryResult<()> {
        let book = self.get_mut(id)?;
        if !book.borrow() {
            return Err(LibraryError::CapacityExceeded {
                book: book.name.clone(),
                total: book.total_quantity(),
            });
        }
        Ok(())
    }

    /// Take back one copy of a book
    pub fn return_copy(&mut self, id: BookId) -> LibraryResult<()> {
        self.get_mut(id)?
            .return_copy()
            .map_err(|e| LibraryError::InvariantViolation(e.to_string()))
    }

    /// Count books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn get_mut(&mut self, id: BookId) -> LibraryResult<&mut Book> {
        match self.by_id.get(&id) {
            Some(&idx) => Ok(&mut self.books[idx]),
            None => Err(LibraryError::book_not_found(id.to_string())),
        }
    }
}
