//! Library service
//!
//! Orchestrates the catalog and the registry. Every cross-entity rule lives
//! here: a borrow touches the catalog before the registry, a return checks
//! the registry before touching either, and a failed operation leaves both
//! untouched.

use tracing::{debug, info, warn};

use crate::error::{LibraryError, LibraryResult};
use crate::models::{Book, BookId, User, UserId};
use crate::storage::{Catalog, Registry};

/// Users loaded by [`LibraryService::seed_demo_data`]
const DEMO_USERS: &[(&str, u64)] = &[("Mostafa", 112), ("Ahmed", 32), ("Khaled", 2)];

/// Books loaded by [`LibraryService::seed_demo_data`]
const DEMO_BOOKS: &[(&str, u64, u32)] = &[
    ("Test1", 9921, 12),
    ("Test2", 42231, 2),
    ("Test3", 122, 333),
];

/// Service owning every book and user record
#[derive(Debug, Default)]
pub struct LibraryService {
    catalog: Catalog,
    registry: Registry,
}

impl LibraryService {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library pre-filled with the demo users and books
    pub fn with_demo_data() -> LibraryResult<Self> {
        let mut service = Self::new();
        service.seed_demo_data()?;
        Ok(service)
    }

    /// Add the demo users and books
    pub fn seed_demo_data(&mut self) -> LibraryResult<()> {
        for &(name, id) in DEMO_USERS {
            self.add_user(name, UserId::new(id))?;
        }
        for &(name, id, quantity) in DEMO_BOOKS {
            self.add_book(name, BookId::new(id), quantity)?;
        }
        debug!(
            users = DEMO_USERS.len(),
            books = DEMO_BOOKS.len(),
            "seeded demo data"
        );
        Ok(())
    }

    /// Add a book to the catalog
    pub fn add_book(&mut self, name: &str, id: BookId, quantity: u32) -> LibraryResult<&Book> {
        match self.catalog.add_book(name, id, quantity) {
            Ok(book) => {
                info!(book_id = %book.id, name = %book.name, quantity, "added book");
                Ok(book)
            }
            Err(e) => {
                warn!(book_id = %id, error = %e, "rejected book");
                Err(e)
            }
        }
    }

    /// Register a user
    pub fn add_user(&mut self, name: &str, id: UserId) -> LibraryResult<&User> {
        match self.registry.add_user(name, id) {
            Ok(user) => {
                info!(user_id = %user.id, name = %user.name, "added user");
                Ok(user)
            }
            Err(e) => {
                warn!(user_id = %id, error = %e, "rejected user");
                Err(e)
            }
        }
    }

    /// Lend a copy of a book to a user, both looked up by name
    pub fn borrow_book(&mut self, user_name: &str, book_name: &str) -> LibraryResult<()> {
        let (user_id, book_id) = self.resolve(user_name, book_name)?;

        if self.registry.has_borrowed(user_id, book_id) {
            warn!(user = user_name, book = book_name, "duplicate borrow refused");
            return Err(LibraryError::AlreadyBorrowed {
                user: user_name.to_string(),
                book: book_name.to_string(),
            });
        }

        if let Err(e) = self.catalog.borrow_copy(book_id) {
            warn!(user = user_name, book = book_name, error = %e, "borrow failed");
            return Err(e);
        }
        self.registry.record_borrow(user_id, book_id)?;

        info!(user = user_name, book = book_name, "book borrowed");
        Ok(())
    }

    /// Take back a copy of a book from a user, both looked up by name.
    ///
    /// An unknown user or book name is reported as `NotFound` rather than
    /// ignored. Nothing is changed in that case.
    pub fn return_book(&mut self, user_name: &str, book_name: &str) -> LibraryResult<()> {
        let (user_id, book_id) = self.resolve(user_name, book_name)?;

        if !self.registry.has_borrowed(user_id, book_id) {
            warn!(user = user_name, book = book_name, "return of unborrowed book");
            return Err(LibraryError::NotBorrowed {
                user: user_name.to_string(),
                book: book_name.to_string(),
            });
        }

        // Count first, then unlink
        self.catalog.return_copy(book_id)?;
        self.registry.record_return(user_id, book_id)?;

        info!(user = user_name, book = book_name, "book returned");
        Ok(())
    }

    /// Books whose name starts with `prefix`
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&Book> {
        let matches = self.catalog.search_by_prefix(prefix);
        debug!(prefix, matches = matches.len(), "prefix search");
        matches
    }

    /// All books in insertion order
    pub fn list_books(&self) -> &[Book] {
        self.catalog.list()
    }

    /// All users in insertion order
    pub fn list_users(&self) -> &[User] {
        self.registry.list()
    }

    /// Users currently holding a copy of the named book.
    /// Empty when the book is unknown or nobody holds it.
    pub fn users_who_borrowed(&self, book_name: &str) -> Vec<&User> {
        let Some(book) = self.catalog.get_by_name(book_name) else {
            debug!(book = book_name, "borrower lookup for unknown book");
            return Vec::new();
        };

        self.registry
            .list()
            .iter()
            .filter(|u| u.has_borrowed(book.id))
            .collect()
    }

    /// Find a book by exact name
    pub fn find_book(&self, name: &str) -> Option<&Book> {
        self.catalog.get_by_name(name)
    }

    /// Find a user by exact name
    pub fn find_user(&self, name: &str) -> Option<&User> {
        self.registry.get_by_name(name)
    }

    /// Get a book by ID
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.catalog.get(id)
    }

    /// Get a user by ID
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.registry.get(id)
    }

    /// Resolve a user's borrowed IDs to the catalog's book records
    pub fn borrowed_books(&self, user: &User) -> Vec<&Book> {
        user.borrowed_books()
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    /// Link a book to a user without taking a copy, leaving the counts
    /// inconsistent
    #[cfg(test)]
    pub(crate) fn link_without_copy(&mut self, user: UserId, book: BookId) -> LibraryResult<()> {
        self.registry.record_borrow(user, book)
    }

    fn resolve(&self, user_name: &str, book_name: &str) -> LibraryResult<(UserId, BookId)> {
        let user = self
            .registry
            .get_by_name(user_name)
            .ok_or_else(|| LibraryError::user_not_found(user_name))?;
        let book = self
            .catalog
            .get_by_name(book_name)
            .ok_or_else(|| LibraryError::book_not_found(book_name))?;
        Ok((user.id, book.id))
    }
}
