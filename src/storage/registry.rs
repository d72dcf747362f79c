//! In-memory user registry
//!
//! Holds user records in insertion order with an ID index for lookups.
//! Borrow bookkeeping here is purely per-user; cross-checks against the
//! catalog belong to the service layer.

use std::collections::HashMap;

use crate::error::{LibraryError, LibraryResult};
use crate::models::{BookId, User, UserId};

/// The collection of users and their borrowed-book lists
#[derive(Debug, Default)]
pub struct Registry {
    users: Vec<User>,
    /// Index: user_id -> position in `users`
    by_id: HashMap<UserId, usize>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user
    pub fn add_user(&mut self, name: &str, id: UserId) -> LibraryResult<&User> {
        if self.exists(id) {
            return Err(LibraryError::DuplicateId {
                entity_type: "User",
                id: id.value(),
            });
        }

        let user = User::new(id, name.trim());
        user.validate()
            .map_err(|e| LibraryError::Validation(e.to_string()))?;

        let idx = self.users.len();
        self.users.push(user);
        self.by_id.insert(id, idx);
        Ok(&self.users[idx])
    }

    /// Check whether a user with this ID is present
    pub fn exists(&self, id: UserId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Check whether this ID is still free
    pub fn is_unique(&self, id: UserId) -> bool {
        !self.exists(id)
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.by_id.get(&id).map(|&idx| &self.users[idx])
    }

    /// Get the first user with exactly this name
    pub fn get_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name == name)
    }

    /// Note that a user took a copy of a book. Duplicates are not checked here.
    pub fn record_borrow(&mut self, user: UserId, book: BookId) -> LibraryResult<()> {
        self.get_mut(user)?.borrow(book);
        Ok(())
    }

    /// Check whether a user holds a copy of a book
    pub fn has_borrowed(&self, user: UserId, book: BookId) -> bool {
        self.get(user).is_some_and(|u| u.has_borrowed(book))
    }

    /// Remove a book from a user's list; no-op if it isn't there
    pub fn record_return(&mut self, user: UserId, book: BookId) -> LibraryResult<()> {
        self.get_mut(user)?.return_book(book);
        Ok(())
    }

    /// All users in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Count users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn get_mut(&mut self, id: UserId) -> LibraryResult<&mut User> {
        match self.by_id.get(&id) {
            Some(&idx) => Ok(&mut self.users[idx]),
            None => Err(LibraryError::user_not_found(id.to_string())),
        }
    }
}
