//! Typed menu choices and commands
//!
//! The session parses raw input into these types; nothing below this layer
//! knows where the input came from.

use std::fmt;

use crate::models::{BookId, UserId};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    ListBooks,
    SearchBooks,
    AddUser,
    BorrowBook,
    ReturnBook,
    UsersWhoBorrowed,
    ListUsers,
    Exit,
}

impl MenuChoice {
    /// Every entry in display order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddBook,
        MenuChoice::ListBooks,
        MenuChoice::SearchBooks,
        MenuChoice::AddUser,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::UsersWhoBorrowed,
        MenuChoice::ListUsers,
        MenuChoice::Exit,
    ];

    /// 1-based number shown next to the entry
    pub fn number(self) -> u32 {
        Self::ALL
            .iter()
            .position(|&c| c == self)
            .map_or(0, |idx| idx as u32 + 1)
    }

    /// Look up an entry by its 1-based number
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = n.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }

    /// Highest valid menu number
    pub fn max_number() -> u32 {
        Self::ALL.len() as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddBook => "Add book",
            Self::ListBooks => "Print library books",
            Self::SearchBooks => "Print books by prefix",
            Self::AddUser => "Add user",
            Self::BorrowBook => "Borrow book",
            Self::ReturnBook => "Return book",
            Self::UsersWhoBorrowed => "Print users borrowed book",
            Self::ListUsers => "Print users",
            Self::Exit => "Exit the program",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.number(), self.label())
    }
}

/// A fully collected request against the library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddBook {
        name: String,
        id: BookId,
        quantity: u32,
    },
    ListBooks,
    SearchBooks {
        prefix: String,
    },
    AddUser {
        name: String,
        id: UserId,
    },
    BorrowBook {
        user: String,
        book: String,
    },
    ReturnBook {
        user: String,
        book: String,
    },
    UsersWhoBorrowed {
        book: String,
    },
    ListUsers,
    Exit,
}
