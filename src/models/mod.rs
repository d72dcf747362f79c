//! Core data models for library-cli
//!
//! This module contains the records the library keeps: books with their copy
//! counters and users with the books they currently hold.

pub mod book;
pub mod ids;
pub mod user;

pub use book::{Book, BookValidationError};
pub use ids::{BookId, UserId};
pub use user::{User, UserValidationError};
