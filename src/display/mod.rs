//! Display formatting for terminal output
//!
//! Provides utilities for formatting books and users for the interactive
//! session, as single lines, tables, and detail views.

pub mod book;
pub mod user;

pub use book::{format_book_line, format_book_list};
pub use user::{format_user_details, format_user_directory, format_user_line, format_user_list};
