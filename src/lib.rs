//! library-cli - interactive management of a small library's books and users
//!
//! This library provides the core functionality behind the `library` binary:
//! a catalog of books with fungible copies, a registry of users, and a
//! service that keeps the two consistent as books are borrowed and returned.
//! All state lives in memory for the lifetime of the process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (books, users, typed IDs)
//! - `storage`: In-memory catalog and registry
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: End-of-session snapshots (JSON, YAML, CSV)
//! - `cli`: The interactive menu session
//!
//! # Example
//!
//! ```rust
//! use library::models::{BookId, UserId};
//! use library::services::LibraryService;
//!
//! let mut service = LibraryService::new();
//! service.add_user("Ahmed", UserId::new(32))?;
//! service.add_book("Test2", BookId::new(42231), 2)?;
//! service.borrow_book("Ahmed", "Test2")?;
//! assert_eq!(service.find_book("Test2").unwrap().borrowed_count(), 1);
//! # Ok::<(), library::LibraryError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LibraryError, LibraryResult};
