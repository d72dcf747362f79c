//! Service layer for library-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-entity operations.

pub mod library;

pub use library::LibraryService;
