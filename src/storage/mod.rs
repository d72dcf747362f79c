//! Storage layer for library-cli
//!
//! Records live only for the lifetime of the process. The catalog owns books
//! and the registry owns users; neither knows about the other.

pub mod catalog;
pub mod registry;

pub use catalog::Catalog;
pub use registry::Registry;
