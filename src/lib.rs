//! Libris Library Catalog Console
//!
//! A small interactive console utility for managing an in-memory catalog of
//! book records: add, list, search by title, filter by genre, remove by ID.
//! The catalog and shell are exposed as a library so tests can drive them
//! without spawning the binary.

pub mod catalog;
pub mod error;
pub mod models;
pub mod shell;

pub use catalog::Catalog;
pub use error::{AppError, AppResult};
pub use models::Book;
pub use shell::Shell;
