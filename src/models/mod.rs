//! Data models for Libris

pub mod book;

// Re-export commonly used types
pub use book::Book;
