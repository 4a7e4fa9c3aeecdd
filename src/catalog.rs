//! Catalog store and query operations.
//!
//! The catalog owns the book records and answers every query with a linear
//! scan over its vector. Text matching folds case with `str::to_lowercase`;
//! nothing locale-aware happens here.

use crate::models::Book;

/// In-memory store of book records, kept in insertion order.
///
/// ID uniqueness is an invariant of the stored records but is guaranteed by
/// the caller (the shell's monotonic counter), not re-checked on insert.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Never fails; no capacity limit, no uniqueness check.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Full ordered sequence of stored records, possibly empty.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Records whose title contains `keyword` as a case-insensitive
    /// substring, in insertion order. An empty keyword matches every record.
    pub fn search_by_title(&self, keyword: &str) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Records whose genre equals `genre` case-insensitively (exact match,
    /// not substring), in insertion order.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Book> {
        let genre = genre.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.genre.to_lowercase() == genre)
            .collect()
    }

    /// Remove the record with the given ID. Returns whether a record was
    /// found; a missing ID is a normal outcome, not an error.
    pub fn remove_by_id(&mut self, id: u32) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(idx) => {
                self.books.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
