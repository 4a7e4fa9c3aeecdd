//! Book (catalog entry) model.

use std::fmt;

/// One catalog record. The ID is assigned by the shell's monotonic counter at
/// creation time and is never reused or changed afterwards. Title, author and
/// genre are free-form text; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Book {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}

/// List/search views show ID, title and author. Genre is stored but only
/// surfaces through the genre filter.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Title: {}, Author: {}",
            self.id, self.title, self.author
        )
    }
}
