//! Bookshelf Core Library
//!
//! Durable storage for a personal bookshelf: books with their reading
//! progress and quotes, a pointer to the book currently being read, and the
//! deterministic display values a shelf view derives from them.
//!
//! Everything is persisted through the [`storage::KeyValueStore`] trait, so
//! the same [`BookStore`] runs over local files or memory.

pub mod error;
pub mod shelf;
pub mod storage;
pub mod store;
pub mod types;

pub use error::{Result, ShelfError, StorageError};
pub use store::{BookStore, QuoteEntry, BOOKS_KEY, CURRENT_BOOK_KEY};
pub use types::{sample_books, Book, NewBook, Palette, Quote, DEFAULT_BOOK_COLORS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_books() {
        let samples = sample_books();
        assert_eq!(samples.len(), 16);
        assert!(samples
            .iter()
            .all(|b| !b.title.is_empty() && !b.author.is_empty()));
        // More samples than colors, so seeding exercises the wrap-around
        assert!(samples.len() > DEFAULT_BOOK_COLORS.len());
    }
}
