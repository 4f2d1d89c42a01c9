//! The book collection store
//!
//! The whole collection lives as one JSON array under [`BOOKS_KEY`]. Every
//! mutation loads it, changes it in memory and writes it back whole. Within
//! one `BookStore` those read-modify-write cycles are serialized by a write
//! gate, so mutations issued concurrently through a shared store are never
//! lost. Two stores over the same storage do not coordinate.

use crate::error::{Result, ShelfError};
use crate::storage::KeyValueStore;
use crate::types::{Book, NewBook, Palette, Quote};
use serde::Serialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Storage key holding the serialized collection
pub const BOOKS_KEY: &str = "books";

/// Storage key holding the id of the book being read
pub const CURRENT_BOOK_KEY: &str = "currentBook";

/// A quote together with the book it was taken from
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteEntry {
    pub book_id: String,
    pub book_title: String,
    #[serde(flatten)]
    pub quote: Quote,
}

/// Durable store for books, their quotes and the current-book pointer
pub struct BookStore {
    storage: Arc<dyn KeyValueStore>,
    palette: Palette,
    write_gate: Mutex<()>,
}

impl BookStore {
    /// Create a store over `storage` using the default palette
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            palette: Palette::default(),
            write_gate: Mutex::new(()),
        }
    }

    /// Use `palette` for spine color assignment
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Load the whole collection, in insertion order.
    ///
    /// A never-written collection is empty. A payload that does not parse is
    /// reported as [`ShelfError::Corrupt`] rather than read as empty.
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        match self.storage.get(BOOKS_KEY).await? {
            None => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json).map_err(|source| ShelfError::Corrupt {
                key: BOOKS_KEY.to_string(),
                source,
            }),
        }
    }

    /// Best-effort variant of [`list_books`](Self::list_books): any failure
    /// is logged and yields an empty collection
    pub async fn list_books_or_empty(&self) -> Vec<Book> {
        match self.list_books().await {
            Ok(books) => books,
            Err(e) => {
                tracing::error!(error = %e, "failed to load books, showing an empty shelf");
                Vec::new()
            }
        }
    }

    /// Replace the stored collection with `books`
    pub async fn persist_books(&self, books: &[Book]) -> Result<()> {
        let _gate = self.write_gate.lock().await;
        self.write_books(books).await
    }

    /// Find a book by id
    pub async fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        Ok(self
            .list_books()
            .await?
            .into_iter()
            .find(|book| book.id == book_id))
    }

    /// Add an unread book at the end of the collection
    pub async fn add_book(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: Option<NonZeroU32>,
    ) -> Result<Book> {
        let new = NewBook {
            title: title.into(),
            author: author.into(),
            pages,
        };

        let _gate = self.write_gate.lock().await;
        let mut books = self.list_books().await?;
        let book = self.build_book(&books, new);
        books.push(book.clone());
        self.write_books(&books).await?;

        tracing::info!(book_id = %book.id, title = %book.title, color = %book.color, "added book");
        Ok(book)
    }

    /// Set a book's reading progress, clamped to `0..=100`.
    ///
    /// Returns the updated book, or `None` if no book has `book_id`; in that
    /// case nothing is written.
    pub async fn update_book_progress(&self, book_id: &str, progress: u8) -> Result<Option<Book>> {
        let _gate = self.write_gate.lock().await;
        let mut books = self.list_books().await?;

        let Some(book) = books.iter_mut().find(|book| book.id == book_id) else {
            tracing::warn!(book_id, "progress update for unknown book ignored");
            return Ok(None);
        };
        book.set_progress(progress);
        let updated = book.clone();

        self.write_books(&books).await?;
        tracing::info!(book_id, progress = updated.progress, "updated progress");
        Ok(Some(updated))
    }

    /// Append a quote to a book.
    ///
    /// Fails with [`ShelfError::BookNotFound`] if no book has `book_id`,
    /// without touching storage.
    pub async fn add_quote_to_book(
        &self,
        book_id: &str,
        text: impl Into<String>,
        page: Option<NonZeroU32>,
    ) -> Result<Quote> {
        let _gate = self.write_gate.lock().await;
        let mut books = self.list_books().await?;

        let book = books
            .iter_mut()
            .find(|book| book.id == book_id)
            .ok_or_else(|| ShelfError::BookNotFound(book_id.to_string()))?;
        let quote = Quote::new(text, page);
        book.quotes.push(quote.clone());

        self.write_books(&books).await?;
        tracing::info!(book_id, quote_id = %quote.id, "added quote");
        Ok(quote)
    }

    /// Every quote in the collection, grouped by book in shelf order
    pub async fn all_quotes(&self) -> Result<Vec<QuoteEntry>> {
        Ok(self
            .list_books()
            .await?
            .into_iter()
            .flat_map(|book| {
                let Book {
                    id, title, quotes, ..
                } = book;
                quotes.into_iter().map(move |quote| QuoteEntry {
                    book_id: id.clone(),
                    book_title: title.clone(),
                    quote,
                })
            })
            .collect())
    }

    /// Point the reader at `book_id`. The id is not checked against the
    /// collection.
    pub async fn set_current_book(&self, book_id: &str) -> Result<()> {
        self.storage
            .set(CURRENT_BOOK_KEY, book_id.to_string())
            .await?;
        tracing::info!(book_id, "set current book");
        Ok(())
    }

    pub async fn current_book_id(&self) -> Result<Option<String>> {
        Ok(self.storage.get(CURRENT_BOOK_KEY).await?)
    }

    pub async fn clear_current_book(&self) -> Result<()> {
        self.storage.remove(CURRENT_BOOK_KEY).await?;
        Ok(())
    }

    /// Resolve the current-book pointer. A pointer to a book that is not in
    /// the collection resolves to `None`.
    pub async fn current_book(&self) -> Result<Option<Book>> {
        let Some(book_id) = self.current_book_id().await? else {
            return Ok(None);
        };
        let book = self.get_book(&book_id).await?;
        if book.is_none() {
            tracing::warn!(book_id = %book_id, "current book pointer does not match any book");
        }
        Ok(book)
    }

    /// Populate an empty collection with `samples`, returning how many books
    /// were added. A collection that already holds books is left alone.
    pub async fn seed_if_empty(&self, samples: impl IntoIterator<Item = NewBook>) -> Result<usize> {
        let _gate = self.write_gate.lock().await;
        let mut books = self.list_books().await?;
        if !books.is_empty() {
            tracing::debug!(count = books.len(), "collection not empty, skipping seed");
            return Ok(0);
        }

        for new in samples {
            let book = self.build_book(&books, new);
            books.push(book);
        }
        if books.is_empty() {
            return Ok(0);
        }

        self.write_books(&books).await?;
        tracing::info!(count = books.len(), "seeded collection");
        Ok(books.len())
    }

    fn build_book(&self, existing: &[Book], new: NewBook) -> Book {
        let color = self.palette.next_color(existing).to_string();
        Book::new(new.title, new.author, color).with_pages(new.pages)
    }

    async fn write_books(&self, books: &[Book]) -> Result<()> {
        let json = serde_json::to_string(books)?;
        self.storage.set(BOOKS_KEY, json).await?;
        Ok(())
    }
}
