//! Book and quote records as they are persisted

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use uuid::Uuid;

/// Highest reading progress, in percent
pub const MAX_PROGRESS: u8 = 100;

/// A book on the shelf
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, assigned at creation
    pub id: String,

    pub title: String,

    pub author: String,

    /// Spine color, drawn from the store's palette
    pub color: String,

    /// Reading progress in percent, `0..=100`
    pub progress: u8,

    /// Creation timestamp
    pub added_date: DateTime<Utc>,

    /// Page count, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<NonZeroU32>,

    /// Quotes recorded from this book, oldest first
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

impl Book {
    /// Create an unread book with a fresh identifier
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            color: color.into(),
            progress: 0,
            added_date: Utc::now(),
            pages: None,
            quotes: Vec::new(),
        }
    }

    /// Set the page count
    pub fn with_pages(mut self, pages: Option<NonZeroU32>) -> Self {
        self.pages = pages;
        self
    }

    /// Set progress, clamped to `0..=100`
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(MAX_PROGRESS);
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= MAX_PROGRESS
    }

    pub fn quote_count(&self) -> usize {
        self.quotes.len()
    }
}

/// A quote recorded from a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,

    pub text: String,

    /// Page the quote was taken from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<NonZeroU32>,

    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(text: impl Into<String>, page: Option<NonZeroU32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            page,
            created_at: Utc::now(),
        }
    }
}

/// Input for adding a book; the store fills in everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub pages: Option<NonZeroU32>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages: None,
        }
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = NonZeroU32::new(pages);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Dune", "Frank Herbert", "#8D6E63").with_pages(NonZeroU32::new(412));
        assert!(!book.id.is_empty());
        assert_eq!(book.progress, 0);
        assert!(book.quotes.is_empty());
        assert_eq!(book.pages.map(NonZeroU32::get), Some(412));
        assert!(!book.is_finished());
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut book = Book::new("Emma", "Jane Austen", "#795548");
        book.set_progress(42);
        assert_eq!(book.progress, 42);
        book.set_progress(250);
        assert_eq!(book.progress, 100);
        assert!(book.is_finished());
    }

    #[test]
    fn test_persisted_field_names() {
        let mut book = Book::new("Emma", "Jane Austen", "#795548");
        book.quotes.push(Quote::new("Silly things do cease to be silly", None));

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("addedDate").is_some());
        assert!(json.get("pages").is_none());
        assert!(json["quotes"][0].get("createdAt").is_some());
        assert!(json["quotes"][0].get("page").is_none());
    }

    #[test]
    fn test_reads_payload_without_quotes_or_pages() {
        let json = r##"[{
            "id": "1700000000000",
            "title": "The Hobbit",
            "author": "J.R.R. Tolkien",
            "color": "#8D6E63",
            "progress": 30,
            "addedDate": "2024-03-01T10:00:00.000Z"
        }]"##;

        let books: Vec<Book> = serde_json::from_str(json).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "1700000000000");
        assert_eq!(books[0].pages, None);
        assert!(books[0].quotes.is_empty());
    }

    #[test]
    fn test_zero_pages_is_unknown() {
        assert_eq!(NewBook::new("Dune", "Frank Herbert").with_pages(0).pages, None);
    }
}
