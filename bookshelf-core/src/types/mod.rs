//! Core types for the book collection

mod book;
mod palette;
mod samples;

pub use book::{Book, NewBook, Quote, MAX_PROGRESS};
pub use palette::{Palette, DEFAULT_BOOK_COLORS};
pub use samples::sample_books;
