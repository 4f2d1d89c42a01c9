//! CLI command implementations

mod books;
mod current;
mod quotes;
mod shelf;

pub use books::{add, list, progress, seed};
pub use current::current;
pub use quotes::{quote, quotes};
pub use shelf::{goal, shelf};

use bookshelf_core::Book;

/// One-line summary of a book
fn book_line(book: &Book) -> String {
    let pages = book
        .pages
        .map(|p| format!(", {} pages", p))
        .unwrap_or_default();
    format!(
        "{}  {} by {} [{}] {}%{}",
        book.id, book.title, book.author, book.color, book.progress, pages
    )
}
