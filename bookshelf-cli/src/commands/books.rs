//! Book listing and editing commands

use super::book_line;
use anyhow::{Context, Result};
use bookshelf_core::{sample_books, BookStore};
use std::num::NonZeroU32;

/// List the books on the shelf
pub async fn list(store: &BookStore, json: bool) -> Result<()> {
    let books = store
        .list_books()
        .await
        .context("Failed to load books")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else if books.is_empty() {
        println!("The shelf is empty");
    } else {
        for book in &books {
            println!("{}", book_line(book));
        }
        println!("\n{} books", books.len());
    }

    Ok(())
}

/// Add a book to the shelf
pub async fn add(
    store: &BookStore,
    title: &str,
    author: &str,
    pages: Option<NonZeroU32>,
    json: bool,
) -> Result<()> {
    let book = store
        .add_book(title.trim(), author.trim(), pages)
        .await
        .with_context(|| format!("Failed to add '{}'", title))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        println!("Added {}", book_line(&book));
    }

    Ok(())
}

/// Update reading progress; an unknown id is reported but not an error
pub async fn progress(store: &BookStore, id: &str, percent: u8) -> Result<()> {
    match store
        .update_book_progress(id, percent)
        .await
        .context("Failed to update progress")?
    {
        Some(book) => println!("{}: {}% read", book.title, book.progress),
        None => eprintln!("No book with id {}, nothing changed", id),
    }

    Ok(())
}

/// Fill an empty shelf with sample books
pub async fn seed(store: &BookStore) -> Result<()> {
    let added = store
        .seed_if_empty(sample_books())
        .await
        .context("Failed to seed the shelf")?;

    if added == 0 {
        println!("The shelf already has books, nothing added");
    } else {
        println!("Added {} sample books", added);
    }

    Ok(())
}
