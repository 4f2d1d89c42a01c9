//! Quote commands

use anyhow::{Context, Result};
use bookshelf_core::BookStore;
use std::num::NonZeroU32;

/// Record a quote from a book
pub async fn quote(store: &BookStore, id: &str, text: &str, page: Option<NonZeroU32>) -> Result<()> {
    let quote = store
        .add_quote_to_book(id, text.trim(), page)
        .await
        .context("Failed to add quote")?;

    tracing::debug!("Stored quote {}", quote.id);
    println!("Quote added");

    Ok(())
}

/// List every recorded quote
pub async fn quotes(store: &BookStore, json: bool) -> Result<()> {
    let entries = store.all_quotes().await.context("Failed to load quotes")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No quotes yet");
    }
    for entry in &entries {
        match entry.quote.page {
            Some(page) => println!("\"{}\" ({}, p. {})", entry.quote.text, entry.book_title, page),
            None => println!("\"{}\" ({})", entry.quote.text, entry.book_title),
        }
    }

    Ok(())
}
