//! Current book command

use super::book_line;
use anyhow::{Context, Result};
use bookshelf_core::BookStore;

/// Show, set or clear the book currently being read
pub async fn current(store: &BookStore, id: Option<&str>, clear: bool, json: bool) -> Result<()> {
    if clear {
        store
            .clear_current_book()
            .await
            .context("Failed to clear current book")?;
        println!("No current book");
        return Ok(());
    }

    if let Some(id) = id {
        store
            .set_current_book(id)
            .await
            .context("Failed to set current book")?;
        if store.get_book(id).await?.is_none() {
            tracing::warn!("{} is not on the shelf", id);
        }
        println!("Current book set to {}", id);
        return Ok(());
    }

    let book = store
        .current_book()
        .await
        .context("Failed to load current book")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        match book {
            Some(book) => println!("{}", book_line(&book)),
            None => println!("No current book"),
        }
    }

    Ok(())
}
