//! Shelf and reading goal views

use anyhow::{Context, Result};
use bookshelf_core::shelf::{goal_grid, shelves, spines, SpineWidth, BOOKS_PER_SHELF};
use bookshelf_core::BookStore;

/// Draw the shelves, one line per spine
pub async fn shelf(store: &BookStore, json: bool) -> Result<()> {
    let books = store.list_books().await.context("Failed to load books")?;
    let rows: Vec<_> = shelves(&books, BOOKS_PER_SHELF)
        .into_iter()
        .map(spines)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("The shelf is empty");
    }
    for (n, row) in rows.iter().enumerate() {
        println!("Shelf {}", n + 1);
        for spine in row {
            let width = match spine.width {
                SpineWidth::Thin => "|",
                SpineWidth::Regular => "||",
                SpineWidth::Thick => "|||",
            };
            let pose = if spine.slanted {
                " (slanted)"
            } else if spine.leaning {
                " (leaning)"
            } else {
                ""
            };
            println!(
                "  {:<3} {} {} {}{}",
                width,
                spine.book.color,
                "*".repeat(spine.rating as usize),
                spine.book.title,
                pose
            );
        }
    }

    Ok(())
}

/// Show finished books against a target as a grid
pub async fn goal(store: &BookStore, target: usize) -> Result<()> {
    let books = store.list_books().await.context("Failed to load books")?;
    let finished = books.iter().filter(|b| b.is_finished()).count();

    println!("Goal: {}/{} books", finished.min(target), target);
    for row in goal_grid(finished, target) {
        let cells: String = row
            .iter()
            .map(|&done| if done { "[x]" } else { "[ ]" })
            .collect();
        println!("{}", cells);
    }

    Ok(())
}
