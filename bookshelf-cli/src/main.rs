//! Bookshelf CLI - manage a personal bookshelf from the terminal

mod commands;
mod config;

use anyhow::Result;
use bookshelf_core::storage::LocalStorage;
use bookshelf_core::shelf::MAX_GOAL;
use bookshelf_core::BookStore;
use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reject empty or whitespace-only text arguments
fn parse_non_empty(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the bookshelf data
    #[arg(long, global = true, env = "BOOKSHELF_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books on the shelf
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a book to the shelf
    Add {
        /// Book title
        #[arg(value_parser = parse_non_empty)]
        title: String,

        /// Book author
        #[arg(value_parser = parse_non_empty)]
        author: String,

        /// Number of pages
        #[arg(short, long)]
        pages: Option<NonZeroU32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update reading progress of a book
    Progress {
        /// Book id
        id: String,

        /// Progress in percent (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: u8,
    },

    /// Record a quote from a book
    Quote {
        /// Book id
        id: String,

        /// Quote text
        #[arg(value_parser = parse_non_empty)]
        text: String,

        /// Page the quote is on
        #[arg(short, long)]
        page: Option<NonZeroU32>,
    },

    /// List every recorded quote
    Quotes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the book currently being read
    Current {
        /// Book id to mark as current
        #[arg(conflicts_with = "clear")]
        id: Option<String>,

        /// Forget the current book
        #[arg(long)]
        clear: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw the shelves
    Shelf {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the reading goal grid
    Goal {
        /// Number of books to finish (1-1000)
        #[arg(
            short,
            long,
            default_value = "12",
            value_parser = clap::value_parser!(u32).range(1..=MAX_GOAL as i64)
        )]
        target: u32,
    },

    /// Fill an empty shelf with sample books
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=info,bookshelf_core=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_dir = config::resolve_data_dir(cli.data_dir);
    tracing::debug!("Using data directory {:?}", data_dir);
    let store = BookStore::new(Arc::new(LocalStorage::new(data_dir)));

    match cli.command {
        Commands::List { json } => commands::list(&store, json).await,

        Commands::Add {
            title,
            author,
            pages,
            json,
        } => commands::add(&store, &title, &author, pages, json).await,

        Commands::Progress { id, percent } => commands::progress(&store, &id, percent).await,

        Commands::Quote { id, text, page } => commands::quote(&store, &id, &text, page).await,

        Commands::Quotes { json } => commands::quotes(&store, json).await,

        Commands::Current { id, clear, json } => {
            commands::current(&store, id.as_deref(), clear, json).await
        }

        Commands::Shelf { json } => commands::shelf(&store, json).await,

        Commands::Goal { target } => commands::goal(&store, target as usize).await,

        Commands::Seed => commands::seed(&store).await,
    }
}
