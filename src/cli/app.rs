//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{logging, query};
use crate::storage::{Catalog, Config};

#[derive(Parser)]
#[command(name = "bookdeal")]
#[command(author, version, about = "Query books, authors and their contracts")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog file to load (JSON or TOML)
    #[arg(long, short = 'c', global = true, env = "BOOKDEAL_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format (defaults to the configured format, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the catalog and show what it contains
    Check,

    /// List all books
    Books,

    /// List all authors with their royalty totals
    Authors,

    /// Show one author's contracts, books and total royalties
    Author {
        /// Author name (exact match)
        name: String,
    },

    /// List contracts
    Contracts {
        /// Only contracts signed on this date (exact text match)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let format = cli.format.unwrap_or_else(|| config.default_format());
    let output = Output::new(format, cli.verbose);

    output.verbose("bookdeal starting");

    let path = cli.catalog.or_else(|| config.catalog()).ok_or_else(|| {
        anyhow::anyhow!(
            "No catalog given. Pass --catalog, set BOOKDEAL_CATALOG, or set `catalog` in bookdeal.toml"
        )
    })?;

    let catalog = Catalog::new(path);
    output.verbose_ctx("catalog", &format!("Loading {}", catalog.path().display()));
    let registry = catalog.load()?;
    output.verbose_ctx(
        "catalog",
        &format!(
            "Loaded {} books, {} authors, {} contracts",
            registry.book_count(),
            registry.author_count(),
            registry.contract_count()
        ),
    );

    match cli.command {
        Commands::Check => query::check(&output, &registry, catalog.path())?,
        Commands::Books => query::books(&output, &registry)?,
        Commands::Authors => query::authors(&output, &registry)?,
        Commands::Author { name } => {
            output.verbose_ctx("author", &format!("Looking up author: {}", name));
            query::author(&output, &registry, &name)?
        }
        Commands::Contracts { date } => {
            output.verbose_ctx("contracts", &format!("Date filter: {:?}", date));
            query::contracts(&output, &registry, date.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
