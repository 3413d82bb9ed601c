//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `check` | Validate the catalog and show counts |
//! | `books` | List all books |
//! | `authors` | List authors with contract counts and royalty totals |
//! | `author <NAME>` | One author's contracts, books and total royalties |
//! | `contracts [--date D]` | All contracts, or those signed on `D` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output, including the registry's
//! `tracing` events:
//! ```bash
//! bookdeal --verbose --catalog books.json authors
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod logging;
mod output;
mod query;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
