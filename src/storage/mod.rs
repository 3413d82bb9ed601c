//! # Storage Layer
//!
//! File-backed inputs for bookdeal. Nothing here writes: the registry only
//! lives for the duration of one process.
//!
//! ## Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Catalog | JSON (`.json`) or TOML | `--catalog`, `$BOOKDEAL_CATALOG` or `catalog` in config |
//! | Config (local) | TOML | `./bookdeal.toml` |
//! | Config (global) | TOML | `~/.config/bookdeal/config.toml` |
//!
//! ## Key Types
//!
//! - [`Catalog`] - Loads a catalog file into a [`Registry`](crate::domain::Registry)
//! - [`Config`] - Global and local configuration

mod catalog;
mod config;

pub use catalog::{parse as parse_catalog, Catalog, CatalogError, CatalogFormat};
pub use config::{Config, ConfigError, ConfigFile, OutputFormat, LOCAL_CONFIG_FILE};
