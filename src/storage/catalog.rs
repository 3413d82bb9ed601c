//! Catalog files
//!
//! A catalog lists books, authors and the contracts between them. It is
//! read-only input: loading it builds a fresh [`Registry`], and nothing is
//! ever written back. JSON is used for `.json` files, TOML for everything
//! else.
//!
//! Field values are read as untrusted JSON values so that wrong types are
//! reported as validation errors rather than parse errors. Contracts refer to
//! authors by name and books by title; the first match wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::{require_text, Registry, ValidationError};

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{section} entry {entry}: {error}")]
    InvalidEntry {
        section: &'static str,
        /// 1-based position within the section
        entry: usize,
        error: ValidationError,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// Catalog file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Picks the format from a file extension
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Toml,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    books: Vec<BookEntry>,
    authors: Vec<AuthorEntry>,
    contracts: Vec<ContractEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BookEntry {
    title: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuthorEntry {
    name: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContractEntry {
    author: Value,
    book: Value,
    date: Value,
    royalties: Value,
}

/// A catalog file on disk
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the catalog into a new registry
    pub fn load(&self) -> Result<Registry> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog: {}", self.path.display()))?;

        let format = CatalogFormat::for_path(&self.path);
        debug!(path = %self.path.display(), ?format, "loading catalog");

        parse(&content, format)
            .with_context(|| format!("Invalid catalog: {}", self.path.display()))
    }
}

/// Builds a registry from catalog text
pub fn parse(content: &str, format: CatalogFormat) -> Result<Registry, CatalogError> {
    let file: CatalogFile = match format {
        CatalogFormat::Json => {
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
        CatalogFormat::Toml => {
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?
        }
    };

    let mut registry = Registry::new();
    populate(&mut registry, &file)?;
    Ok(registry)
}

fn populate(registry: &mut Registry, file: &CatalogFile) -> Result<(), CatalogError> {
    for (i, entry) in file.books.iter().enumerate() {
        registry
            .add_book_value(&entry.title)
            .map_err(|error| invalid("books", i, error))?;
    }

    for (i, entry) in file.authors.iter().enumerate() {
        registry
            .add_author_value(&entry.name)
            .map_err(|error| invalid("authors", i, error))?;
    }

    for (i, entry) in file.contracts.iter().enumerate() {
        sign(registry, entry).map_err(|error| invalid("contracts", i, error))?;
    }

    Ok(())
}

fn sign(registry: &mut Registry, entry: &ContractEntry) -> Result<(), ValidationError> {
    let name = require_text("author", &entry.author)?;
    let author = registry
        .find_author(&name)
        .ok_or_else(|| ValidationError::invalid_type("author", "the name of a listed author"))?;

    let title = require_text("book", &entry.book)?;
    let book = registry
        .find_book(&title)
        .ok_or_else(|| ValidationError::invalid_type("book", "the title of a listed book"))?;

    registry.sign_contract_value(author, book, &entry.date, &entry.royalties)?;
    Ok(())
}

fn invalid(section: &'static str, index: usize, error: ValidationError) -> CatalogError {
    CatalogError::InvalidEntry {
        section,
        entry: index + 1,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_JSON: &str = r#"{
        "books": [{"title": "Hp"}, {"title": "Lotr"}],
        "authors": [{"name": "JK"}, {"name": "Tolkien"}],
        "contracts": [
            {"author": "JK", "book": "Hp", "date": "2024-01-01", "royalties": 10},
            {"author": "Tolkien", "book": "Lotr", "date": "2024-01-01", "royalties": 25},
            {"author": "JK", "book": "Hp", "date": "2024-02-01", "royalties": 5}
        ]
    }"#;

    #[test]
    fn parses_json_catalog() {
        let registry = parse(SAMPLE_JSON, CatalogFormat::Json).unwrap();

        assert_eq!(registry.book_count(), 2);
        assert_eq!(registry.author_count(), 2);
        assert_eq!(registry.contract_count(), 3);

        let jk = registry.find_author("JK").unwrap();
        assert_eq!(registry.total_royalties(jk).unwrap(), 15);
        assert_eq!(registry.contracts_by_date("2024-01-01").len(), 2);
    }

    #[test]
    fn parses_toml_catalog() {
        let toml = r#"
[[books]]
title = "Hp"

[[authors]]
name = "JK"

[[contracts]]
author = "JK"
book = "Hp"
date = "2024-01-01"
royalties = 10
"#;

        let registry = parse(toml, CatalogFormat::Toml).unwrap();
        let jk = registry.find_author("JK").unwrap();
        assert_eq!(registry.books_of(jk).unwrap()[0].title(), "Hp");
    }

    #[test]
    fn empty_catalog_is_valid() {
        let registry = parse("{}", CatalogFormat::Json).unwrap();
        assert_eq!(registry.book_count(), 0);

        let registry = parse("", CatalogFormat::Toml).unwrap();
        assert_eq!(registry.contract_count(), 0);
    }

    #[test]
    fn out_of_range_royalties_name_the_entry() {
        let json = r#"{
            "books": [{"title": "Hp"}],
            "authors": [{"name": "JK"}],
            "contracts": [
                {"author": "JK", "book": "Hp", "date": "2024-01-01", "royalties": 10},
                {"author": "JK", "book": "Hp", "date": "2024-01-01", "royalties": 150}
            ]
        }"#;

        let err = parse(json, CatalogFormat::Json).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidEntry {
                section: "contracts",
                entry: 2,
                error: ValidationError::invalid_range("royalties", 150),
            }
        );
        assert_eq!(
            err.to_string(),
            "contracts entry 2: royalties must be an integer between 0 and 100, got 150"
        );
    }

    #[test]
    fn wrong_types_are_type_errors() {
        let err = parse(r#"{"books": [{"title": 42}]}"#, CatalogFormat::Json).unwrap_err();
        assert_eq!(err, invalid("books", 0, ValidationError::invalid_type("title", "a string")));

        let err = parse(r#"{"authors": [{}]}"#, CatalogFormat::Json).unwrap_err();
        assert_eq!(err, invalid("authors", 0, ValidationError::invalid_type("name", "a string")));

        let json = r#"{
            "books": [{"title": "Hp"}],
            "authors": [{"name": "JK"}],
            "contracts": [{"author": "JK", "book": "Hp", "date": 20240101, "royalties": 1}]
        }"#;
        let err = parse(json, CatalogFormat::Json).unwrap_err();
        assert_eq!(err, invalid("contracts", 0, ValidationError::invalid_type("date", "a string")));
    }

    #[test]
    fn unknown_references_are_rejected() {
        let json = r#"{
            "authors": [{"name": "JK"}],
            "contracts": [{"author": "JK", "book": "Missing", "date": "d", "royalties": 1}]
        }"#;

        let err = parse(json, CatalogFormat::Json).unwrap_err();
        assert_eq!(
            err,
            invalid("contracts", 0, ValidationError::invalid_type("book", "the title of a listed book"))
        );
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = parse("{ not json", CatalogFormat::Json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(CatalogFormat::for_path(Path::new("a.json")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::for_path(Path::new("a.JSON")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::for_path(Path::new("a.toml")), CatalogFormat::Toml);
        assert_eq!(CatalogFormat::for_path(Path::new("catalog")), CatalogFormat::Toml);
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, SAMPLE_JSON).unwrap();

        let registry = Catalog::new(&path).load().unwrap();
        assert_eq!(registry.contract_count(), 3);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path().join("missing.json"));

        let err = catalog.load().unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
