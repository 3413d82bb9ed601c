//! Query commands (check, books, authors, author, contracts)

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{Contract, Registry};

/// Validate the catalog and report its size
pub fn check(output: &Output, registry: &Registry, path: &Path) -> Result<()> {
    if output.is_json() {
        output.data(&serde_json::json!({
            "catalog": path.display().to_string(),
            "books": registry.book_count(),
            "authors": registry.author_count(),
            "contracts": registry.contract_count(),
        }));
    } else {
        output.success(&format!(
            "Catalog OK: {} books, {} authors, {} contracts",
            registry.book_count(),
            registry.author_count(),
            registry.contract_count()
        ));
    }

    Ok(())
}

/// List all books
pub fn books(output: &Output, registry: &Registry) -> Result<()> {
    if output.is_json() {
        output.data(&registry.books());
    } else if registry.books().is_empty() {
        println!("No books.");
    } else {
        println!("{:<8} TITLE", "ID");
        println!("{}", "-".repeat(40));
        for book in registry.books() {
            println!("{:<8} {}", book.id(), book.title());
        }
    }

    Ok(())
}

/// List all authors with contract counts and royalty totals
pub fn authors(output: &Output, registry: &Registry) -> Result<()> {
    let mut rows = Vec::with_capacity(registry.author_count());
    for author in registry.authors() {
        let total = registry.total_royalties(author.id())?;
        rows.push((author, total));
    }

    if output.is_json() {
        let items: Vec<_> = rows
            .iter()
            .map(|(author, total)| {
                serde_json::json!({
                    "id": author.id(),
                    "name": author.name(),
                    "contracts": author.contracts().len(),
                    "total_royalties": total,
                })
            })
            .collect();
        output.data(&items);
    } else if rows.is_empty() {
        println!("No authors.");
    } else {
        println!("{:<8} {:<24} {:>9} {:>9}", "ID", "NAME", "CONTRACTS", "ROYALTIES");
        println!("{}", "-".repeat(53));
        for (author, total) in rows {
            println!(
                "{:<8} {:<24} {:>9} {:>9}",
                author.id(),
                author.name(),
                author.contracts().len(),
                total
            );
        }
    }

    Ok(())
}

/// Show one author's contracts, books and total royalties
pub fn author(output: &Output, registry: &Registry, name: &str) -> Result<()> {
    let id = registry
        .find_author(name)
        .with_context(|| format!("Author not found: {}", name))?;

    let contracts = registry.contracts_of(id)?;
    let books = registry.books_of(id)?;
    let total = registry.total_royalties(id)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id,
            "name": name,
            "contracts": contracts,
            "books": books,
            "total_royalties": total,
        }));
        return Ok(());
    }

    println!("{} ({})", name, id);
    if contracts.is_empty() {
        println!("No contracts.");
    } else {
        print_contracts(registry, &contracts)?;
    }
    println!();

    let titles: Vec<_> = books.iter().map(|b| b.title()).collect();
    println!("Books: {}", titles.join(", "));
    println!("Total royalties: {}", total);

    Ok(())
}

/// List all contracts, or those signed on `date`
pub fn contracts(output: &Output, registry: &Registry, date: Option<&str>) -> Result<()> {
    let contracts: Vec<&Contract> = match date {
        Some(date) => registry.contracts_by_date(date),
        None => registry.contracts().iter().collect(),
    };

    if output.is_json() {
        output.data(&contracts);
    } else if contracts.is_empty() {
        match date {
            Some(date) => println!("No contracts signed on {}.", date),
            None => println!("No contracts."),
        }
    } else {
        print_contracts(registry, &contracts)?;
    }

    Ok(())
}

fn print_contracts(registry: &Registry, contracts: &[&Contract]) -> Result<()> {
    println!(
        "{:<8} {:<12} {:<20} {:<24} {:>9}",
        "ID", "DATE", "AUTHOR", "BOOK", "ROYALTIES"
    );
    println!("{}", "-".repeat(77));
    for contract in contracts {
        let author = registry.author(contract.author())?;
        let book = registry.book(contract.book())?;
        println!(
            "{:<8} {:<12} {:<20} {:<24} {:>9}",
            contract.id(),
            contract.date(),
            author.name(),
            book.title(),
            contract.royalties()
        );
    }
    Ok(())
}
