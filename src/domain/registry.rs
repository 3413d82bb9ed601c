//! Registry of books, authors and contracts
//!
//! The registry is the single owner of every entity. It keeps each kind in
//! creation order and hands out typed handles. Mutating operations validate
//! all of their inputs before touching any list, so a failed call leaves the
//! registry exactly as it was.

use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::author::Author;
use super::book::Book;
use super::contract::Contract;
use super::id::{AuthorId, BookId, ContractId, RegistryKey};
use super::validation::{require_text, Royalties, ValidationError};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

fn next_key() -> RegistryKey {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

/// In-memory store of all books, authors and contracts
#[derive(Debug)]
pub struct Registry {
    /// Changes on `clear` so stale handles stop resolving
    key: RegistryKey,
    books: Vec<Book>,
    authors: Vec<Author>,
    contracts: Vec<Contract>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates an empty registry, independent of every other one
    pub fn new() -> Self {
        Self {
            key: next_key(),
            books: Vec::new(),
            authors: Vec::new(),
            contracts: Vec::new(),
        }
    }

    /// Registers a new book
    pub fn add_book(&mut self, title: impl Into<String>) -> BookId {
        let id = BookId::new(self.key, self.books.len());
        let book = Book::new(id, title);
        debug!(id = %id, title = book.title(), "registered book");
        self.books.push(book);
        id
    }

    /// Registers a new book from an untrusted title
    pub fn add_book_value(&mut self, title: &Value) -> Result<BookId, ValidationError> {
        let title = require_text("title", title)?;
        Ok(self.add_book(title))
    }

    /// Registers a new author with no contracts
    pub fn add_author(&mut self, name: impl Into<String>) -> AuthorId {
        let id = AuthorId::new(self.key, self.authors.len());
        let author = Author::new(id, name);
        debug!(id = %id, name = author.name(), "registered author");
        self.authors.push(author);
        id
    }

    /// Registers a new author from an untrusted name
    pub fn add_author_value(&mut self, name: &Value) -> Result<AuthorId, ValidationError> {
        let name = require_text("name", name)?;
        Ok(self.add_author(name))
    }

    /// Signs a contract between `author` and `book`
    ///
    /// The contract is appended to the registry and to the author's own
    /// contract list. Fails with `InvalidType` if either handle does not
    /// belong to this registry, or `InvalidRange` if `royalties` is outside
    /// `0..=100`.
    pub fn sign_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: impl Into<String>,
        royalties: i64,
    ) -> Result<ContractId, ValidationError> {
        self.author(author)?;
        self.book(book)?;
        let royalties = Royalties::new(royalties)?;
        Ok(self.push_contract(author, book, date.into(), royalties))
    }

    /// Signs a contract from an untrusted date and royalty rate
    pub fn sign_contract_value(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: &Value,
        royalties: &Value,
    ) -> Result<ContractId, ValidationError> {
        self.author(author)?;
        self.book(book)?;
        let date = require_text("date", date)?;
        let royalties = Royalties::from_value(royalties)?;
        Ok(self.push_contract(author, book, date, royalties))
    }

    /// Appends a contract whose inputs have already been validated
    fn push_contract(
        &mut self,
        author: AuthorId,
        book: BookId,
        date: String,
        royalties: Royalties,
    ) -> ContractId {
        let id = ContractId::new(self.key, self.contracts.len());
        debug!(
            id = %id,
            author = %author,
            book = %book,
            date = %date,
            royalties = royalties.get(),
            "signed contract"
        );
        self.contracts
            .push(Contract::new(id, author, book, date, royalties));
        self.authors[author.index()].push_contract(id);
        id
    }

    pub fn book(&self, id: BookId) -> Result<&Book, ValidationError> {
        if id.registry() != self.key {
            return Err(not_a_book());
        }
        self.books.get(id.index()).ok_or_else(not_a_book)
    }

    pub fn book_mut(&mut self, id: BookId) -> Result<&mut Book, ValidationError> {
        if id.registry() != self.key {
            return Err(not_a_book());
        }
        self.books.get_mut(id.index()).ok_or_else(not_a_book)
    }

    pub fn author(&self, id: AuthorId) -> Result<&Author, ValidationError> {
        if id.registry() != self.key {
            return Err(not_an_author());
        }
        self.authors.get(id.index()).ok_or_else(not_an_author)
    }

    pub fn author_mut(&mut self, id: AuthorId) -> Result<&mut Author, ValidationError> {
        if id.registry() != self.key {
            return Err(not_an_author());
        }
        self.authors.get_mut(id.index()).ok_or_else(not_an_author)
    }

    pub fn contract(&self, id: ContractId) -> Result<&Contract, ValidationError> {
        if id.registry() != self.key {
            return Err(not_a_contract());
        }
        self.contracts.get(id.index()).ok_or_else(not_a_contract)
    }

    pub fn contract_mut(&mut self, id: ContractId) -> Result<&mut Contract, ValidationError> {
        if id.registry() != self.key {
            return Err(not_a_contract());
        }
        self.contracts.get_mut(id.index()).ok_or_else(not_a_contract)
    }

    /// All books in registration order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All authors in registration order
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All contracts in signing order
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }

    /// First book with exactly this title
    pub fn find_book(&self, title: &str) -> Option<BookId> {
        self.books.iter().find(|b| b.title() == title).map(Book::id)
    }

    /// First author with exactly this name
    pub fn find_author(&self, name: &str) -> Option<AuthorId> {
        self.authors.iter().find(|a| a.name() == name).map(Author::id)
    }

    /// Contracts signed by `author`, oldest first
    pub fn contracts_of(&self, author: AuthorId) -> Result<Vec<&Contract>, ValidationError> {
        self.author(author)?
            .contracts()
            .iter()
            .map(|id| self.contract(*id))
            .collect()
    }

    /// Books under contract with `author`, one per contract
    ///
    /// A book signed under several contracts appears once for each of them.
    pub fn books_of(&self, author: AuthorId) -> Result<Vec<&Book>, ValidationError> {
        self.contracts_of(author)?
            .into_iter()
            .map(|contract| self.book(contract.book()))
            .collect()
    }

    /// Sum of royalty rates over the author's contracts
    pub fn total_royalties(&self, author: AuthorId) -> Result<u32, ValidationError> {
        Ok(self
            .contracts_of(author)?
            .iter()
            .map(|contract| u32::from(contract.royalties()))
            .sum())
    }

    /// All contracts whose date text equals `date`, in signing order
    pub fn contracts_by_date(&self, date: &str) -> Vec<&Contract> {
        self.contracts.iter().filter(|c| c.date() == date).collect()
    }

    /// Drops every entity and invalidates all previously issued handles
    pub fn clear(&mut self) {
        debug!(
            books = self.books.len(),
            authors = self.authors.len(),
            contracts = self.contracts.len(),
            "clearing registry"
        );
        self.books.clear();
        self.authors.clear();
        self.contracts.clear();
        self.key = next_key();
    }
}

fn not_a_book() -> ValidationError {
    ValidationError::invalid_type("book", "a book of this registry")
}

fn not_an_author() -> ValidationError {
    ValidationError::invalid_type("author", "an author of this registry")
}

fn not_a_contract() -> ValidationError {
    ValidationError::invalid_type("contract", "a contract of this registry")
}
