//! bookdeal - an in-memory ledger of books, authors and contracts
//!
//! Authors sign contracts for books; each contract carries a signing date
//! and a royalty percentage. A [`Registry`] owns every entity and answers
//! the derived queries: an author's books, their total royalties, and all
//! contracts signed on a given date.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Author, AuthorId, Book, BookId, Contract, ContractId, Registry, Royalties, ValidationError};
