//! Domain models for bookdeal
//!
//! Contains the core business logic without any I/O concerns.

mod id;
mod validation;
mod book;
mod author;
mod contract;
mod registry;

pub use id::{AuthorId, BookId, ContractId};
pub use validation::{require_text, Royalties, ValidationError};
pub use book::Book;
pub use author::Author;
pub use contract::Contract;
pub use registry::Registry;
