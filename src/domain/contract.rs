//! Contract domain model
//!
//! A contract joins one author and one book with a signing date and a
//! royalty rate. Only the royalty rate may change after signing, and every
//! change is range-checked.

use serde::Serialize;
use serde_json::Value;

use super::id::{AuthorId, BookId, ContractId};
use super::validation::{Royalties, ValidationError};

/// A signed contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contract {
    id: ContractId,
    author: AuthorId,
    book: BookId,
    /// Free-form date text, compared verbatim
    date: String,
    royalties: Royalties,
}

impl Contract {
    pub(crate) fn new(
        id: ContractId,
        author: AuthorId,
        book: BookId,
        date: String,
        royalties: Royalties,
    ) -> Self {
        Self {
            id,
            author,
            book,
            date,
            royalties,
        }
    }

    pub fn id(&self) -> ContractId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn royalties(&self) -> u8 {
        self.royalties.get()
    }

    /// Updates the royalty rate; the old rate is kept on error
    pub fn set_royalties(&mut self, royalties: i64) -> Result<(), ValidationError> {
        self.royalties = Royalties::new(royalties)?;
        Ok(())
    }

    /// Updates the royalty rate from an untrusted value
    pub fn set_royalties_value(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.royalties = Royalties::from_value(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_contract(royalties: i64) -> Contract {
        Contract::new(
            ContractId::new(1, 0),
            AuthorId::new(1, 0),
            BookId::new(1, 0),
            "2024-01-01".to_string(),
            Royalties::new(royalties).unwrap(),
        )
    }

    #[test]
    fn accessors() {
        let contract = make_contract(10);
        assert_eq!(contract.author(), AuthorId::new(1, 0));
        assert_eq!(contract.book(), BookId::new(1, 0));
        assert_eq!(contract.date(), "2024-01-01");
        assert_eq!(contract.royalties(), 10);
    }

    #[test]
    fn royalties_setter_revalidates() {
        let mut contract = make_contract(10);

        contract.set_royalties(100).unwrap();
        assert_eq!(contract.royalties(), 100);

        assert!(contract.set_royalties(101).unwrap_err().is_range_error());
        assert!(contract.set_royalties(-5).unwrap_err().is_range_error());
        assert_eq!(contract.royalties(), 100);
    }

    #[test]
    fn untrusted_royalties_must_be_integer() {
        let mut contract = make_contract(10);

        assert!(contract
            .set_royalties_value(&json!(12.5))
            .unwrap_err()
            .is_range_error());
        assert_eq!(contract.royalties(), 10);

        contract.set_royalties_value(&json!(0)).unwrap();
        assert_eq!(contract.royalties(), 0);
    }

    #[test]
    fn serializes_with_handles() {
        let value = serde_json::to_value(make_contract(10)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "c-1",
                "author": "a-1",
                "book": "b-1",
                "date": "2024-01-01",
                "royalties": 10,
            })
        );
    }
}
