//! Author domain model
//!
//! An author owns the list of contracts it has signed. The list only grows,
//! and only through [`Registry::sign_contract`](super::Registry::sign_contract);
//! derived queries (books, total royalties) live on the registry because they
//! need to resolve the contract handles.

use serde::Serialize;
use serde_json::Value;

use super::id::{AuthorId, ContractId};
use super::validation::{require_text, ValidationError};

/// A registered author
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    contracts: Vec<ContractId>,
}

impl Author {
    pub(crate) fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            contracts: Vec::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the name from an untrusted value; the name is unchanged on error
    pub fn set_name_value(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.name = require_text("name", value)?;
        Ok(())
    }

    /// Contracts signed by this author, oldest first
    pub fn contracts(&self) -> &[ContractId] {
        &self.contracts
    }

    pub(crate) fn push_contract(&mut self, contract: ContractId) {
        self.contracts.push(contract);
    }
}
