//! Book domain model

use serde::Serialize;
use serde_json::Value;

use super::id::BookId;
use super::validation::{require_text, ValidationError};

/// A registered book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
}

impl Book {
    pub(crate) fn new(id: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the title from an untrusted value; the title is unchanged on error
    pub fn set_title_value(&mut self, value: &Value) -> Result<(), ValidationError> {
        self.title = require_text("title", value)?;
        Ok(())
    }
}
