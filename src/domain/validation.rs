//! Field validation shared by all entities
//!
//! Typed setters cannot receive a value of the wrong type, so `InvalidType`
//! only surfaces for handles the registry did not issue and for values read
//! from untrusted input (catalog files). `InvalidRange` guards royalties on
//! every entry point.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} must be an integer between 0 and 100, got {value}")]
    InvalidRange { field: &'static str, value: String },
}

impl ValidationError {
    pub fn invalid_type(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidType { field, expected }
    }

    pub fn invalid_range(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidRange {
            field,
            value: value.to_string(),
        }
    }

    /// Returns true for the `InvalidType` variant
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValidationError::InvalidType { .. })
    }

    /// Returns true for the `InvalidRange` variant
    pub fn is_range_error(&self) -> bool {
        matches!(self, ValidationError::InvalidRange { .. })
    }
}

/// Extracts text from an untrusted value
pub fn require_text(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::invalid_type(field, "a string")),
    }
}

/// Royalty percentage, always within `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Royalties(u8);

impl Royalties {
    pub const MAX: u8 = 100;

    /// Validates a percentage
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::invalid_range("royalties", value))
        }
    }

    /// Validates an untrusted value. Anything other than an integer is a range error.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        match value.as_i64() {
            Some(n) => Self::new(n),
            None => Err(ValidationError::invalid_range("royalties", value)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Royalties {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Royalties> for u8 {
    fn from(royalties: Royalties) -> Self {
        royalties.0
    }
}

impl fmt::Display for Royalties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
