//! Handles for registered entities
//!
//! Handle Format:
//! - Books: `b-{n}` (e.g., `b-1`)
//! - Authors: `a-{n}` (e.g., `a-3`)
//! - Contracts: `c-{n}` (e.g., `c-12`)
//!
//! `n` is the 1-based registration order within one registry. Every handle
//! also carries the key of the registry that issued it, so a handle from a
//! different registry (or from before a `clear`) never resolves.

use serde::Serialize;
use std::fmt;

/// Identifies the registry (and its generation) that issued a handle
pub(crate) type RegistryKey = u64;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            registry: RegistryKey,
            index: usize,
        }

        impl $name {
            pub(crate) fn new(registry: RegistryKey, index: usize) -> Self {
                Self { registry, index }
            }

            pub(crate) fn registry(&self) -> RegistryKey {
                self.registry
            }

            /// Zero-based position in the registry's list
            pub fn index(&self) -> usize {
                self.index
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&format!(concat!($prefix, "-{}"), self.index + 1))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };
}

entity_id!(
    /// Handle to a [`Book`](super::Book)
    BookId,
    "b"
);

entity_id!(
    /// Handle to an [`Author`](super::Author)
    AuthorId,
    "a"
);

entity_id!(
    /// Handle to a [`Contract`](super::Contract)
    ContractId,
    "c"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based_with_prefix() {
        assert_eq!(BookId::new(1, 0).to_string(), "b-1");
        assert_eq!(AuthorId::new(1, 2).to_string(), "a-3");
        assert_eq!(ContractId::new(1, 11).to_string(), "c-12");
    }

    #[test]
    fn display_respects_width() {
        assert_eq!(format!("{:<5}|", BookId::new(1, 0)), "b-1  |");
    }

    #[test]
    fn ids_from_different_registries_differ() {
        assert_ne!(BookId::new(1, 0), BookId::new(2, 0));
        assert_eq!(BookId::new(1, 0), BookId::new(1, 0));
    }

    #[test]
    fn serializes_as_display_string() {
        let json = serde_json::to_string(&ContractId::new(9, 4)).unwrap();
        assert_eq!(json, "\"c-5\"");
    }
}
