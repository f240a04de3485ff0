//! Newtype wrappers around `i64` for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `FolderId` where a
//! `DocumentId` is expected. Identifiers are assigned by the remote store;
//! the client never generates them.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw integer.
            pub fn from_i64(raw: i64) -> Self {
                Self(raw)
            }

            /// Return the inner integer value.
            pub fn into_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of a folder record.
    FolderId
}

define_id! {
    /// Identifier of a document record.
    DocumentId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse_round_trip() {
        let id = FolderId::from_i64(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<FolderId>().unwrap(), id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = DocumentId::from_i64(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: DocumentId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_distinct_types() {
        // FolderId and DocumentId with the same raw value are unrelated types;
        // this is a compile-time property, so just exercise the conversions.
        assert_eq!(i64::from(FolderId(3)), i64::from(DocumentId(3)));
    }
}
