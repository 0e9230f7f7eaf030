//! Strongly-typed ID wrappers for ledger entities
//!
//! IDs are UUIDv7, so they sort by creation time. Ordering on an ID is what
//! breaks ties between equally expensive expenses in rankings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new time-ordered ID
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Short form shown to users: prefix plus the last 8 hex digits
            ///
            /// The leading digits of a v7 UUID are a timestamp and collide for
            /// IDs created close together, so the random tail is used instead.
            pub fn short(&self) -> String {
                let simple = self.0.simple().to_string();
                format!("{}{}", $display_prefix, &simple[simple.len() - 8..])
            }

            /// Whether a user-supplied identifier refers to this ID
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim();
                identifier.eq_ignore_ascii_case(&self.short())
                    || Uuid::parse_str(identifier).map_or(false, |uuid| uuid == self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s.trim())?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(RecurringId, "rec-");
