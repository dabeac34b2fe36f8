//! Typed entity identifiers.
//!
//! Entities are keyed by database-assigned integers. Wrapping them keeps a
//! `UserId` from being passed where a `PostId` (or an age, or a count) is
//! expected. A `UserId` also has one canonical string form, which is what
//! the session store holds as the value of every session entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Defines an `i64` newtype identifier.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
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

define_id!(
    /// Unique, immutable identifier of a user.
    UserId
);

define_id!(
    /// Identifier of a post.
    PostId
);
