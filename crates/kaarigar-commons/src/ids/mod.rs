//! Type-safe identifier wrappers.
//!
//! Every entity gets its own newtype over the underlying i64 snowflake so
//! that a `JobId` cannot be passed where a `BidId` is expected. The wrappers
//! are cheap (`Copy`) and serialize as plain integers.

mod snowflake;

pub use snowflake::SnowflakeGenerator;

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from a raw i64.
            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw i64 value.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
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
    /// Identifier of an account (seeker, provider, or admin).
    AccountId
);
define_id!(
    /// Identifier of a job posting.
    JobId
);
define_id!(
    /// Identifier of a bid on a job.
    BidId
);
define_id!(
    /// Identifier of a category in the external catalog.
    CategoryId
);
