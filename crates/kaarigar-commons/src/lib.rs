//! Shared domain types for Kaarigar.
//!
//! This crate holds the types every other crate agrees on: type-safe
//! identifiers, the account role, job/bid statuses, and the entities
//! themselves. It deliberately has no storage or HTTP dependencies so that
//! the core, auth, and API crates can all depend on it without cycles.

pub mod ids;
pub mod models;

pub use ids::{AccountId, BidId, CategoryId, JobId, SnowflakeGenerator};
pub use models::{Account, Bid, BidStatus, Category, Job, JobStatus, Role};
