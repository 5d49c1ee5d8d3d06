//! Kaarigar lifecycle core.
//!
//! Owns the one part of the marketplace that encodes real state and real
//! invariants: the job/bid lifecycle. Everything here is transport-agnostic;
//! the HTTP surface lives in `kaarigar-api` and identity resolution in
//! `kaarigar-auth`. Callers pass an explicit [`Identity`] into every mutation
//! so each permission check is visible at its call site.

pub mod app_context;
pub mod error;
pub mod guard;
pub mod identity;
pub mod providers;
pub mod services;
pub mod store;

pub use app_context::AppContext;
pub use error::MarketError;
pub use identity::Identity;
