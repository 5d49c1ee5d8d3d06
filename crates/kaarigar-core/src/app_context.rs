//! Application context.
//!
//! Aggregates the store, external collaborators, and services behind `Arc`
//! so the HTTP server and tests share one wiring point.

use crate::providers::{CategoryCatalog, ProviderProfiles};
use crate::services::{BidService, JobService, QueryService};
use crate::store::MarketStore;
use std::sync::Arc;

/// Shared application components, constructed once at bootstrap.
pub struct AppContext {
    pub store: Arc<MarketStore>,
    pub categories: Arc<dyn CategoryCatalog>,
    pub profiles: Arc<dyn ProviderProfiles>,
    pub jobs: Arc<JobService>,
    pub bids: Arc<BidService>,
    pub queries: Arc<QueryService>,
}

impl AppContext {
    /// Wire up a fresh context over an empty store.
    ///
    /// The category catalog and provider profiles are external
    /// collaborators; the caller decides how they are backed (static seed
    /// in the server, fixtures in tests).
    pub fn init(
        categories: Arc<dyn CategoryCatalog>,
        profiles: Arc<dyn ProviderProfiles>,
    ) -> Arc<Self> {
        let store = Arc::new(MarketStore::new());
        let jobs = Arc::new(JobService::new(store.clone(), categories.clone()));
        let bids = Arc::new(BidService::new(store.clone()));
        let queries = Arc::new(QueryService::new(store.clone(), categories.clone()));

        Arc::new(Self {
            store,
            categories,
            profiles,
            jobs,
            bids,
            queries,
        })
    }
}
