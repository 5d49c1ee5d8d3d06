//! Shared harness for integration tests.
//!
//! Builds a seeded application context the way the server's bootstrap does,
//! minus the HTTP layer: tests drive the services directly with explicit
//! identities.

use bigdecimal::BigDecimal;
use kaarigar_auth::InMemoryAccountDirectory;
use kaarigar_commons::{AccountId, Bid, Category, CategoryId, Job, JobId, Role};
use kaarigar_core::providers::{InMemoryProviderProfiles, StaticCategoryCatalog};
use kaarigar_core::services::{NewBid, NewJob};
use kaarigar_core::{AppContext, Identity};
use std::sync::Arc;

pub const CATEGORY_PLUMBING: i64 = 1;
pub const CATEGORY_ELECTRICAL: i64 = 2;

pub struct TestMarket {
    pub ctx: Arc<AppContext>,
    pub directory: Arc<InMemoryAccountDirectory>,
    pub seeker: Identity,
    pub other_seeker: Identity,
    pub provider_a: Identity,
    pub provider_b: Identity,
    pub provider_c: Identity,
    pub admin: Identity,
}

impl TestMarket {
    pub fn new() -> Self {
        let catalog = Arc::new(StaticCategoryCatalog::new(vec![
            Category::new(CategoryId::new(CATEGORY_PLUMBING), "Plumbing"),
            Category::new(CategoryId::new(CATEGORY_ELECTRICAL), "Electrical"),
        ]));
        let profiles = Arc::new(InMemoryProviderProfiles::new());
        profiles.register(AccountId::new(20), "Provider A");
        profiles.register(AccountId::new(21), "Provider B");

        let directory = Arc::new(InMemoryAccountDirectory::new());
        directory.seed("tok-admin", 1, Role::Admin, "admin@example.com");
        directory.seed("tok-seeker", 10, Role::Seeker, "seeker@example.com");
        directory.seed("tok-seeker2", 11, Role::Seeker, "seeker2@example.com");
        directory.seed("tok-provider-a", 20, Role::Provider, "a@example.com");
        directory.seed("tok-provider-b", 21, Role::Provider, "b@example.com");
        directory.seed("tok-provider-c", 22, Role::Provider, "c@example.com");

        Self {
            ctx: AppContext::init(catalog, profiles),
            directory,
            seeker: Identity::new(AccountId::new(10), Role::Seeker),
            other_seeker: Identity::new(AccountId::new(11), Role::Seeker),
            provider_a: Identity::new(AccountId::new(20), Role::Provider),
            provider_b: Identity::new(AccountId::new(21), Role::Provider),
            provider_c: Identity::new(AccountId::new(22), Role::Provider),
            admin: Identity::new(AccountId::new(1), Role::Admin),
        }
    }

    /// Post an open job as the default seeker.
    pub fn open_job(&self) -> Job {
        self.ctx
            .jobs
            .create(
                &self.seeker,
                NewJob {
                    title: "Fix kitchen sink".into(),
                    description: "Leaking under the counter".into(),
                    category_id: CategoryId::new(CATEGORY_PLUMBING),
                    location: "Karachi".into(),
                    budget: Some(BigDecimal::from(8000)),
                    image_urls: Vec::new(),
                },
            )
            .expect("job creation should succeed")
    }

    /// Submit a pending bid on a job.
    pub fn pending_bid(&self, job_id: JobId, by: &Identity, cost: i64) -> Bid {
        self.ctx
            .bids
            .submit(
                by,
                NewBid {
                    job_id,
                    proposed_cost: BigDecimal::from(cost),
                    estimated_time: "2-3 days".into(),
                    proposal_message: "Can start tomorrow".into(),
                },
            )
            .expect("bid submission should succeed")
    }

    /// Assert the invariant that holds after every operation:
    /// status ∈ {assigned, completed} ⇔ assigned_provider_id is set,
    /// and at most one bid on the job is accepted.
    pub fn assert_job_invariants(&self, job_id: JobId) {
        let job = self.ctx.jobs.get(job_id).expect("job should exist");
        assert_eq!(
            job.status.requires_assigned_provider(),
            job.assigned_provider_id.is_some(),
            "provider/status invariant violated for job {}: status={}, provider={:?}",
            job_id,
            job.status,
            job.assigned_provider_id
        );

        let accepted: Vec<_> = self
            .ctx
            .bids
            .list_for_job(job_id)
            .expect("job should exist")
            .into_iter()
            .filter(|b| b.status == kaarigar_commons::BidStatus::Accepted)
            .collect();
        assert!(
            accepted.len() <= 1,
            "job {} has {} accepted bids",
            job_id,
            accepted.len()
        );
        if let Some(provider) = job.assigned_provider_id {
            assert_eq!(accepted.len(), 1);
            assert_eq!(accepted[0].provider_id, provider);
        }
    }
}
