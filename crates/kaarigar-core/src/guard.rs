//! Authorization guard.
//!
//! Pure predicates deciding, for a (role, action, ownership, state) tuple,
//! whether an action is permitted. No storage access and no hidden state:
//! callers fetch whatever job/bid state the check needs and pass it in, which
//! keeps every rule unit-testable in isolation.
//!
//! The rules:
//! - Only seekers create or cancel jobs, and only jobs they own.
//! - Only providers submit bids, and only while the job is open.
//! - Only the job owner accepts or rejects a bid; accepting additionally
//!   requires the job open and the bid pending.
//! - Admin bypasses ownership checks for all operations; state rules still
//!   apply to everyone.

use kaarigar_commons::{BidStatus, JobStatus, Role};
use std::fmt;

/// Why an action was denied. Surfaced to the caller inside
/// [`MarketError::Forbidden`](crate::MarketError::Forbidden) or mapped to a
/// state error by the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NotSeeker,
    NotProvider,
    NotOwner,
    JobNotOpen,
    BidNotPending,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Denial::NotSeeker => "only seekers may perform this action",
            Denial::NotProvider => "only providers may perform this action",
            Denial::NotOwner => "only the job owner may perform this action",
            Denial::JobNotOpen => "the job is not open",
            Denial::BidNotPending => "the bid is not pending",
        };
        f.write_str(msg)
    }
}

/// Only seekers (or admin) may post jobs.
pub fn can_create_job(role: Role) -> Result<(), Denial> {
    match role {
        Role::Seeker | Role::Admin => Ok(()),
        Role::Provider => Err(Denial::NotSeeker),
    }
}

/// Only the owning seeker (or admin) may cancel a job.
pub fn can_cancel_job(role: Role, is_owner: bool) -> Result<(), Denial> {
    require_owning_seeker(role, is_owner)
}

/// Only the owning seeker (or admin) may mark a job completed.
pub fn can_complete_job(role: Role, is_owner: bool) -> Result<(), Denial> {
    require_owning_seeker(role, is_owner)
}

/// Only providers may bid, and only while the job is open.
pub fn can_submit_bid(role: Role, job_status: JobStatus) -> Result<(), Denial> {
    if role != Role::Provider {
        return Err(Denial::NotProvider);
    }
    if job_status != JobStatus::Open {
        return Err(Denial::JobNotOpen);
    }
    Ok(())
}

/// Only the job owner (or admin) may accept a bid, and only while the job is
/// open and the bid pending.
pub fn can_accept_bid(
    role: Role,
    is_job_owner: bool,
    job_status: JobStatus,
    bid_status: BidStatus,
) -> Result<(), Denial> {
    require_owning_seeker(role, is_job_owner)?;
    if job_status != JobStatus::Open {
        return Err(Denial::JobNotOpen);
    }
    if bid_status != BidStatus::Pending {
        return Err(Denial::BidNotPending);
    }
    Ok(())
}

/// Only the job owner (or admin) may reject a bid, and only a pending one.
/// The job itself need not remain open: an owner may prune offers freely.
pub fn can_reject_bid(role: Role, is_job_owner: bool, bid_status: BidStatus) -> Result<(), Denial> {
    require_owning_seeker(role, is_job_owner)?;
    if bid_status != BidStatus::Pending {
        return Err(Denial::BidNotPending);
    }
    Ok(())
}

fn require_owning_seeker(role: Role, is_owner: bool) -> Result<(), Denial> {
    match role {
        Role::Admin => Ok(()),
        Role::Seeker if is_owner => Ok(()),
        Role::Seeker => Err(Denial::NotOwner),
        Role::Provider => Err(Denial::NotSeeker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_job_roles() {
        assert!(can_create_job(Role::Seeker).is_ok());
        assert!(can_create_job(Role::Admin).is_ok());
        assert_eq!(can_create_job(Role::Provider), Err(Denial::NotSeeker));
    }

    #[test]
    fn test_cancel_requires_ownership_except_admin() {
        assert!(can_cancel_job(Role::Seeker, true).is_ok());
        assert_eq!(can_cancel_job(Role::Seeker, false), Err(Denial::NotOwner));
        // Admin bypasses ownership
        assert!(can_cancel_job(Role::Admin, false).is_ok());
        assert_eq!(can_cancel_job(Role::Provider, true), Err(Denial::NotSeeker));
    }

    #[test]
    fn test_submit_bid_requires_provider_and_open_job() {
        assert!(can_submit_bid(Role::Provider, JobStatus::Open).is_ok());
        assert_eq!(
            can_submit_bid(Role::Seeker, JobStatus::Open),
            Err(Denial::NotProvider)
        );
        // Even admins don't bid
        assert_eq!(
            can_submit_bid(Role::Admin, JobStatus::Open),
            Err(Denial::NotProvider)
        );
        for status in [JobStatus::Assigned, JobStatus::Completed, JobStatus::Cancelled] {
            assert_eq!(
                can_submit_bid(Role::Provider, status),
                Err(Denial::JobNotOpen)
            );
        }
    }

    #[test]
    fn test_accept_bid_full_tuple() {
        assert!(can_accept_bid(Role::Seeker, true, JobStatus::Open, BidStatus::Pending).is_ok());
        assert!(can_accept_bid(Role::Admin, false, JobStatus::Open, BidStatus::Pending).is_ok());
        assert_eq!(
            can_accept_bid(Role::Seeker, false, JobStatus::Open, BidStatus::Pending),
            Err(Denial::NotOwner)
        );
        assert_eq!(
            can_accept_bid(Role::Provider, false, JobStatus::Open, BidStatus::Pending),
            Err(Denial::NotSeeker)
        );
        assert_eq!(
            can_accept_bid(Role::Seeker, true, JobStatus::Assigned, BidStatus::Pending),
            Err(Denial::JobNotOpen)
        );
        assert_eq!(
            can_accept_bid(Role::Seeker, true, JobStatus::Open, BidStatus::Rejected),
            Err(Denial::BidNotPending)
        );
        // Ownership is checked before state, so a non-owner learns nothing
        // about the job from the denial reason
        assert_eq!(
            can_accept_bid(Role::Seeker, false, JobStatus::Cancelled, BidStatus::Rejected),
            Err(Denial::NotOwner)
        );
    }

    #[test]
    fn test_reject_bid_ignores_job_status() {
        assert!(can_reject_bid(Role::Seeker, true, BidStatus::Pending).is_ok());
        assert!(can_reject_bid(Role::Admin, false, BidStatus::Pending).is_ok());
        assert_eq!(
            can_reject_bid(Role::Seeker, true, BidStatus::Accepted),
            Err(Denial::BidNotPending)
        );
        assert_eq!(
            can_reject_bid(Role::Provider, true, BidStatus::Pending),
            Err(Denial::NotSeeker)
        );
    }
}
