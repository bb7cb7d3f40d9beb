//! Finite-state machines for every status-bearing entity.
//!
//! Each status enum implements [`Lifecycle`] with an explicit table of the
//! moves it permits. Both the client (to gate actions) and the server (to
//! reject illegal updates) consult the same tables.

use crate::status::{ApplicationStatus, CampaignStatus, ContentStatus, InquiryStatus, PostStatus};
use crate::CoreError;

pub trait Lifecycle: Copy + Eq + std::fmt::Display + 'static {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Every variant, in declaration order.
    fn all() -> &'static [Self];

    /// Whether `self -> to` is a legal move. Staying in place is not a move.
    fn can_transition(self, to: Self) -> bool;

    fn is_terminal(self) -> bool {
        Self::all().iter().all(|&to| !self.can_transition(to))
    }

    fn next_states(self) -> Vec<Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|&to| self.can_transition(to))
            .collect()
    }
}

/// Check a move against the entity's table.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] when the table does not permit
/// `from -> to`.
pub fn ensure_transition<S: Lifecycle>(from: S, to: S) -> Result<(), CoreError> {
    if from.can_transition(to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            entity: S::ENTITY,
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

impl Lifecycle for CampaignStatus {
    const ENTITY: &'static str = "campaign";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn can_transition(self, to: Self) -> bool {
        use CampaignStatus::{Active, Cancelled, Completed, Draft, Paused};
        matches!(
            (self, to),
            (Draft, Active | Cancelled)
                | (Active, Paused | Completed | Cancelled)
                | (Paused, Active | Completed | Cancelled)
        )
    }
}

impl Lifecycle for ApplicationStatus {
    const ENTITY: &'static str = "application";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn can_transition(self, to: Self) -> bool {
        use ApplicationStatus::{Accepted, Pending, Rejected};
        matches!((self, to), (Pending, Accepted | Rejected))
    }
}

impl Lifecycle for ContentStatus {
    const ENTITY: &'static str = "content submission";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn can_transition(self, to: Self) -> bool {
        use ContentStatus::{Approved, Completed, Paid, Pending, Rejected};
        matches!(
            (self, to),
            (Pending, Approved | Rejected) | (Approved, Completed) | (Completed, Paid)
        )
    }
}

impl Lifecycle for PostStatus {
    const ENTITY: &'static str = "published post";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn can_transition(self, to: Self) -> bool {
        use PostStatus::{Deleted, InvalidUrl, PendingVerification, Verified};
        matches!(
            (self, to),
            (PendingVerification, Verified | InvalidUrl | Deleted) | (Verified, Deleted)
        )
    }
}

impl Lifecycle for InquiryStatus {
    const ENTITY: &'static str = "inquiry";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn can_transition(self, to: Self) -> bool {
        use InquiryStatus::{Accepted, Completed, Contacted, Declined, Negotiating, Pending};
        matches!(
            (self, to),
            (Pending, Contacted | Negotiating | Accepted | Declined)
                | (Contacted, Negotiating | Accepted | Declined)
                | (Negotiating, Accepted | Declined)
                | (Accepted, Completed)
        )
    }
}
