//! Which review actions a caller may offer for an item in a given status.

use serde::Serialize;

use crate::lifecycle::Lifecycle;
use crate::status::{ApplicationStatus, ContentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Accept,
    Approve,
    Reject,
    SubmitPostUrl,
}

/// Brand-side actions for an application.
#[must_use]
pub fn application_actions(status: ApplicationStatus) -> Vec<Action> {
    let mut actions = Vec::with_capacity(3);
    if status.can_transition(ApplicationStatus::Accepted) {
        actions.push(Action::Accept);
    }
    if status.can_transition(ApplicationStatus::Rejected) {
        actions.push(Action::Reject);
    }
    actions.push(Action::View);
    actions
}

/// Actions for a content submission: brand review while pending, live-post
/// submission for the influencer once approved.
#[must_use]
pub fn content_actions(status: ContentStatus) -> Vec<Action> {
    let mut actions = Vec::with_capacity(3);
    if status.can_transition(ContentStatus::Approved) {
        actions.push(Action::Approve);
    }
    if status.can_transition(ContentStatus::Rejected) {
        actions.push(Action::Reject);
    }
    if can_submit_post_url(status) {
        actions.push(Action::SubmitPostUrl);
    }
    actions.push(Action::View);
    actions
}

/// Live post URLs may only be attached to approved content that has not yet
/// been completed or paid out.
#[must_use]
pub fn can_submit_post_url(status: ContentStatus) -> bool {
    status == ContentStatus::Approved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_application_exposes_accept_and_reject() {
        assert_eq!(
            application_actions(ApplicationStatus::Pending),
            vec![Action::Accept, Action::Reject, Action::View]
        );
    }

    #[test]
    fn responded_application_is_view_only() {
        for status in [ApplicationStatus::Accepted, ApplicationStatus::Rejected] {
            assert_eq!(application_actions(status), vec![Action::View]);
        }
    }

    #[test]
    fn only_pending_content_can_be_reviewed() {
        for &status in ContentStatus::ALL {
            let actions = content_actions(status);
            let reviewable =
                actions.contains(&Action::Approve) || actions.contains(&Action::Reject);
            assert_eq!(reviewable, status == ContentStatus::Pending, "{status}");
            assert!(actions.contains(&Action::View));
        }
    }

    #[test]
    fn approved_content_offers_post_submission() {
        assert_eq!(
            content_actions(ContentStatus::Approved),
            vec![Action::SubmitPostUrl, Action::View]
        );
        assert!(!can_submit_post_url(ContentStatus::Completed));
        assert!(!can_submit_post_url(ContentStatus::Paid));
        assert!(!can_submit_post_url(ContentStatus::Pending));
    }
}
