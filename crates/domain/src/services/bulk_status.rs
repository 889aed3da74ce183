//! Bulk administrator status change with partial-success reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::{AdminStatus, Administrator};
use crate::services::access_policy::AccessPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkFailureReason {
    NotFound,
    NotAuthorized,
    NoChange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BulkFailure {
    pub id: Uuid,
    pub reason: BulkFailureReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BulkStatusOutcome {
    pub updated: Vec<Uuid>,
    pub failed: Vec<BulkFailure>,
}

impl BulkStatusOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies `new_status` to every requested administrator the actor may change.
///
/// Each id gets the same check as a single status change. Duplicate ids are
/// processed once, in first-seen order.
pub fn bulk_change_status(
    policy: &AccessPolicy,
    actor: &Administrator,
    targets: &mut [Administrator],
    ids: &[Uuid],
    new_status: AdminStatus,
    max_bulk_size: usize,
    now: DateTime<Utc>,
) -> DomainResult<BulkStatusOutcome> {
    let mut seen = HashSet::new();
    let ids: Vec<Uuid> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

    if ids.is_empty() {
        return Err(DomainError::validation("Select at least one administrator"));
    }
    if ids.len() > max_bulk_size {
        return Err(DomainError::validation(format!(
            "At most {} administrators can be changed at once",
            max_bulk_size
        )));
    }

    let mut outcome = BulkStatusOutcome::default();
    for id in ids {
        let Some(target) = targets.iter_mut().find(|t| t.id == id) else {
            outcome.failed.push(BulkFailure {
                id,
                reason: BulkFailureReason::NotFound,
            });
            continue;
        };

        let reason = match policy.can_change_status(actor, target, new_status) {
            Ok(true) => {
                target.status = new_status;
                target.updated_at = now;
                outcome.updated.push(id);
                continue;
            }
            Ok(false) => BulkFailureReason::NotAuthorized,
            Err(_) => BulkFailureReason::NoChange,
        };
        debug!(actor_id = %actor.id, target_id = %id, reason = ?reason, "Bulk status item skipped");
        outcome.failed.push(BulkFailure { id, reason });
    }

    info!(
        actor_id = %actor.id,
        status = %new_status,
        updated = outcome.updated.len(),
        failed = outcome.failed.len(),
        "Bulk status change applied"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdminRole;

    fn admin(role: AdminRole) -> Administrator {
        Administrator::new("Test", "test@example.com", role, Utc::now())
    }

    #[test]
    fn test_partial_success() {
        let actor = admin(AdminRole::Admin);
        let mut targets = vec![
            admin(AdminRole::Moderator),
            admin(AdminRole::SuperAdmin),
            admin(AdminRole::BlogManager),
        ];
        targets[2].status = AdminStatus::Suspended;
        let missing = Uuid::new_v4();
        let ids = vec![targets[0].id, targets[1].id, targets[2].id, missing];

        let outcome = bulk_change_status(
            &AccessPolicy::default(),
            &actor,
            &mut targets,
            &ids,
            AdminStatus::Suspended,
            50,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(outcome.updated, vec![ids[0]]);
        assert_eq!(
            outcome.failed,
            vec![
                BulkFailure { id: ids[1], reason: BulkFailureReason::NotAuthorized },
                BulkFailure { id: ids[2], reason: BulkFailureReason::NoChange },
                BulkFailure { id: missing, reason: BulkFailureReason::NotFound },
            ]
        );
        assert_eq!(targets[0].status, AdminStatus::Suspended);
        assert_eq!(targets[1].status, AdminStatus::Active);
        assert!(!outcome.is_complete());
    }

    #[test]
    fn test_actor_in_selection_is_not_authorized() {
        let actor = admin(AdminRole::SuperAdmin);
        let mut targets = vec![actor.clone()];
        let outcome = bulk_change_status(
            &AccessPolicy::default(),
            &actor,
            &mut targets,
            &[actor.id],
            AdminStatus::Inactive,
            50,
            Utc::now(),
        )
        .unwrap();
        assert!(outcome.updated.is_empty());
        assert_eq!(outcome.failed[0].reason, BulkFailureReason::NotAuthorized);
        assert_eq!(targets[0].status, AdminStatus::Active);
    }

    #[test]
    fn test_duplicates_processed_once() {
        let actor = admin(AdminRole::SuperAdmin);
        let mut targets = vec![admin(AdminRole::Admin)];
        let id = targets[0].id;
        let outcome = bulk_change_status(
            &AccessPolicy::default(),
            &actor,
            &mut targets,
            &[id, id, id],
            AdminStatus::Inactive,
            2,
            Utc::now(),
        )
        .unwrap();
        assert_eq!(outcome.updated, vec![id]);
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_empty_and_oversized_requests() {
        let actor = admin(AdminRole::SuperAdmin);
        let mut targets: Vec<Administrator> = vec![];
        assert!(matches!(
            bulk_change_status(
                &AccessPolicy::default(),
                &actor,
                &mut targets,
                &[],
                AdminStatus::Inactive,
                10,
                Utc::now()
            ),
            Err(DomainError::Validation(_))
        ));

        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        assert!(matches!(
            bulk_change_status(
                &AccessPolicy::default(),
                &actor,
                &mut targets,
                &ids,
                AdminStatus::Inactive,
                2,
                Utc::now()
            ),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_outcome_serialization() {
        let failure = BulkFailure {
            id: Uuid::nil(),
            reason: BulkFailureReason::NotAuthorized,
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["reason"], "not_authorized");
    }
}
