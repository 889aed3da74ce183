//! Post report moderation workflow.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::models::{PostReport, ReportStatus};

/// One-directional status machine for post reports.
///
/// ```text
/// pending ──► under_review ──► terminal
///    └───────────────────────► terminal
///
/// terminal = dismissed | action_taken | resolved
/// ```
pub struct PostReportStatusMachine;

impl PostReportStatusMachine {
    /// Whether `requested` is reachable from `current` in one step.
    pub fn is_allowed(current: ReportStatus, requested: ReportStatus) -> bool {
        match current {
            ReportStatus::Pending => requested != ReportStatus::Pending,
            ReportStatus::UnderReview => requested.is_terminal(),
            ReportStatus::Dismissed | ReportStatus::ActionTaken | ReportStatus::Resolved => false,
        }
    }

    /// Statuses offered from `current`, in display order.
    pub fn next_statuses(current: ReportStatus) -> Vec<ReportStatus> {
        ReportStatus::all()
            .iter()
            .copied()
            .filter(|next| Self::is_allowed(current, *next))
            .collect()
    }

    pub fn transition(
        current: ReportStatus,
        requested: ReportStatus,
    ) -> DomainResult<ReportStatus> {
        if Self::is_allowed(current, requested) {
            Ok(requested)
        } else {
            warn!(from = %current, to = %requested, "Rejected report status transition");
            Err(DomainError::InvalidTransition {
                from: current,
                to: requested,
            })
        }
    }
}

impl PostReport {
    /// Moves the report to `requested`. The reviewer is stamped only when
    /// the report leaves `pending`.
    ///
    /// The record is left untouched when the transition is rejected.
    pub fn apply_status(
        &mut self,
        requested: ReportStatus,
        reviewer_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let next = PostReportStatusMachine::transition(self.status, requested)?;
        info!(
            report_id = %self.id,
            reviewer_id = %reviewer_id,
            from = %self.status,
            to = %next,
            "Report status changed"
        );
        if self.status == ReportStatus::Pending {
            self.reviewed_by = Some(reviewer_id);
            self.reviewed_at = Some(now);
        }
        self.status = next;
        Ok(())
    }
}
