//! Post report moderation models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Why a post was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportReason {
    Spam,
    Misinformation,
    Harassment,
    Violence,
    HateSpeech,
    Nudity,
    NotInterested,
    Other,
}

impl ReportReason {
    /// Display label used on the reports screen.
    pub fn label(&self) -> &'static str {
        match self {
            ReportReason::Spam => "Spam",
            ReportReason::Misinformation => "Misinformation",
            ReportReason::Harassment => "Harassment",
            ReportReason::Violence => "Violence",
            ReportReason::HateSpeech => "Hate speech",
            ReportReason::Nudity => "Nudity",
            ReportReason::NotInterested => "Not interested",
            ReportReason::Other => "Other",
        }
    }
}

impl FromStr for ReportReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "spam" => Ok(ReportReason::Spam),
            "misinformation" => Ok(ReportReason::Misinformation),
            "harassment" => Ok(ReportReason::Harassment),
            "violence" => Ok(ReportReason::Violence),
            "hate_speech" => Ok(ReportReason::HateSpeech),
            "nudity" => Ok(ReportReason::Nudity),
            "not_interested" => Ok(ReportReason::NotInterested),
            "other" => Ok(ReportReason::Other),
            _ => Err(format!("Unknown report reason: {}", s)),
        }
    }
}

/// Moderation status of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    UnderReview,
    Dismissed,
    ActionTaken,
    Resolved,
}

impl ReportStatus {
    /// No transition is offered once a report reaches one of these.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReportStatus::Dismissed | ReportStatus::ActionTaken | ReportStatus::Resolved
        )
    }

    pub fn all() -> &'static [ReportStatus] {
        &[
            ReportStatus::Pending,
            ReportStatus::UnderReview,
            ReportStatus::Dismissed,
            ReportStatus::ActionTaken,
            ReportStatus::Resolved,
        ]
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "under_review" => Ok(ReportStatus::UnderReview),
            "dismissed" => Ok(ReportStatus::Dismissed),
            "action_taken" => Ok(ReportStatus::ActionTaken),
            "resolved" => Ok(ReportStatus::Resolved),
            _ => Err(format!("Unknown report status: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::UnderReview => write!(f, "under_review"),
            ReportStatus::Dismissed => write!(f, "dismissed"),
            ReportStatus::ActionTaken => write!(f, "action_taken"),
            ReportStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// A user's report against a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PostReport {
    pub id: Uuid,
    pub post_id: Uuid,
    pub reporter_id: Uuid,
    pub reason: ReportReason,
    pub description: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    /// Administrator who moved the report out of `pending`.
    pub reviewed_by: Option<Uuid>,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl PostReport {
    pub fn new(
        post_id: Uuid,
        reporter_id: Uuid,
        reason: ReportReason,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            reporter_id,
            reason,
            description,
            status: ReportStatus::Pending,
            created_at: now,
            reviewed_by: None,
            reviewed_at: None,
        }
    }
}

/// Submitted by app users when reporting a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateReportRequest {
    pub post_id: Uuid,
    pub reason: ReportReason,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Moderator status update for a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateReportStatusRequest {
    pub status: ReportStatus,
}
