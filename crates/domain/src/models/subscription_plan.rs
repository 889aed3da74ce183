//! Subscription plan management models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Active,
    Inactive,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "inactive" => Ok(PlanStatus::Inactive),
            _ => Err(format!("Unknown plan status: {}", s)),
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanStatus::Active => write!(f, "active"),
            PlanStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Monthly,
    Quarterly,
    Yearly,
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingInterval::Monthly => write!(f, "monthly"),
            BillingInterval::Quarterly => write!(f, "quarterly"),
            BillingInterval::Yearly => write!(f, "yearly"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    /// Price in minor currency units (cents).
    pub price_minor: i64,
    pub currency: String,
    pub billing_interval: BillingInterval,
    pub features: Vec<String>,
    pub status: PlanStatus,
    pub active_subscribers_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SubscriptionPlan {
    /// Whether the delete button should be enabled.
    pub fn can_delete(&self) -> bool {
        self.active_subscribers_count == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreatePlanRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(length(min = 2, max = 100, message = "Slug must be 2-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_slug"))]
    pub slug: String,
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price_minor: i64,
    #[validate(custom(function = "shared::validation::validate_currency_code"))]
    pub currency: String,
    pub billing_interval: BillingInterval,
    #[serde(default)]
    #[validate(length(max = 50, message = "At most 50 features per plan"))]
    pub features: Vec<String>,
    pub status: Option<PlanStatus>,
}

impl CreatePlanRequest {
    pub fn into_plan(self, now: DateTime<Utc>) -> SubscriptionPlan {
        SubscriptionPlan {
            id: Uuid::new_v4(),
            name: self.name,
            slug: self.slug,
            price_minor: self.price_minor,
            currency: self.currency,
            billing_interval: self.billing_interval,
            features: self.features,
            status: self.status.unwrap_or_default(),
            active_subscribers_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
