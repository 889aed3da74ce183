//! Referential guards for deleting reference data.

use tracing::{info, warn};

use crate::error::{DomainError, DomainResult};
use crate::models::{AdminPermission, Administrator, Country, SubscriptionPlan};
use crate::services::access_policy::AccessPolicy;

pub fn ensure_country_deletable(country: &Country) -> DomainResult<()> {
    if country.can_delete() {
        return Ok(());
    }
    warn!(
        country_id = %country.id,
        users = country.users_count,
        "Country delete blocked by registered users"
    );
    Err(DomainError::ReferentialGuard {
        resource: format!("country {}", country.iso_code),
        dependents: country.users_count,
    })
}

pub fn ensure_plan_deletable(plan: &SubscriptionPlan) -> DomainResult<()> {
    if plan.can_delete() {
        return Ok(());
    }
    warn!(
        plan_id = %plan.id,
        subscribers = plan.active_subscribers_count,
        "Plan delete blocked by active subscribers"
    );
    Err(DomainError::ReferentialGuard {
        resource: format!("plan {}", plan.slug),
        dependents: plan.active_subscribers_count,
    })
}

/// Permission check followed by the guard. The caller removes the record on `Ok`.
pub fn delete_country(
    policy: &AccessPolicy,
    actor: &Administrator,
    country: &Country,
) -> DomainResult<()> {
    policy.require_permission(actor, AdminPermission::ManageCountries)?;
    ensure_country_deletable(country)?;
    info!(actor_id = %actor.id, country_id = %country.id, "Country delete approved");
    Ok(())
}

pub fn delete_plan(
    policy: &AccessPolicy,
    actor: &Administrator,
    plan: &SubscriptionPlan,
) -> DomainResult<()> {
    policy.require_permission(actor, AdminPermission::ManagePlans)?;
    ensure_plan_deletable(plan)?;
    info!(actor_id = %actor.id, plan_id = %plan.id, "Plan delete approved");
    Ok(())
}
