//! Status toggles for records with a closed status enumeration.

use chrono::{DateTime, Utc};
use std::fmt::Display;
use tracing::info;

use crate::error::{DomainError, DomainResult};
use crate::models::{
    AdminPermission, Administrator, Country, CountryStatus, PlanStatus, SubscriptionPlan,
};
use crate::services::access_policy::AccessPolicy;

/// Returns `requested` when it differs from `current`.
pub fn toggle<S>(current: S, requested: S) -> DomainResult<S>
where
    S: Copy + PartialEq + Display,
{
    if current == requested {
        return Err(DomainError::validation(format!(
            "Status is already {}",
            requested
        )));
    }
    Ok(requested)
}

pub fn toggle_country_status(
    policy: &AccessPolicy,
    actor: &Administrator,
    country: &mut Country,
    requested: CountryStatus,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    policy.require_permission(actor, AdminPermission::ManageCountries)?;
    let next = toggle(country.status, requested)?;

    info!(
        actor_id = %actor.id,
        country_id = %country.id,
        from = %country.status,
        to = %next,
        "Country status changed"
    );
    country.status = next;
    country.updated_at = now;
    Ok(())
}

pub fn toggle_plan_status(
    policy: &AccessPolicy,
    actor: &Administrator,
    plan: &mut SubscriptionPlan,
    requested: PlanStatus,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    policy.require_permission(actor, AdminPermission::ManagePlans)?;
    let next = toggle(plan.status, requested)?;

    info!(
        actor_id = %actor.id,
        plan_id = %plan.id,
        from = %plan.status,
        to = %next,
        "Plan status changed"
    );
    plan.status = next;
    plan.updated_at = now;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AdminRole, AdminStatus, BillingInterval, CreateCountryRequest, CreatePlanRequest,
    };

    fn country() -> Country {
        CreateCountryRequest {
            name: "Kenya".to_string(),
            iso_code: "KE".to_string(),
            dial_code: "+254".to_string(),
            flag: None,
            status: None,
        }
        .into_country(Utc::now())
    }

    fn plan() -> SubscriptionPlan {
        CreatePlanRequest {
            name: "Basic".to_string(),
            slug: "basic".to_string(),
            price_minor: 499,
            currency: "USD".to_string(),
            billing_interval: BillingInterval::Monthly,
            features: vec![],
            status: None,
        }
        .into_plan(Utc::now())
    }

    #[test]
    fn test_toggle_requires_change() {
        assert_eq!(
            toggle(AdminStatus::Active, AdminStatus::Suspended),
            Ok(AdminStatus::Suspended)
        );
        assert!(matches!(
            toggle(AdminStatus::Active, AdminStatus::Active),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_toggle_twice_second_is_validation_error() {
        let mut country = country();
        let actor = Administrator::new("Ada", "ada@example.com", AdminRole::Admin, Utc::now());
        let policy = AccessPolicy::default();

        toggle_country_status(&policy, &actor, &mut country, CountryStatus::Inactive, Utc::now())
            .unwrap();
        assert_eq!(country.status, CountryStatus::Inactive);

        let second = toggle_country_status(
            &policy,
            &actor,
            &mut country,
            CountryStatus::Inactive,
            Utc::now(),
        );
        assert!(matches!(second, Err(DomainError::Validation(_))));
        assert_eq!(country.status, CountryStatus::Inactive);
    }

    #[test]
    fn test_country_toggle_requires_permission() {
        let mut country = country();
        let actor = Administrator::new("Mo", "mo@example.com", AdminRole::Moderator, Utc::now());

        let result = toggle_country_status(
            &AccessPolicy::default(),
            &actor,
            &mut country,
            CountryStatus::Inactive,
            Utc::now(),
        );
        assert_eq!(result, Err(DomainError::PolicyDenied));
        assert_eq!(country.status, CountryStatus::Active);
    }

    #[test]
    fn test_plan_toggle() {
        let mut plan = plan();
        let actor = Administrator::new(
            "Sam",
            "sam@example.com",
            AdminRole::SubscriptionManager,
            Utc::now(),
        );
        let policy = AccessPolicy::default();
        toggle_plan_status(&policy, &actor, &mut plan, PlanStatus::Inactive, Utc::now()).unwrap();
        assert_eq!(plan.status, PlanStatus::Inactive);

        let blogger =
            Administrator::new("Bo", "bo@example.com", AdminRole::BlogManager, Utc::now());
        let denied =
            toggle_plan_status(&policy, &blogger, &mut plan, PlanStatus::Active, Utc::now());
        assert_eq!(denied, Err(DomainError::PolicyDenied));
    }
}
