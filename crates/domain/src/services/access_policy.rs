//! Access policy for administrator management.
//!
//! Every decision takes the acting administrator explicitly. Predicates
//! return `false` for an ordinary denial; only malformed input (unknown role
//! or permission names, no-op status changes) is an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{DomainError, DomainResult};
use crate::models::{AdminField, AdminPermission, AdminRole, AdminStatus, Administrator};

/// Action requested against an administrator record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    View,
    Edit,
    ChangeStatus,
    ResetPassword,
    Delete,
}

impl std::fmt::Display for AdminAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminAction::View => write!(f, "view"),
            AdminAction::Edit => write!(f, "edit"),
            AdminAction::ChangeStatus => write!(f, "change_status"),
            AdminAction::ResetPassword => write!(f, "reset_password"),
            AdminAction::Delete => write!(f, "delete"),
        }
    }
}

/// Rank used for "higher-privileged" comparisons.
pub fn role_rank(role: AdminRole) -> u8 {
    role.rank()
}

/// Role defaults plus explicit grants. Super admins always get the full catalog.
pub fn effective_permissions(
    role: AdminRole,
    explicit: &BTreeSet<AdminPermission>,
) -> BTreeSet<AdminPermission> {
    if role.is_super_admin() {
        return AdminPermission::all().iter().copied().collect();
    }
    let mut resolved = role.default_permissions();
    resolved.extend(explicit.iter().copied());
    resolved
}

/// Parses a role name, logging unknown values.
pub fn parse_role(role: &str) -> DomainResult<AdminRole> {
    AdminRole::from_str(role).map_err(|e| {
        warn!(role = %role, "Unknown admin role supplied");
        DomainError::invalid_field("role", e)
    })
}

/// Parses permission names against the catalog, deduplicating.
pub fn parse_permissions<S: AsRef<str>>(names: &[S]) -> DomainResult<BTreeSet<AdminPermission>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            AdminPermission::from_str(name).map_err(|e| {
                warn!(permission = %name, "Unknown admin permission supplied");
                DomainError::invalid_field("permissions", e)
            })
        })
        .collect()
}

/// Resolves the effective permission set for a role and explicit permission names.
pub fn resolve_effective_permissions<S: AsRef<str>>(
    role: AdminRole,
    explicit: &[S],
) -> DomainResult<BTreeSet<AdminPermission>> {
    let explicit = parse_permissions(explicit)?;
    Ok(effective_permissions(role, &explicit))
}

fn is_self(actor: &Administrator, target: &Administrator) -> bool {
    actor.id == target.id
}

/// Allow/deny decisions for the administrator management screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    /// Lets `admin` actors delete strictly lower-ranked administrators.
    pub admins_may_delete_subordinates: bool,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            admins_may_delete_subordinates: true,
        }
    }
}

impl AccessPolicy {
    pub fn new(admins_may_delete_subordinates: bool) -> Self {
        Self {
            admins_may_delete_subordinates,
        }
    }

    /// Self is always visible. Super admins and admins see everyone; other
    /// roles see administrators that do not outrank them.
    pub fn can_view(&self, actor: &Administrator, target: &Administrator) -> bool {
        if is_self(actor, target) {
            return true;
        }
        match actor.role {
            AdminRole::SuperAdmin | AdminRole::Admin => true,
            role => !target.role.outranks(role),
        }
    }

    /// Management edit of another administrator's record.
    ///
    /// Always false for self: own role, status and permissions are never
    /// editable, and own profile fields go through
    /// [`can_edit_self_profile_only`](Self::can_edit_self_profile_only).
    pub fn can_edit(&self, actor: &Administrator, target: &Administrator) -> bool {
        if is_self(actor, target) {
            return false;
        }
        match actor.role {
            AdminRole::SuperAdmin => true,
            AdminRole::Admin => !target.role.is_super_admin(),
            _ => false,
        }
    }

    /// Gate for the self-service profile path.
    pub fn can_edit_self_profile_only(
        &self,
        actor: &Administrator,
        target: &Administrator,
    ) -> bool {
        is_self(actor, target)
    }

    /// Field-aware edit check.
    pub fn can_edit_fields(
        &self,
        actor: &Administrator,
        target: &Administrator,
        fields: &[AdminField],
    ) -> bool {
        if is_self(actor, target) {
            return fields.iter().all(AdminField::is_profile_field);
        }
        self.can_edit(actor, target)
    }

    /// No self-deletion. Super admins may delete any other administrator;
    /// admins only strictly lower-ranked ones when enabled.
    pub fn can_delete(&self, actor: &Administrator, target: &Administrator) -> bool {
        if is_self(actor, target) {
            return false;
        }
        match actor.role {
            AdminRole::SuperAdmin => true,
            AdminRole::Admin => {
                self.admins_may_delete_subordinates && actor.role.outranks(target.role)
            }
            _ => false,
        }
    }

    /// Same gating as [`can_edit`](Self::can_edit). Requesting the current
    /// status is a validation error for an otherwise authorized actor.
    pub fn can_change_status(
        &self,
        actor: &Administrator,
        target: &Administrator,
        new_status: AdminStatus,
    ) -> DomainResult<bool> {
        if !self.can_edit(actor, target) {
            return Ok(false);
        }
        if target.status == new_status {
            return Err(DomainError::validation(format!(
                "Administrator is already {}",
                new_status
            )));
        }
        Ok(true)
    }

    /// Own password through the profile path; others like [`can_edit`](Self::can_edit).
    pub fn can_reset_password(&self, actor: &Administrator, target: &Administrator) -> bool {
        is_self(actor, target) || self.can_edit(actor, target)
    }

    /// Whether the actor holds `permission`, by role default or explicit grant.
    pub fn has_permission(&self, actor: &Administrator, permission: AdminPermission) -> bool {
        actor.is_super_admin()
            || effective_permissions(actor.role, &actor.permissions).contains(&permission)
    }

    pub fn require_permission(
        &self,
        actor: &Administrator,
        permission: AdminPermission,
    ) -> DomainResult<()> {
        if self.has_permission(actor, permission) {
            Ok(())
        } else {
            debug!(
                actor_id = %actor.id,
                role = %actor.role,
                permission = %permission,
                "Permission denied"
            );
            Err(DomainError::PolicyDenied)
        }
    }

    /// Button-level decision for an action. Status changes are judged on
    /// gating only; use [`can_change_status`](Self::can_change_status) before writing.
    pub fn decide(
        &self,
        actor: &Administrator,
        target: &Administrator,
        action: AdminAction,
    ) -> bool {
        match action {
            AdminAction::View => self.can_view(actor, target),
            AdminAction::Edit | AdminAction::ChangeStatus => self.can_edit(actor, target),
            AdminAction::ResetPassword => self.can_reset_password(actor, target),
            AdminAction::Delete => self.can_delete(actor, target),
        }
    }

    /// [`decide`](Self::decide) as a `Result` for request handlers.
    pub fn authorize(
        &self,
        actor: &Administrator,
        target: &Administrator,
        action: AdminAction,
    ) -> DomainResult<()> {
        if self.decide(actor, target, action) {
            Ok(())
        } else {
            debug!(
                actor_id = %actor.id,
                actor_role = %actor.role,
                target_id = %target.id,
                target_role = %target.role,
                action = %action,
                "Access denied"
            );
            Err(DomainError::PolicyDenied)
        }
    }
}
