//! Administrator management actions.
//!
//! Every action checks the policy and validates input before touching the
//! target, so a rejected action leaves the record unchanged.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use validator::Validate;

use shared::password::{generate_temporary_password, hash_password};

use crate::error::{DomainError, DomainResult};
use crate::models::{
    AdminPermission, AdminStatus, Administrator, CreateAdminRequest, UpdateAdminRequest,
    UpdateProfileRequest,
};
use crate::services::access_policy::{
    effective_permissions, parse_permissions, AccessPolicy, AdminAction,
};

fn hash(password: &str) -> DomainResult<String> {
    hash_password(password).map_err(|e| DomainError::Internal(e.to_string()))
}

fn deny() -> DomainError {
    DomainError::PolicyDenied
}

/// Only a super admin may grant a permission it does not itself hold.
fn ensure_grantable(
    actor: &Administrator,
    granted: &BTreeSet<AdminPermission>,
) -> DomainResult<()> {
    if actor.is_super_admin() {
        return Ok(());
    }
    let held = effective_permissions(actor.role, &actor.permissions);
    if let Some(permission) = granted.iter().find(|p| !held.contains(p)) {
        debug!(
            actor_id = %actor.id,
            permission = %permission,
            "Grant of unheld permission denied"
        );
        return Err(deny());
    }
    Ok(())
}

pub fn create_admin(
    policy: &AccessPolicy,
    actor: &Administrator,
    request: CreateAdminRequest,
    now: DateTime<Utc>,
) -> DomainResult<Administrator> {
    policy.require_permission(actor, AdminPermission::ManageAdmins)?;
    if !actor.is_super_admin() && !actor.role.outranks(request.role) {
        return Err(deny());
    }
    request.validate()?;
    let permissions = parse_permissions(&request.permissions)?;
    ensure_grantable(actor, &permissions)?;

    let mut admin = Administrator::new(request.name, request.email, request.role, now);
    admin.phone = request.phone;
    admin.profile_image = request.profile_image;
    admin.password_hash = hash(&request.password)?;
    admin.permissions = permissions;
    admin.status = request.status.unwrap_or_default();

    info!(
        actor_id = %actor.id,
        admin_id = %admin.id,
        role = %admin.role,
        "Administrator created"
    );
    Ok(admin)
}

/// Self-service edit of the actor's own profile fields.
pub fn update_profile(
    policy: &AccessPolicy,
    actor: &Administrator,
    target: &mut Administrator,
    request: UpdateProfileRequest,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    if !policy.can_edit_self_profile_only(actor, target)
        || !policy.can_edit_fields(actor, target, &request.touched_fields())
    {
        return Err(deny());
    }
    request.validate()?;
    let password_hash = request.password.as_deref().map(hash).transpose()?;

    if let Some(name) = request.name {
        target.name = name;
    }
    if let Some(email) = request.email {
        target.email = email;
    }
    if let Some(phone) = request.phone {
        target.phone = Some(phone);
    }
    if let Some(profile_image) = request.profile_image {
        target.profile_image = Some(profile_image);
    }
    if let Some(password_hash) = password_hash {
        target.password_hash = password_hash;
        target.force_password_change = false;
    }
    target.updated_at = now;

    info!(admin_id = %target.id, "Administrator profile updated");
    Ok(())
}

/// Management edit of another administrator.
pub fn update_admin(
    policy: &AccessPolicy,
    actor: &Administrator,
    target: &mut Administrator,
    request: UpdateAdminRequest,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    let fields = request.touched_fields();
    if fields.is_empty() {
        return Err(DomainError::validation("No changes submitted"));
    }
    if !policy.can_edit_fields(actor, target, &fields) {
        return Err(deny());
    }
    if let Some(role) = request.role {
        if !actor.is_super_admin() && !actor.role.outranks(role) {
            return Err(deny());
        }
    }
    if let Some(status) = request.status {
        if !policy.can_change_status(actor, target, status)? {
            return Err(deny());
        }
    }
    request.validate()?;
    let permissions = request
        .permissions
        .as_deref()
        .map(parse_permissions::<String>)
        .transpose()?;
    if let Some(permissions) = &permissions {
        ensure_grantable(actor, permissions)?;
    }

    if let Some(name) = request.name {
        target.name = name;
    }
    if let Some(email) = request.email {
        target.email = email;
    }
    if let Some(phone) = request.phone {
        target.phone = Some(phone);
    }
    if let Some(profile_image) = request.profile_image {
        target.profile_image = Some(profile_image);
    }
    if let Some(role) = request.role {
        target.role = role;
    }
    if let Some(status) = request.status {
        target.status = status;
    }
    if let Some(permissions) = permissions {
        target.permissions = permissions;
    }
    target.updated_at = now;

    info!(
        actor_id = %actor.id,
        target_id = %target.id,
        fields = ?fields,
        "Administrator updated"
    );
    Ok(())
}

pub fn change_status(
    policy: &AccessPolicy,
    actor: &Administrator,
    target: &mut Administrator,
    new_status: AdminStatus,
    now: DateTime<Utc>,
) -> DomainResult<()> {
    if !policy.can_change_status(actor, target, new_status)? {
        return Err(deny());
    }

    info!(
        actor_id = %actor.id,
        target_id = %target.id,
        from = %target.status,
        to = %new_status,
        "Administrator status changed"
    );
    target.status = new_status;
    target.updated_at = now;
    Ok(())
}

/// Sets a generated temporary password and returns it for one-time delivery.
pub fn reset_password(
    policy: &AccessPolicy,
    actor: &Administrator,
    target: &mut Administrator,
    now: DateTime<Utc>,
) -> DomainResult<String> {
    policy.authorize(actor, target, AdminAction::ResetPassword)?;

    let temporary = generate_temporary_password();
    target.password_hash = hash(&temporary)?;
    target.force_password_change = true;
    target.clear_lockout();
    target.updated_at = now;

    info!(actor_id = %actor.id, target_id = %target.id, "Administrator password reset");
    Ok(temporary)
}

/// Approves a hard delete. The caller removes the record on `Ok`.
pub fn delete_admin(
    policy: &AccessPolicy,
    actor: &Administrator,
    target: &Administrator,
) -> DomainResult<()> {
    policy.authorize(actor, target, AdminAction::Delete)?;
    info!(actor_id = %actor.id, target_id = %target.id, "Administrator delete approved");
    Ok(())
}
