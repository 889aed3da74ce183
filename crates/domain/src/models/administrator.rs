//! Administrator account models and form requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use super::admin_role::AdminRole;
use super::permission::AdminPermission;

/// Account status. Disabling is done through status, not deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl AdminStatus {
    pub fn all() -> &'static [AdminStatus] {
        &[AdminStatus::Active, AdminStatus::Inactive, AdminStatus::Suspended]
    }
}

impl FromStr for AdminStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AdminStatus::Active),
            "inactive" => Ok(AdminStatus::Inactive),
            "suspended" => Ok(AdminStatus::Suspended),
            _ => Err(format!("Unknown admin status: {}", s)),
        }
    }
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminStatus::Active => write!(f, "active"),
            AdminStatus::Inactive => write!(f, "inactive"),
            AdminStatus::Suspended => write!(f, "suspended"),
        }
    }
}

/// Editable fields of an administrator record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminField {
    Name,
    Email,
    Phone,
    Password,
    ProfileImage,
    Role,
    Status,
    Permissions,
}

impl AdminField {
    /// Personal profile fields an administrator may always change on their own record.
    pub fn is_profile_field(&self) -> bool {
        matches!(
            self,
            AdminField::Name
                | AdminField::Email
                | AdminField::Phone
                | AdminField::Password
                | AdminField::ProfileImage
        )
    }
}

impl std::fmt::Display for AdminField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AdminField::Name => "name",
            AdminField::Email => "email",
            AdminField::Phone => "phone",
            AdminField::Password => "password",
            AdminField::ProfileImage => "profile_image",
            AdminField::Role => "role",
            AdminField::Status => "status",
            AdminField::Permissions => "permissions",
        };
        f.write_str(name)
    }
}

/// Administrator account.
///
/// Only `id` and `role` are required when deserializing, so callers can hand
/// the policy a partial snapshot of the current actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Administrator {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: AdminRole,
    /// Explicit grants on top of the role defaults.
    #[serde(default)]
    pub permissions: BTreeSet<AdminPermission>,
    #[serde(default)]
    pub status: AdminStatus,
    #[serde(default)]
    pub failed_login_attempts: u32,
    #[serde(default)]
    pub locked_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_otp_sent_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub force_password_change: bool,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Administrator {
    /// New active administrator with no explicit permissions.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: AdminRole,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: None,
            profile_image: None,
            password_hash: String::new(),
            role,
            permissions: BTreeSet::new(),
            status: AdminStatus::Active,
            failed_login_attempts: 0,
            locked_until: None,
            last_login_at: None,
            last_otp_sent_at: None,
            force_password_change: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AdminStatus::Active
    }

    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}

/// Create-administrator form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateAdminRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,
    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone: Option<String>,
    #[validate(custom(function = "shared::password::validate_password_strength"))]
    pub password: String,
    pub role: AdminRole,
    /// Extra permission names from the catalog.
    #[serde(default)]
    pub permissions: Vec<String>,
    pub status: Option<AdminStatus>,
    pub profile_image: Option<String>,
}

/// Self-service profile edit. Role, status and permissions are not part of this form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone: Option<String>,
    #[validate(custom(function = "shared::password::validate_password_strength"))]
    pub password: Option<String>,
    pub profile_image: Option<String>,
}

impl UpdateProfileRequest {
    pub fn touched_fields(&self) -> Vec<AdminField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(AdminField::Name);
        }
        if self.email.is_some() {
            fields.push(AdminField::Email);
        }
        if self.phone.is_some() {
            fields.push(AdminField::Phone);
        }
        if self.password.is_some() {
            fields.push(AdminField::Password);
        }
        if self.profile_image.is_some() {
            fields.push(AdminField::ProfileImage);
        }
        fields
    }
}

/// Management edit of another administrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateAdminRequest {
    #[validate(length(min = 2, max = 255, message = "Name must be 2-255 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(custom(function = "shared::validation::validate_phone_number"))]
    pub phone: Option<String>,
    pub profile_image: Option<String>,
    pub role: Option<AdminRole>,
    pub status: Option<AdminStatus>,
    /// Replaces the explicit grants when present.
    pub permissions: Option<Vec<String>>,
}

impl UpdateAdminRequest {
    pub fn touched_fields(&self) -> Vec<AdminField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(AdminField::Name);
        }
        if self.email.is_some() {
            fields.push(AdminField::Email);
        }
        if self.phone.is_some() {
            fields.push(AdminField::Phone);
        }
        if self.profile_image.is_some() {
            fields.push(AdminField::ProfileImage);
        }
        if self.role.is_some() {
            fields.push(AdminField::Role);
        }
        if self.status.is_some() {
            fields.push(AdminField::Status);
        }
        if self.permissions.is_some() {
            fields.push(AdminField::Permissions);
        }
        fields
    }
}

/// Single status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChangeStatusRequest {
    pub status: AdminStatus,
}

/// Bulk status change over selected administrator ids.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct BulkStatusRequest {
    #[validate(length(min = 1, message = "Select at least one administrator"))]
    pub ids: Vec<Uuid>,
    pub status: AdminStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn create_request() -> CreateAdminRequest {
        CreateAdminRequest {
            name: Name().fake(),
            email: SafeEmail().fake(),
            phone: Some("+14155552671".to_string()),
            password: "changeme123".to_string(),
            role: AdminRole::Moderator,
            permissions: vec![],
            status: None,
            profile_image: None,
        }
    }

    #[test]
    fn test_admin_status_round_trip() {
        for status in AdminStatus::all() {
            assert_eq!(AdminStatus::from_str(&status.to_string()).unwrap(), *status);
        }
        assert!(AdminStatus::from_str("deleted").is_err());
    }

    #[test]
    fn test_profile_fields() {
        assert!(AdminField::Name.is_profile_field());
        assert!(AdminField::Password.is_profile_field());
        assert!(!AdminField::Role.is_profile_field());
        assert!(!AdminField::Status.is_profile_field());
        assert!(!AdminField::Permissions.is_profile_field());
    }

    #[test]
    fn test_new_administrator_defaults() {
        let admin = Administrator::new("Ada", "ada@example.com", AdminRole::Admin, Utc::now());
        assert!(admin.is_active());
        assert!(admin.permissions.is_empty());
        assert_eq!(admin.failed_login_attempts, 0);
        assert!(!admin.force_password_change);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let mut admin = Administrator::new("Ada", "ada@example.com", AdminRole::Admin, Utc::now());
        admin.password_hash = "$argon2id$secret".to_string();
        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_partial_snapshot_deserializes() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000001","role":"moderator"}"#;
        let admin: Administrator = serde_json::from_str(json).unwrap();
        assert_eq!(admin.role, AdminRole::Moderator);
        assert_eq!(admin.status, AdminStatus::Active);
        assert!(admin.permissions.is_empty());
    }

    #[test]
    fn test_create_request_validation() {
        assert!(create_request().validate().is_ok());

        let mut bad_email = create_request();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut weak = create_request();
        weak.password = "short".to_string();
        assert!(weak.validate().is_err());

        let mut bad_phone = create_request();
        bad_phone.phone = Some("12".to_string());
        assert!(bad_phone.validate().is_err());
    }

    #[test]
    fn test_touched_fields() {
        let profile = UpdateProfileRequest {
            name: Some("New Name".to_string()),
            password: Some("newpass123".to_string()),
            ..Default::default()
        };
        assert_eq!(
            profile.touched_fields(),
            vec![AdminField::Name, AdminField::Password]
        );

        let update = UpdateAdminRequest {
            email: Some("x@example.com".to_string()),
            status: Some(AdminStatus::Suspended),
            ..Default::default()
        };
        assert_eq!(
            update.touched_fields(),
            vec![AdminField::Email, AdminField::Status]
        );
    }

    #[test]
    fn test_bulk_request_requires_ids() {
        let request = BulkStatusRequest {
            ids: vec![],
            status: AdminStatus::Inactive,
        };
        assert!(request.validate().is_err());
    }
}
