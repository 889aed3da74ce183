//! Administrator roles and the authoritative role → default permission table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::permission::AdminPermission;

/// Administrator tier. Each role implies a default permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Unrestricted access.
    SuperAdmin,
    Admin,
    Moderator,
    ContentManager,
    BlogManager,
    AnalyticsManager,
    SubscriptionManager,
}

impl AdminRole {
    /// Rank used for "higher-privileged" comparisons.
    ///
    /// SuperAdmin > Admin > the four manager roles > Moderator.
    /// Roles sharing a rank are not comparable.
    pub fn rank(&self) -> u8 {
        match self {
            AdminRole::SuperAdmin => 4,
            AdminRole::Admin => 3,
            AdminRole::ContentManager
            | AdminRole::BlogManager
            | AdminRole::AnalyticsManager
            | AdminRole::SubscriptionManager => 2,
            AdminRole::Moderator => 1,
        }
    }

    /// Strictly higher rank than `other`.
    pub fn outranks(&self, other: AdminRole) -> bool {
        self.rank() > other.rank()
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, AdminRole::SuperAdmin)
    }

    /// Default permissions implied by this role.
    ///
    /// This table also drives the suggested checkboxes on the create-admin form.
    pub fn default_permissions(&self) -> BTreeSet<AdminPermission> {
        use AdminPermission::*;

        match self {
            AdminRole::SuperAdmin => AdminPermission::all().iter().copied().collect(),
            AdminRole::Admin => AdminPermission::all()
                .iter()
                .copied()
                .filter(|p| !matches!(p, ManageAdmins | ManageSettings | ManageSmsProviders))
                .collect(),
            AdminRole::Moderator => [ViewUsers, ManagePosts, ManageReports, ManageComments]
                .into_iter()
                .collect(),
            AdminRole::ContentManager => {
                [ManagePosts, ManageComments, ManageBlogs, ViewContentAnalytics]
                    .into_iter()
                    .collect()
            }
            AdminRole::BlogManager => [ManageBlogs, ViewContentAnalytics].into_iter().collect(),
            AdminRole::AnalyticsManager => [
                ViewUserAnalytics,
                ViewContentAnalytics,
                ViewRevenueAnalytics,
                ViewSubscriptionAnalytics,
            ]
            .into_iter()
            .collect(),
            AdminRole::SubscriptionManager => [
                ViewSubscriptions,
                ManageSubscriptions,
                ManagePlans,
                ViewSubscriptionAnalytics,
                ViewRevenueAnalytics,
            ]
            .into_iter()
            .collect(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "Full access to every screen and administrator",
            AdminRole::Admin => "Manages users, content and subscriptions",
            AdminRole::Moderator => "Reviews posts, comments and reports",
            AdminRole::ContentManager => "Manages posts, comments and blogs",
            AdminRole::BlogManager => "Writes and publishes blog articles",
            AdminRole::AnalyticsManager => "Views analytics dashboards",
            AdminRole::SubscriptionManager => "Manages plans and subscriptions",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "super_admin",
            AdminRole::Admin => "admin",
            AdminRole::Moderator => "moderator",
            AdminRole::ContentManager => "content_manager",
            AdminRole::BlogManager => "blog_manager",
            AdminRole::AnalyticsManager => "analytics_manager",
            AdminRole::SubscriptionManager => "subscription_manager",
        }
    }

    pub fn all() -> &'static [AdminRole] {
        &[
            AdminRole::SuperAdmin,
            AdminRole::Admin,
            AdminRole::Moderator,
            AdminRole::ContentManager,
            AdminRole::BlogManager,
            AdminRole::AnalyticsManager,
            AdminRole::SubscriptionManager,
        ]
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "super_admin" | "superadmin" => Ok(AdminRole::SuperAdmin),
            "admin" => Ok(AdminRole::Admin),
            "moderator" => Ok(AdminRole::Moderator),
            "content_manager" => Ok(AdminRole::ContentManager),
            "blog_manager" => Ok(AdminRole::BlogManager),
            "analytics_manager" => Ok(AdminRole::AnalyticsManager),
            "subscription_manager" => Ok(AdminRole::SubscriptionManager),
            _ => Err(format!("Unknown admin role: {}", s)),
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role metadata for the role picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdminRoleInfo {
    pub role: AdminRole,
    pub rank: u8,
    pub description: String,
    pub default_permissions: Vec<AdminPermission>,
}

impl From<AdminRole> for AdminRoleInfo {
    fn from(role: AdminRole) -> Self {
        Self {
            role,
            rank: role.rank(),
            description: role.description().to_string(),
            default_permissions: role.default_permissions().into_iter().collect(),
        }
    }
}

/// Response for GET /api/admin/v1/roles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListRolesResponse {
    pub data: Vec<AdminRoleInfo>,
}

/// Suggested (default-checked) permissions for a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RolePermissionsResponse {
    pub role: AdminRole,
    pub permissions: Vec<AdminPermission>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_serialization() {
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        let role: AdminRole = serde_json::from_str("\"subscription_manager\"").unwrap();
        assert_eq!(role, AdminRole::SubscriptionManager);
    }

    #[test]
    fn test_admin_role_from_str() {
        assert_eq!(AdminRole::from_str("super_admin").unwrap(), AdminRole::SuperAdmin);
        assert_eq!(AdminRole::from_str("SUPER-ADMIN").unwrap(), AdminRole::SuperAdmin);
        assert_eq!(AdminRole::from_str("blog_manager").unwrap(), AdminRole::BlogManager);
        assert!(AdminRole::from_str("owner").is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for role in AdminRole::all() {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }

    #[test]
    fn test_rank_order() {
        assert!(AdminRole::SuperAdmin.outranks(AdminRole::Admin));
        assert!(AdminRole::Admin.outranks(AdminRole::ContentManager));
        assert!(AdminRole::AnalyticsManager.outranks(AdminRole::Moderator));
        assert!(!AdminRole::Moderator.outranks(AdminRole::BlogManager));
    }

    #[test]
    fn test_same_rank_not_comparable() {
        assert!(!AdminRole::BlogManager.outranks(AdminRole::ContentManager));
        assert!(!AdminRole::ContentManager.outranks(AdminRole::BlogManager));
        assert!(!AdminRole::Admin.outranks(AdminRole::Admin));
    }

    #[test]
    fn test_default_permissions_table() {
        assert_eq!(
            AdminRole::SuperAdmin.default_permissions().len(),
            AdminPermission::all().len()
        );

        let admin = AdminRole::Admin.default_permissions();
        assert!(admin.contains(&AdminPermission::ManageUsers));
        assert!(!admin.contains(&AdminPermission::ManageAdmins));
        assert!(!admin.contains(&AdminPermission::ManageSettings));

        let blog: Vec<_> = AdminRole::BlogManager.default_permissions().into_iter().collect();
        assert_eq!(
            blog,
            vec![AdminPermission::ManageBlogs, AdminPermission::ViewContentAnalytics]
        );

        let moderator = AdminRole::Moderator.default_permissions();
        assert!(moderator.contains(&AdminPermission::ManageReports));
        assert_eq!(moderator.len(), 4);
    }

    #[test]
    fn test_admin_role_info_from() {
        let info: AdminRoleInfo = AdminRole::AnalyticsManager.into();
        assert_eq!(info.rank, 2);
        assert_eq!(info.default_permissions.len(), 4);
        assert!(!info.description.is_empty());
    }
}
