//! Administrator permission catalog.
//!
//! This is the single canonical catalog. Role defaults in
//! [`AdminRole::default_permissions`](super::AdminRole::default_permissions)
//! draw from it, as do explicit grants on administrator records.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Permission category for grouping related permissions on the admin form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Users,
    Content,
    Subscriptions,
    Analytics,
    System,
}

impl std::fmt::Display for PermissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionCategory::Users => write!(f, "users"),
            PermissionCategory::Content => write!(f, "content"),
            PermissionCategory::Subscriptions => write!(f, "subscriptions"),
            PermissionCategory::Analytics => write!(f, "analytics"),
            PermissionCategory::System => write!(f, "system"),
        }
    }
}

/// A grantable administrator capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPermission {
    ViewUsers,
    ManageUsers,
    ManageAdmins,
    ManagePosts,
    ManageReports,
    ManageComments,
    ManageBlogs,
    ViewSubscriptions,
    ManageSubscriptions,
    ManagePlans,
    ViewUserAnalytics,
    ViewContentAnalytics,
    ViewRevenueAnalytics,
    ViewSubscriptionAnalytics,
    ManageSettings,
    ManageCountries,
    ManageSmsProviders,
    ManageNotifications,
    ViewActivityLogs,
}

impl AdminPermission {
    /// Every permission in catalog order.
    pub fn all() -> &'static [AdminPermission] {
        &[
            AdminPermission::ViewUsers,
            AdminPermission::ManageUsers,
            AdminPermission::ManageAdmins,
            AdminPermission::ManagePosts,
            AdminPermission::ManageReports,
            AdminPermission::ManageComments,
            AdminPermission::ManageBlogs,
            AdminPermission::ViewSubscriptions,
            AdminPermission::ManageSubscriptions,
            AdminPermission::ManagePlans,
            AdminPermission::ViewUserAnalytics,
            AdminPermission::ViewContentAnalytics,
            AdminPermission::ViewRevenueAnalytics,
            AdminPermission::ViewSubscriptionAnalytics,
            AdminPermission::ManageSettings,
            AdminPermission::ManageCountries,
            AdminPermission::ManageSmsProviders,
            AdminPermission::ManageNotifications,
            AdminPermission::ViewActivityLogs,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminPermission::ViewUsers => "view_users",
            AdminPermission::ManageUsers => "manage_users",
            AdminPermission::ManageAdmins => "manage_admins",
            AdminPermission::ManagePosts => "manage_posts",
            AdminPermission::ManageReports => "manage_reports",
            AdminPermission::ManageComments => "manage_comments",
            AdminPermission::ManageBlogs => "manage_blogs",
            AdminPermission::ViewSubscriptions => "view_subscriptions",
            AdminPermission::ManageSubscriptions => "manage_subscriptions",
            AdminPermission::ManagePlans => "manage_plans",
            AdminPermission::ViewUserAnalytics => "view_user_analytics",
            AdminPermission::ViewContentAnalytics => "view_content_analytics",
            AdminPermission::ViewRevenueAnalytics => "view_revenue_analytics",
            AdminPermission::ViewSubscriptionAnalytics => "view_subscription_analytics",
            AdminPermission::ManageSettings => "manage_settings",
            AdminPermission::ManageCountries => "manage_countries",
            AdminPermission::ManageSmsProviders => "manage_sms_providers",
            AdminPermission::ManageNotifications => "manage_notifications",
            AdminPermission::ViewActivityLogs => "view_activity_logs",
        }
    }

    pub fn category(&self) -> PermissionCategory {
        match self {
            AdminPermission::ViewUsers
            | AdminPermission::ManageUsers
            | AdminPermission::ManageAdmins => PermissionCategory::Users,
            AdminPermission::ManagePosts
            | AdminPermission::ManageReports
            | AdminPermission::ManageComments
            | AdminPermission::ManageBlogs => PermissionCategory::Content,
            AdminPermission::ViewSubscriptions
            | AdminPermission::ManageSubscriptions
            | AdminPermission::ManagePlans => PermissionCategory::Subscriptions,
            AdminPermission::ViewUserAnalytics
            | AdminPermission::ViewContentAnalytics
            | AdminPermission::ViewRevenueAnalytics
            | AdminPermission::ViewSubscriptionAnalytics => PermissionCategory::Analytics,
            AdminPermission::ManageSettings
            | AdminPermission::ManageCountries
            | AdminPermission::ManageSmsProviders
            | AdminPermission::ManageNotifications
            | AdminPermission::ViewActivityLogs => PermissionCategory::System,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AdminPermission::ViewUsers => "View app users and their profiles",
            AdminPermission::ManageUsers => "Suspend, restore and edit app users",
            AdminPermission::ManageAdmins => "Create and manage administrator accounts",
            AdminPermission::ManagePosts => "Review, hide and delete posts",
            AdminPermission::ManageReports => "Review and resolve post reports",
            AdminPermission::ManageComments => "Moderate comments",
            AdminPermission::ManageBlogs => "Write and publish blog articles",
            AdminPermission::ViewSubscriptions => "View user subscriptions",
            AdminPermission::ManageSubscriptions => "Cancel, refund and extend subscriptions",
            AdminPermission::ManagePlans => "Create and edit subscription plans",
            AdminPermission::ViewUserAnalytics => "View user growth and engagement analytics",
            AdminPermission::ViewContentAnalytics => "View content performance analytics",
            AdminPermission::ViewRevenueAnalytics => "View revenue analytics",
            AdminPermission::ViewSubscriptionAnalytics => "View subscription analytics",
            AdminPermission::ManageSettings => "Change system settings",
            AdminPermission::ManageCountries => "Manage the country reference list",
            AdminPermission::ManageSmsProviders => "Configure SMS notification providers",
            AdminPermission::ManageNotifications => "Send and schedule push notifications",
            AdminPermission::ViewActivityLogs => "View administrator activity logs",
        }
    }
}

impl FromStr for AdminPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        AdminPermission::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

impl std::fmt::Display for AdminPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permission with its display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionInfo {
    pub name: AdminPermission,
    pub description: String,
    pub category: PermissionCategory,
}

impl From<AdminPermission> for PermissionInfo {
    fn from(permission: AdminPermission) -> Self {
        Self {
            name: permission,
            description: permission.description().to_string(),
            category: permission.category(),
        }
    }
}

/// Response for listing permissions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListPermissionsResponse {
    pub data: Vec<PermissionInfo>,
    pub by_category: PermissionsByCategory,
}

/// Permissions organized by category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PermissionsByCategory {
    pub users: Vec<PermissionInfo>,
    pub content: Vec<PermissionInfo>,
    pub subscriptions: Vec<PermissionInfo>,
    pub analytics: Vec<PermissionInfo>,
    pub system: Vec<PermissionInfo>,
}

/// Query parameters for listing permissions.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct ListPermissionsQuery {
    pub category: Option<String>,
}

pub fn get_all_permissions() -> Vec<PermissionInfo> {
    AdminPermission::all().iter().map(|&p| p.into()).collect()
}

fn in_category(category: PermissionCategory) -> Vec<PermissionInfo> {
    AdminPermission::all()
        .iter()
        .filter(|p| p.category() == category)
        .map(|&p| p.into())
        .collect()
}

pub fn get_permissions_by_category() -> PermissionsByCategory {
    PermissionsByCategory {
        users: in_category(PermissionCategory::Users),
        content: in_category(PermissionCategory::Content),
        subscriptions: in_category(PermissionCategory::Subscriptions),
        analytics: in_category(PermissionCategory::Analytics),
        system: in_category(PermissionCategory::System),
    }
}

/// Case-insensitive category filter. Unknown categories yield an empty list.
pub fn get_permissions_by_category_filter(category: &str) -> Vec<PermissionInfo> {
    let wanted = category.to_lowercase();
    get_all_permissions()
        .into_iter()
        .filter(|p| p.category.to_string() == wanted)
        .collect()
}
