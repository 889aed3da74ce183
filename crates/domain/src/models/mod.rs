//! Domain models for the ConnectApp back-office.

pub mod admin_role;
pub mod administrator;
pub mod country;
pub mod permission;
pub mod post_report;
pub mod sms_provider;
pub mod subscription_plan;

pub use admin_role::{AdminRole, AdminRoleInfo, ListRolesResponse, RolePermissionsResponse};
pub use administrator::{
    AdminField, AdminStatus, Administrator, BulkStatusRequest, ChangeStatusRequest,
    CreateAdminRequest, UpdateAdminRequest, UpdateProfileRequest,
};
pub use country::{Country, CountryStatus, CreateCountryRequest, UpdateCountryRequest};
pub use permission::{
    get_all_permissions, get_permissions_by_category, get_permissions_by_category_filter,
    AdminPermission, ListPermissionsQuery, ListPermissionsResponse, PermissionCategory,
    PermissionInfo, PermissionsByCategory,
};
pub use post_report::{
    CreateReportRequest, PostReport, ReportReason, ReportStatus, UpdateReportStatusRequest,
};
pub use sms_provider::{
    SmsProvider, SmsProviderConfig, SmsProviderConfigRequest, SmsProviderSummary,
};
pub use subscription_plan::{
    BillingInterval, CreatePlanRequest, PlanStatus, SubscriptionPlan,
};
