//! Domain services for the admin back-office.
//!
//! Services are pure functions over caller-owned records; persistence is the
//! caller's concern.

pub mod access_policy;
pub mod admin_actions;
pub mod bulk_status;
pub mod guards;
pub mod lockout;
pub mod report_status;
pub mod status_toggle;

pub use access_policy::{
    effective_permissions, parse_permissions, parse_role, resolve_effective_permissions,
    role_rank, AccessPolicy, AdminAction,
};
pub use admin_actions::{
    change_status, create_admin, delete_admin, reset_password, update_admin, update_profile,
};
pub use bulk_status::{bulk_change_status, BulkFailure, BulkFailureReason, BulkStatusOutcome};
pub use guards::{delete_country, delete_plan, ensure_country_deletable, ensure_plan_deletable};
pub use lockout::LockoutPolicy;
pub use report_status::PostReportStatusMachine;
pub use status_toggle::{toggle, toggle_country_status, toggle_plan_status};
