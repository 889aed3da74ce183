//! HTTP route handlers.

pub mod access;
pub mod health;
pub mod permissions;
pub mod reports;
pub mod roles;
