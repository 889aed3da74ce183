//! Domain layer for the ConnectApp admin back-office.
//!
//! This crate contains:
//! - Domain models (Administrator, PostReport, Country, SubscriptionPlan, SMS providers)
//! - Access policy and workflow services
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::{DomainError, DomainResult};
