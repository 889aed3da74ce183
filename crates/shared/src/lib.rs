//! Shared utilities for the ConnectApp admin backend.
//!
//! - Field validators used by the back-office forms
//! - Administrator password hashing and temporary password generation

pub mod password;
pub mod validation;
