//! SMS notification provider configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmsProvider {
    Twilio,
    Vonage,
    Msg91,
    Textlocal,
}

impl SmsProvider {
    pub fn requires_account_sid(&self) -> bool {
        matches!(self, SmsProvider::Twilio)
    }

    pub fn requires_template_id(&self) -> bool {
        matches!(self, SmsProvider::Msg91)
    }

    /// Providers that authenticate with a key only.
    pub fn requires_api_secret(&self) -> bool {
        !matches!(self, SmsProvider::Textlocal)
    }
}

impl FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twilio" => Ok(SmsProvider::Twilio),
            "vonage" | "nexmo" => Ok(SmsProvider::Vonage),
            "msg91" => Ok(SmsProvider::Msg91),
            "textlocal" => Ok(SmsProvider::Textlocal),
            _ => Err(format!("Unknown SMS provider: {}", s)),
        }
    }
}

impl std::fmt::Display for SmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmsProvider::Twilio => write!(f, "twilio"),
            SmsProvider::Vonage => write!(f, "vonage"),
            SmsProvider::Msg91 => write!(f, "msg91"),
            SmsProvider::Textlocal => write!(f, "textlocal"),
        }
    }
}

/// Stored provider configuration. Never serialize this to clients; use [`SmsProviderSummary`].
#[derive(Debug, Clone)]
pub struct SmsProviderConfig {
    pub provider: SmsProvider,
    pub enabled: bool,
    pub sender_id: String,
    pub api_key: String,
    pub api_secret: Option<String>,
    pub account_sid: Option<String>,
    pub template_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SmsProviderConfig {
    pub fn summary(&self) -> SmsProviderSummary {
        SmsProviderSummary {
            provider: self.provider,
            enabled: self.enabled,
            sender_id: self.sender_id.clone(),
            api_key: mask_secret(&self.api_key),
            has_api_secret: self.api_secret.as_deref().is_some_and(|s| !s.is_empty()),
            account_sid: self.account_sid.clone(),
            template_id: self.template_id.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// Client-facing view with secrets masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SmsProviderSummary {
    pub provider: SmsProvider,
    pub enabled: bool,
    pub sender_id: String,
    pub api_key: String,
    pub has_api_secret: bool,
    pub account_sid: Option<String>,
    pub template_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Keeps the last four characters visible.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

/// Provider configuration form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SmsProviderConfigRequest {
    pub provider: SmsProvider,
    #[serde(default)]
    pub enabled: bool,
    #[validate(custom(function = "shared::validation::validate_sender_id"))]
    pub sender_id: String,
    #[validate(length(min = 8, max = 255, message = "API key must be 8-255 characters"))]
    pub api_key: String,
    #[validate(length(max = 255, message = "API secret must be at most 255 characters"))]
    pub api_secret: Option<String>,
    #[validate(length(max = 64, message = "Account SID must be at most 64 characters"))]
    pub account_sid: Option<String>,
    #[validate(length(max = 64, message = "Template id must be at most 64 characters"))]
    pub template_id: Option<String>,
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl SmsProviderConfigRequest {
    /// Field validation followed by the provider-specific required fields.
    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()?;

        if self.provider.requires_api_secret() && blank(&self.api_secret) {
            return Err(DomainError::invalid_field(
                "api_secret",
                format!("API secret is required for {}", self.provider),
            ));
        }
        if self.provider.requires_account_sid() && blank(&self.account_sid) {
            return Err(DomainError::invalid_field(
                "account_sid",
                format!("Account SID is required for {}", self.provider),
            ));
        }
        if self.provider.requires_template_id() && blank(&self.template_id) {
            return Err(DomainError::invalid_field(
                "template_id",
                format!("Template id is required for {}", self.provider),
            ));
        }
        Ok(())
    }

    pub fn into_config(self, now: DateTime<Utc>) -> Result<SmsProviderConfig, DomainError> {
        self.check()?;
        Ok(SmsProviderConfig {
            provider: self.provider,
            enabled: self.enabled,
            sender_id: self.sender_id,
            api_key: self.api_key,
            api_secret: self.api_secret,
            account_sid: self.account_sid,
            template_id: self.template_id,
            updated_at: now,
        })
    }
}
