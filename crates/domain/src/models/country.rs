//! Country reference data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountryStatus {
    #[default]
    Active,
    Inactive,
}

impl FromStr for CountryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(CountryStatus::Active),
            "inactive" => Ok(CountryStatus::Inactive),
            _ => Err(format!("Unknown country status: {}", s)),
        }
    }
}

impl std::fmt::Display for CountryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountryStatus::Active => write!(f, "active"),
            CountryStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    /// ISO 3166-1 alpha-2, uppercase. Unique.
    pub iso_code: String,
    pub dial_code: String,
    pub flag: Option<String>,
    pub status: CountryStatus,
    /// App users registered with this country.
    pub users_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Country {
    /// Whether the delete button should be enabled.
    pub fn can_delete(&self) -> bool {
        self.users_count == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCountryRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(custom(function = "shared::validation::validate_iso_country_code"))]
    pub iso_code: String,
    #[validate(custom(function = "shared::validation::validate_dial_code"))]
    pub dial_code: String,
    pub flag: Option<String>,
    pub status: Option<CountryStatus>,
}

impl CreateCountryRequest {
    pub fn into_country(self, now: DateTime<Utc>) -> Country {
        Country {
            id: Uuid::new_v4(),
            name: self.name,
            iso_code: self.iso_code,
            dial_code: self.dial_code,
            flag: self.flag,
            status: self.status.unwrap_or_default(),
            users_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateCountryRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = "shared::validation::validate_iso_country_code"))]
    pub iso_code: Option<String>,
    #[validate(custom(function = "shared::validation::validate_dial_code"))]
    pub dial_code: Option<String>,
    pub flag: Option<String>,
}
