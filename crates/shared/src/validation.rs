//! Field-level validators shared by the back-office forms.
//!
//! Every function has the `validator` custom-function signature so it can be
//! referenced from `#[validate(custom(function = "..."))]` attributes.

use std::borrow::Cow;

use validator::ValidationError;

/// Longest accepted SMS sender id (alphanumeric sender ids are capped at 11 by carriers).
pub const MAX_SENDER_ID_LENGTH: usize = 11;

lazy_static::lazy_static! {
    static ref PHONE_REGEX: regex::Regex = regex::Regex::new(r"^\+?[0-9]{7,15}$").unwrap();
    static ref ISO_COUNTRY_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z]{2}$").unwrap();
    static ref DIAL_CODE_REGEX: regex::Regex = regex::Regex::new(r"^\+[0-9]{1,4}$").unwrap();
    static ref CURRENCY_REGEX: regex::Regex = regex::Regex::new(r"^[A-Z]{3}$").unwrap();
    static ref SLUG_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z0-9][a-z0-9-]*[a-z0-9]$").unwrap();
    static ref SENDER_ID_REGEX: regex::Regex = regex::Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Validates a phone number: optional leading `+` and 7 to 15 digits.
///
/// Spaces and dashes are tolerated and ignored.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let compact: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if PHONE_REGEX.is_match(&compact) {
        Ok(())
    } else {
        Err(invalid(
            "phone_format",
            "Phone number must contain 7 to 15 digits",
        ))
    }
}

/// Validates an ISO 3166-1 alpha-2 country code (two uppercase letters).
pub fn validate_iso_country_code(code: &str) -> Result<(), ValidationError> {
    if ISO_COUNTRY_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(invalid(
            "iso_code_format",
            "Country code must be two uppercase letters",
        ))
    }
}

/// Validates an international dial code such as `+1` or `+880`.
pub fn validate_dial_code(code: &str) -> Result<(), ValidationError> {
    if DIAL_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(invalid(
            "dial_code_format",
            "Dial code must be '+' followed by 1 to 4 digits",
        ))
    }
}

/// Validates an ISO 4217 currency code (three uppercase letters).
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if CURRENCY_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(invalid(
            "currency_format",
            "Currency must be a three-letter ISO code",
        ))
    }
}

/// Validates a URL slug: lowercase alphanumerics and hyphens, no leading/trailing hyphen.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if SLUG_REGEX.is_match(slug) {
        Ok(())
    } else {
        Err(invalid(
            "slug_format",
            "Slug must be lowercase alphanumeric with hyphens, no leading/trailing hyphens",
        ))
    }
}

/// Validates an alphanumeric SMS sender id.
pub fn validate_sender_id(sender_id: &str) -> Result<(), ValidationError> {
    if sender_id.len() <= MAX_SENDER_ID_LENGTH && SENDER_ID_REGEX.is_match(sender_id) {
        Ok(())
    } else {
        Err(invalid(
            "sender_id_format",
            "Sender id must be 1 to 11 alphanumeric characters",
        ))
    }
}
