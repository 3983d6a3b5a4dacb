//! Input normalization and validation rules.
//!
//! All rules trim their input first, so values differing only by surrounding
//! whitespace are treated as the same value. Functions either return the
//! normalized form or a [`CoreError::Validation`] describing the problem.

use crate::error::CoreError;

/// Minimum username length after trimming.
pub const USERNAME_MIN_LEN: usize = 3;

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Exact VIN length per ISO 3779.
pub const VIN_LEN: usize = 17;

/// Shortest share token we will look up. UUIDv4 strings are 36 characters;
/// anything below this is rejected before touching storage.
pub const SHARE_TOKEN_MIN_LEN: usize = 32;

/// Trim and length-check a username.
pub fn normalize_username(username: &str) -> Result<String, CoreError> {
    let trimmed = username.trim();
    if trimmed.chars().count() < USERNAME_MIN_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be at least {USERNAME_MIN_LEN} characters long"
        )));
    }
    Ok(trimmed.to_string())
}

/// Check a password meets the minimum length. Passwords are not trimmed;
/// whitespace is significant in a secret.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters long"
        )));
    }
    Ok(())
}

/// Trim a VIN and require exactly [`VIN_LEN`] characters.
pub fn normalize_vin(vin: &str) -> Result<String, CoreError> {
    let trimmed = vin.trim();
    if trimmed.chars().count() != VIN_LEN {
        return Err(CoreError::Validation(format!(
            "VIN must be exactly {VIN_LEN} characters long"
        )));
    }
    Ok(trimmed.to_string())
}

/// Require the inspection (`revision`) payload to be a structured JSON
/// object. Scalars, arrays, and null carry no field structure and are
/// rejected.
pub fn validate_revision(revision: &serde_json::Value) -> Result<(), CoreError> {
    if !revision.is_object() {
        return Err(CoreError::Validation(
            "Revision data must be a JSON object".to_string(),
        ));
    }
    Ok(())
}

/// Normalize a DTC batch: trim every code, drop blank entries, and reject
/// the whole batch if it ends up empty or contains a duplicate.
///
/// Duplicates are an error rather than silently deduplicated, so the caller
/// learns the submission itself was malformed.
pub fn normalize_dtc_batch(codes: &[String]) -> Result<Vec<String>, CoreError> {
    let trimmed: Vec<String> = codes
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Error batch must contain at least one non-blank DTC code".to_string(),
        ));
    }

    for (i, code) in trimmed.iter().enumerate() {
        if trimmed[..i].contains(code) {
            return Err(CoreError::Validation(format!(
                "Duplicate DTC code in batch: {code}"
            )));
        }
    }

    Ok(trimmed)
}

/// Minimal shape check for a report recipient address.
pub fn validate_recipient_email(email: &str) -> Result<(), CoreError> {
    if !email.contains('@') {
        return Err(CoreError::Validation(
            "Recipient email address is not valid".to_string(),
        ));
    }
    Ok(())
}
