//! Input validation.
//!
//! Shared checks for member names, labels, and OTP parameters.

use crate::error::{Result, ValidationError};

/// Validate a member name.
///
/// Names must be non-empty and consist of alphanumerics, `-`, `_`, or `.`.
pub fn validate_member_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.') {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, '-', '_' and '.' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a seed label (the human-readable account name).
pub fn validate_label(label: &str) -> Result<()> {
    if label.trim().is_empty() {
        return Err(ValidationError::EmptyLabel.into());
    }
    Ok(())
}

/// Validate a stored secret value.
pub fn validate_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue.into());
    }
    Ok(())
}

/// Validate TOTP parameters at enrollment time.
///
/// Interval and digits are checked here so a bad account is rejected before
/// anything is sealed; derivation re-checks timing against `now`.
pub fn validate_otp_params(interval_secs: i64, digits: u32) -> Result<()> {
    if interval_secs < 1 {
        return Err(ValidationError::InvalidInterval(interval_secs).into());
    }
    if !(1..=9).contains(&digits) {
        return Err(ValidationError::InvalidDigits(digits).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_member_names() {
        for name in ["alice", "bob-2", "carol_d", "d.eve", "X9"] {
            assert!(validate_member_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_member_names() {
        assert!(validate_member_name("").is_err());
        assert!(validate_member_name("has space").is_err());
        assert!(validate_member_name("semi;colon").is_err());
    }

    #[test]
    fn test_label_rejects_blank() {
        assert!(validate_label("  ").is_err());
        assert!(validate_label("Facebook").is_ok());
    }

    #[test]
    fn test_otp_params() {
        assert!(validate_otp_params(30, 6).is_ok());
        assert!(validate_otp_params(0, 6).is_err());
        assert!(validate_otp_params(30, 0).is_err());
        assert!(validate_otp_params(30, 10).is_err());
    }
}
