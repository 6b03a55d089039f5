use crate::utils::error::{RMetricsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RMetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RMetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_one_of<T: PartialEq + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    allowed: &[T],
) -> Result<()> {
    if !allowed.contains(&value) {
        let allowed_list = allowed
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RMetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be one of: {}", allowed_list),
        });
    }
    Ok(())
}

/// Minimal email plausibility check: an '@' and a '.' must both be present.
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !value.contains('@') || !value.contains('.') {
        return Err(RMetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a plausible email address".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("address", "Seolleung-ro 130-gil 19").is_ok());
        assert!(validate_non_empty_string("address", "").is_err());
        assert!(validate_non_empty_string("address", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("r_score", 92.0, 0.0, 100.0).is_ok());
        assert!(validate_range("r_score", 0.0, 0.0, 100.0).is_ok());
        assert!(validate_range("r_score", 100.5, 0.0, 100.0).is_err());
        assert!(validate_range("r_score", -1.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("radius_m", 500u32, &[300, 500, 1000]).is_ok());
        assert!(validate_one_of("radius_m", 750u32, &[300, 500, 1000]).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("notify_email", "owner@example.com").is_ok());
        assert!(validate_email("notify_email", "owner-at-example.com").is_err());
        assert!(validate_email("notify_email", "owner@localhost").is_err());
    }
}
