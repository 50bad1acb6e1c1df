use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_PHONE_DIGITS, MIN_NAME_LENGTH, MIN_PHONE_DIGITS};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L} .'-]+$").unwrap());

pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::new("name_too_short"));
    }
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::new("name_invalid_characters"));
    }
    Ok(())
}

/// Strips everything but digits, keeping a single leading `+` when present.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if trimmed.starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    let normalized = normalize_phone(raw);
    let digits = normalized.strip_prefix('+').unwrap_or(&normalized);
    if digits.is_empty() {
        return Err(ValidationError::new("phone_required"));
    }
    if digits.len() < MIN_PHONE_DIGITS || digits.len() > MAX_PHONE_DIGITS {
        return Err(ValidationError::new("phone_invalid_length"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("J").is_err());
        assert!(validate_name("Jane Doe").is_ok());
        assert!(validate_name("J4ne").is_err());
        assert!(validate_name("Aysel Mammadova").is_ok());
        assert!(validate_name("O'Brien-Smith Jr.").is_ok());
    }

    #[test]
    fn test_normalize_phone_keeps_leading_plus() {
        assert_eq!(normalize_phone("+994 55 123 45 67"), "+994551234567");
        assert_eq!(normalize_phone("(055) 123-45-67"), "0551234567");
    }

    #[test]
    fn test_normalize_phone_idempotent() {
        for raw in ["+994 55 123 45 67", "055 123 45 67", "  +1 (555) 000-1111 "] {
            let once = normalize_phone(raw);
            assert_eq!(normalize_phone(&once), once);
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        assert!(validate_phone("123456").is_err());
        assert!(validate_phone("1234567").is_ok());
        assert!(validate_phone("+123456789012345").is_ok());
        assert!(validate_phone("1234567890123456").is_err());
        assert!(validate_phone("+").is_err());
        assert!(validate_phone("abc").is_err());
    }

    #[test]
    fn test_validate_agrees_with_normalize() {
        for raw in ["+994 55 123 45 67", "055-123-45-67", "12345678901"] {
            if validate_phone(raw).is_ok() {
                assert!(validate_phone(&normalize_phone(raw)).is_ok());
            }
        }
    }
}
