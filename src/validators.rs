//! Field validators for collected answers.
//!
//! All validators are pure and total: invalid input yields `false`,
//! never an error.

use std::sync::LazyLock;

use regex::Regex;

static DNI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?\d{8,15}$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Validate a DNI: exactly 8 digits after stripping dots and whitespace.
pub fn validate_dni(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .collect();
    DNI_RE.is_match(&normalized)
}

/// Validate a phone number: optional leading `+` followed by 8–15
/// digits, after stripping parentheses, spaces, and hyphens.
pub fn validate_phone(value: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '-') && !c.is_whitespace())
        .collect();
    PHONE_RE.is_match(&normalized)
}

/// Validate an email address against a conventional `local@domain.tld`
/// pattern.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validate a `DD/MM/YYYY` calendar date.
pub fn validate_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%d/%m/%Y").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_accepts_eight_digits() {
        assert!(validate_dni("12345678"));
        assert!(validate_dni("12.345.678"));
        assert!(validate_dni("12 345 678"));
    }

    #[test]
    fn dni_rejects_wrong_length() {
        assert!(!validate_dni("1234567"));
        assert!(!validate_dni("123456789"));
        assert!(!validate_dni(""));
    }

    #[test]
    fn dni_rejects_non_digits() {
        assert!(!validate_dni("1234567a"));
        assert!(!validate_dni("12-345-678"));
    }

    #[test]
    fn phone_accepts_formatted_numbers() {
        assert!(validate_phone("+54 9 11-2345-6789"));
        assert!(validate_phone("(011) 4321-5678"));
        assert!(validate_phone("12345678"));
        assert!(validate_phone("+123456789012345"));
    }

    #[test]
    fn phone_rejects_out_of_range() {
        assert!(!validate_phone("123"));
        assert!(!validate_phone("1234567890123456"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn phone_rejects_letters() {
        assert!(!validate_phone("+54 11 CALL-NOW"));
    }

    #[test]
    fn email_accepts_conventional_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("juan.perez+legal@estudio-garcia.com.ar"));
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email(""));
    }

    #[test]
    fn date_accepts_dd_mm_yyyy() {
        assert!(validate_date("19/12/2025"));
        assert!(validate_date("01/01/2000"));
    }

    #[test]
    fn date_rejects_invalid() {
        assert!(!validate_date("2025-12-19"));
        assert!(!validate_date("32/01/2025"));
        assert!(!validate_date(""));
    }
}
