//! Field validation for raw user input.
//!
//! Every check is a pure predicate returning `bool`. None of them panic or
//! allocate beyond what the regex engine needs.
//!
//! - tax id: exactly 9 ASCII digits
//! - phone: `050-123-45-67`, optionally prefixed with `+38-`
//! - email: `local@domain.tld` with a 2+ letter suffix
//! - date: a real calendar date written `YYYY-MM-DD`, year 1000 to 9999
//! - apartment (and every other numeric field): non-empty ASCII digits

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";

static TAX_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("valid tax id regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+38-)?0[0-9]{2}-[0-9]{3}-[0-9]{2}-[0-9]{2}$").expect("valid phone regex")
});
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9][0-9]{3}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid date regex")
});
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

pub fn validate_tax_id(tax_id: &str) -> bool {
    TAX_ID_RE.is_match(tax_id)
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts only `YYYY-MM-DD` dates that exist on the calendar, so
/// `2023-02-30` fails. The shape check comes first: chrono's `%Y` alone
/// would take signed, padded or short years.
pub fn validate_date(date: &str) -> bool {
    DATE_RE.is_match(date) && NaiveDate::parse_from_str(date, DATE_FORMAT).is_ok()
}

pub fn validate_apartment(number: &str) -> bool {
    is_digits(number)
}

/// True for a non-empty string of ASCII digits.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Integer ordering key for a digit string.
///
/// Numeric fields are stored as strings, so `"10"` must never sort before
/// `"9"`. Returns `None` for anything that is not a digit string (or does
/// not fit in a `u64`); callers sort those last.
pub fn numeric_key(value: &str) -> Option<u64> {
    if !is_digits(value) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+38-050-123-45-67"));
        assert!(validate_phone("050-123-45-67"));
        assert!(!validate_phone("+38-050-1234567"));
        assert!(!validate_phone("123-456-7890"));
        assert!(!validate_phone("+39-050-123-45-67"));
        assert!(!validate_phone("150-123-45-67"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com"));
        assert!(validate_email("user.name+tag@domain.co.uk"));
        assert!(!validate_email("invalid-email"));
        assert!(!validate_email("user@domain"));
        assert!(!validate_email("user@domain.c"));
        assert!(!validate_email("@domain.com"));
    }

    #[test]
    fn test_validate_tax_id() {
        assert!(validate_tax_id("123456789"));
        assert!(validate_tax_id("000000000"));
        assert!(!validate_tax_id("12345"));
        assert!(!validate_tax_id("1234567890"));
        assert!(!validate_tax_id("abc123456"));
        assert!(!validate_tax_id("12345678 "));
        assert!(!validate_tax_id("١٢٣٤٥٦٧٨٩"));
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2023-12-28"));
        assert!(validate_date("2024-02-29"));
        assert!(!validate_date("28-12-2023"));
        assert!(!validate_date("2023/12/28"));
        assert!(!validate_date("invalid-date"));
        assert!(!validate_date("2023-02-30"));
        assert!(!validate_date(""));
    }

    #[test]
    fn test_validate_date_rejects_loose_years() {
        assert!(!validate_date("999-01-01"));
        assert!(!validate_date("+2023-12-28"));
        assert!(!validate_date(" 2023-12-28"));
        assert!(!validate_date("2023-12-28 "));
        assert!(!validate_date("0023-12-28"));
        assert!(!validate_date("12023-12-28"));
        assert!(validate_date("2023-1-5"));
    }

    #[test]
    fn test_validate_apartment() {
        assert!(validate_apartment("123"));
        assert!(!validate_apartment("A123"));
        assert!(!validate_apartment("Apartment1"));
        assert!(!validate_apartment(""));
        assert!(!validate_apartment("-1"));
    }

    #[test]
    fn numeric_key_orders_by_value() {
        assert!(numeric_key("9") < numeric_key("10"));
        assert_eq!(numeric_key("007"), Some(7));
        assert_eq!(numeric_key(""), None);
        assert_eq!(numeric_key("12a"), None);
        assert_eq!(numeric_key("99999999999999999999999"), None);
    }
}
