// Per-field predicates used by the comparator.
//
// Each predicate treats a missing or malformed value as "not satisfied"
// rather than as an error.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex_lite::Regex;

/// Loose North-American shape: optional parenthesized area code, then
/// 3 + 4 digits, separated by hyphen, dot, whitespace or nothing.
static PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").ok());

/// Anchored at the start only; trailing text is tolerated.
static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").ok());

pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// True when a phone-shaped run appears anywhere in `phone`.
pub fn phone_is_valid(phone: Option<&str>) -> bool {
    match (phone, PHONE.as_ref()) {
        (Some(phone), Some(pattern)) => pattern.is_match(phone),
        _ => false,
    }
}

pub fn email_is_valid(email: Option<&str>) -> bool {
    match (email, EMAIL.as_ref()) {
        (Some(email), Some(pattern)) => pattern.is_match(email),
        _ => false,
    }
}

/// Parse an MM/DD/YYYY date. The year must be exactly four digits.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let year = value.rsplit('/').next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// True when both dates parse and the registration is on or before the
/// deadline.
pub fn registered_by(registration: Option<&str>, deadline: Option<&str>) -> bool {
    match (
        registration.and_then(parse_date),
        deadline.and_then(parse_date),
    ) {
        (Some(registered), Some(deadline)) => registered <= deadline,
        _ => false,
    }
}

/// True when at least one company code appears in the allowed list.
pub fn shares_naics_code(company: &[String], allowed: &[String]) -> bool {
    company.iter().any(|code| allowed.contains(code))
}
