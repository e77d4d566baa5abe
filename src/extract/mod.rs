// Field extraction — turns raw document text into fixed-schema records.
//
// Both extractors are infallible from the caller's point of view. A label or
// pattern that isn't found leaves its field at the default value. The two
// halves differ in how they fail: company fields default one at a time, while
// RFP extraction rolls back to an all-default record on any internal error.

pub mod company;
pub mod rfp;

pub use company::{parse_company_text, CompanyField, CompanyProfile};
pub use rfp::{extract_rfp_requirements, RfpRequirements, RECOGNIZED_NAICS_CODES};

/// Return the first run of ASCII digits in `value`, if any.
pub fn first_digit_run(value: &str) -> Option<&str> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let rest = &value[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Parse the first run of digits in `value` as a count.
///
/// No digits, or a run too large for `u32`, yields 0.
pub fn parse_count(value: &str) -> u32 {
    first_digit_run(value)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}
