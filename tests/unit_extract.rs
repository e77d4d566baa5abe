// Unit tests for field extraction.
//
// Covers the company label lookups (defaults, numeric parsing, list splitting)
// and the RFP prose patterns (year minimums, SAM deadline, closed NAICS set,
// document flags, all-or-nothing fallback).

use rfpcheck::extract::{
    extract_rfp_requirements, parse_company_text, CompanyField, CompanyProfile, RfpRequirements,
    RECOGNIZED_NAICS_CODES,
};

// ============================================================
// Company profile — defaults
// ============================================================

#[test]
fn company_empty_text_is_all_defaults() {
    let profile = parse_company_text("");
    assert_eq!(profile, CompanyProfile::default());
    assert_eq!(profile.years_in_business, 0);
    assert_eq!(profile.staffing_experience_years, 0);
    assert!(profile.naics_codes.is_none());
}

#[test]
fn company_binary_garbage_is_all_defaults() {
    let garbage = String::from_utf8_lossy(&[0xff, 0x00, 0x13, 0x9c, b':', 0x7f, 0xfe]).into_owned();
    assert_eq!(parse_company_text(&garbage), CompanyProfile::default());
}

#[test]
fn company_label_without_colon_is_ignored() {
    let profile = parse_company_text("Business Structure LLC\nPhone Number 555-123-4567");
    assert!(profile.business_structure.is_none());
    assert!(profile.phone_number.is_none());
}

// ============================================================
// Company profile — value parsing
// ============================================================

#[test]
fn company_years_take_first_digit_run() {
    let profile = parse_company_text(
        "Company Length of Existence: Established 2009, 15 years\n\
         Years of Experience in Temporary Staffing: 10+",
    );
    assert_eq!(profile.years_in_business, 2009);
    assert_eq!(profile.staffing_experience_years, 10);
}

#[test]
fn company_value_is_rest_of_line_trimmed() {
    let profile = parse_company_text("Business Structure:    Limited Liability Company   \r\nNext: x");
    assert_eq!(
        profile.business_structure.as_deref(),
        Some("Limited Liability Company")
    );
}

#[test]
fn company_empty_value_takes_next_line() {
    // Whitespace after the colon may run across the line break.
    let profile = parse_company_text("Email Address:\ncontracts@example.com");
    assert_eq!(
        profile.email_address.as_deref(),
        Some("contracts@example.com")
    );
}

#[test]
fn company_naics_list_keeps_order_and_unknown_codes() {
    let profile = parse_company_text("NAICS Codes: 541611, 561320, 999999");
    assert_eq!(
        profile.naics_codes,
        Some(vec![
            "541611".to_string(),
            "561320".to_string(),
            "999999".to_string()
        ])
    );
}

#[test]
fn company_single_naics_code() {
    let profile = parse_company_text("naics codes: 561320");
    assert_eq!(profile.naics_codes, Some(vec!["561320".to_string()]));
}

#[test]
fn company_labels_are_distinct() {
    let labels: std::collections::HashSet<&str> =
        CompanyField::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels.len(), 10);
}

// ============================================================
// RFP requirements
// ============================================================

#[test]
fn rfp_at_least_three_years_in_business() {
    let rfp = extract_rfp_requirements("The contractor shall have at least 3 years in business.");
    assert_eq!(rfp.min_years_in_business, 3);
}

#[test]
fn rfp_experience_and_existence_are_separate() {
    let rfp = extract_rfp_requirements(
        "Minimum 2 years of existence. Offeror must have at least 6 years of experience.",
    );
    assert_eq!(rfp.min_years_in_business, 2);
    assert_eq!(rfp.min_staffing_experience_years, 6);
}

#[test]
fn rfp_first_requirement_wins() {
    let rfp = extract_rfp_requirements("at least 2 years in business; minimum 9 years in business");
    assert_eq!(rfp.min_years_in_business, 2);
}

#[test]
fn rfp_sam_deadline_without_gov_suffix() {
    let rfp = extract_rfp_requirements("SAM registration must be active by 02/28/2025 at 5pm.");
    assert_eq!(rfp.sam_registration_deadline.as_deref(), Some("02/28/2025"));
}

#[test]
fn rfp_due_date_on_later_line_is_not_sam_deadline() {
    let rfp = extract_rfp_requirements(
        "Offerors need an active SAM.gov registration.\nProposals due 12/31/2024.",
    );
    assert!(rfp.sam_registration_deadline.is_none());
}

#[test]
fn rfp_date_without_sam_mention_is_ignored() {
    let rfp = extract_rfp_requirements("Proposals due 03/01/2025. SAM registration required.");
    assert!(rfp.sam_registration_deadline.is_none());
}

#[test]
fn rfp_naics_only_recognized_codes() {
    let text = "Eligible NAICS: 541611, 541612, 561320, 541330, 561311.";
    let rfp = extract_rfp_requirements(text);
    assert_eq!(rfp.allowed_naics_codes, RECOGNIZED_NAICS_CODES.to_vec());
}

#[test]
fn rfp_no_w9_mention() {
    let rfp = extract_rfp_requirements("Submit a capability statement and pricing.");
    assert!(!rfp.requires_w9);
    assert!(!rfp.requires_insurance_certificate);
    assert!(!rfp.requires_dbe_certification);
}

#[test]
fn rfp_flags_are_case_insensitive() {
    let rfp = extract_rfp_requirements(
        "ATTACH W-9. CERTIFICATE OF INSURANCE REQUIRED. dbe certified preferred.",
    );
    assert!(rfp.requires_w9);
    assert!(rfp.requires_insurance_certificate);
    assert!(rfp.requires_dbe_certification);
}

#[test]
fn rfp_garbage_never_panics() {
    let long = "LLC ".repeat(10_000);
    for text in [
        "",
        "\u{0}\u{1}\u{2}",
        "SAM.gov registration 99/99/9999",
        "at least years in business",
        long.as_str(),
    ] {
        let _ = extract_rfp_requirements(text);
    }
}

#[test]
fn rfp_overflow_discards_partial_results() {
    let rfp = extract_rfp_requirements(
        "Must be an LLC with minimum 4294967296 years of experience. W-9 required.",
    );
    assert_eq!(rfp, RfpRequirements::default());
}

#[test]
fn rfp_largest_count_still_parses() {
    let rfp = extract_rfp_requirements("minimum 4294967295 years of experience");
    assert_eq!(rfp.min_staffing_experience_years, u32::MAX);
}
