// Company profile extraction.
//
// A company profile is a loose list of "Label: value" lines. Each field of
// CompanyProfile is bound to one fixed label, matched case-insensitively.
// The first line carrying the label wins; a missing label leaves the field
// at its default.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::parse_count;

/// Attributes extracted from a company profile document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// e.g. "LLC", "Corporation"
    pub business_structure: Option<String>,
    pub years_in_business: u32,
    pub staffing_experience_years: u32,
    /// Raw phone number text; format is checked at comparison time.
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    /// Expected in MM/DD/YYYY form, stored as written.
    pub sam_registration_date: Option<String>,
    /// Codes in the order they were listed. `None` when the label is absent.
    pub naics_codes: Option<Vec<String>>,
    pub w9_form: Option<String>,
    pub insurance_certificate: Option<String>,
    pub dbe_certification: Option<String>,
}

/// The fields of a company profile, each bound to the label that introduces
/// it in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyField {
    BusinessStructure,
    YearsInBusiness,
    StaffingExperience,
    PhoneNumber,
    EmailAddress,
    SamRegistrationDate,
    NaicsCodes,
    W9Form,
    InsuranceCertificate,
    DbeCertification,
}

impl CompanyField {
    pub const ALL: [CompanyField; 10] = [
        CompanyField::BusinessStructure,
        CompanyField::YearsInBusiness,
        CompanyField::StaffingExperience,
        CompanyField::PhoneNumber,
        CompanyField::EmailAddress,
        CompanyField::SamRegistrationDate,
        CompanyField::NaicsCodes,
        CompanyField::W9Form,
        CompanyField::InsuranceCertificate,
        CompanyField::DbeCertification,
    ];

    /// The literal label searched for in the document text.
    pub fn label(&self) -> &'static str {
        match self {
            CompanyField::BusinessStructure => "Business Structure",
            CompanyField::YearsInBusiness => "Company Length of Existence",
            CompanyField::StaffingExperience => "Years of Experience in Temporary Staffing",
            CompanyField::PhoneNumber => "Phone Number",
            CompanyField::EmailAddress => "Email Address",
            CompanyField::SamRegistrationDate => "SAM.gov Registration Date",
            CompanyField::NaicsCodes => "NAICS Codes",
            CompanyField::W9Form => "W-9 Form",
            CompanyField::InsuranceCertificate => "Certificate of Insurance",
            CompanyField::DbeCertification => "Historically Underutilized Business/DBE Status",
        }
    }
}

/// One compiled lookup: `<label> : <rest of line>`.
struct FieldRule {
    field: CompanyField,
    pattern: Regex,
}

impl FieldRule {
    fn compile(field: CompanyField) -> Option<Self> {
        let source = format!(r"(?i){}\s*:\s*(.+)", regex_lite::escape(field.label()));
        match Regex::new(&source) {
            Ok(pattern) => Some(Self { field, pattern }),
            Err(e) => {
                // The field just stays at its default.
                warn!(label = field.label(), error = %e, "Skipping company field rule");
                None
            }
        }
    }

    /// Raw captured value of the first matching line.
    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

static FIELD_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    CompanyField::ALL
        .into_iter()
        .filter_map(FieldRule::compile)
        .collect()
});

/// Extract a company profile from free text. Never fails.
pub fn parse_company_text(text: &str) -> CompanyProfile {
    let mut profile = CompanyProfile::default();
    let mut found = 0usize;

    for rule in FIELD_RULES.iter() {
        if let Some(raw) = rule.find(text) {
            profile.apply(rule.field, raw);
            found += 1;
        }
    }

    debug!(
        fields_found = found,
        fields_total = CompanyField::ALL.len(),
        "Parsed company profile"
    );
    profile
}

impl CompanyProfile {
    /// Store a raw captured value in the field it belongs to.
    fn apply(&mut self, field: CompanyField, raw: &str) {
        let text = || Some(raw.trim().to_string());
        match field {
            CompanyField::BusinessStructure => self.business_structure = text(),
            CompanyField::YearsInBusiness => self.years_in_business = parse_count(raw),
            CompanyField::StaffingExperience => self.staffing_experience_years = parse_count(raw),
            CompanyField::PhoneNumber => self.phone_number = text(),
            CompanyField::EmailAddress => self.email_address = text(),
            CompanyField::SamRegistrationDate => self.sam_registration_date = text(),
            CompanyField::NaicsCodes => {
                self.naics_codes = Some(
                    raw.split(',')
                        .map(|code| code.trim().to_string())
                        .collect(),
                )
            }
            CompanyField::W9Form => self.w9_form = text(),
            CompanyField::InsuranceCertificate => self.insurance_certificate = text(),
            CompanyField::DbeCertification => self.dbe_certification = text(),
        }
    }
}
