// Compliance comparison — company profile vs. RFP requirements.
//
// The report always has the same ten rows in the same order. Each row shows
// the company's value, the RFP's requirement, and a Match/Mismatch verdict.
//
// Known inconsistency: the W-9, insurance and DBE/HUB rows decide the verdict
// from the RFP flag alone. The company's own value is shown but not checked.

pub mod rules;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract::{
    extract_rfp_requirements, parse_company_text, CompanyProfile, RfpRequirements,
};
use crate::output::{list_literal, or_none};

pub const REPORT_HEADER: &str = "--- COMPLIANCE REPORT ---";

/// Width the field label is padded to in the text report.
const LABEL_WIDTH: usize = 31;

/// Report rows, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceField {
    BusinessStructure,
    YearsInBusiness,
    StaffingExperience,
    PhoneFormat,
    EmailFormat,
    SamRegistrationDate,
    NaicsCodes,
    W9Form,
    InsuranceCertificate,
    DbeHubCertification,
}

impl ComplianceField {
    pub const ALL: [ComplianceField; 10] = [
        ComplianceField::BusinessStructure,
        ComplianceField::YearsInBusiness,
        ComplianceField::StaffingExperience,
        ComplianceField::PhoneFormat,
        ComplianceField::EmailFormat,
        ComplianceField::SamRegistrationDate,
        ComplianceField::NaicsCodes,
        ComplianceField::W9Form,
        ComplianceField::InsuranceCertificate,
        ComplianceField::DbeHubCertification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComplianceField::BusinessStructure => "Business Structure",
            ComplianceField::YearsInBusiness => "Years in Business",
            ComplianceField::StaffingExperience => "Staffing Experience",
            ComplianceField::PhoneFormat => "Phone Format",
            ComplianceField::EmailFormat => "Email Format",
            ComplianceField::SamRegistrationDate => "SAM Registration Date",
            ComplianceField::NaicsCodes => "NAICS Codes",
            ComplianceField::W9Form => "W-9 Form",
            ComplianceField::InsuranceCertificate => "Insurance Certificate",
            ComplianceField::DbeHubCertification => "DBE/HUB Certification",
        }
    }

    /// Text printed before the company value. The business structure row
    /// shows the bare value.
    pub fn company_prefix(&self) -> &'static str {
        match self {
            ComplianceField::BusinessStructure => "",
            _ => "Company: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    Mismatch,
}

impl Verdict {
    pub fn from_bool(satisfied: bool) -> Self {
        if satisfied {
            Verdict::Match
        } else {
            Verdict::Mismatch
        }
    }

    pub fn is_match(&self) -> bool {
        *self == Verdict::Match
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Match => "✅ Match",
            Verdict::Mismatch => "❌ Mismatch",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the compliance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub field: ComplianceField,
    /// The company's value as displayed.
    pub company: String,
    /// Human-readable description of the RFP requirement.
    pub requirement: String,
    pub verdict: Verdict,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$}| {}{} | RFP: {} | {}",
            self.field.label(),
            self.field.company_prefix(),
            self.company,
            self.requirement,
            self.verdict,
            width = LABEL_WIDTH,
        )
    }
}

/// The ordered result of comparing a company against an RFP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub lines: Vec<ReportLine>,
}

impl ComplianceReport {
    pub fn matches(&self) -> usize {
        self.lines.iter().filter(|l| l.verdict.is_match()).count()
    }

    pub fn mismatches(&self) -> usize {
        self.lines.len() - self.matches()
    }

    pub fn line(&self, field: ComplianceField) -> Option<&ReportLine> {
        self.lines.iter().find(|l| l.field == field)
    }
}

impl fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPORT_HEADER}")?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Compare a company profile against RFP requirements.
pub fn compare(company: &CompanyProfile, rfp: &RfpRequirements) -> ComplianceReport {
    ComplianceReport {
        lines: ComplianceField::ALL
            .into_iter()
            .map(|field| evaluate(field, company, rfp))
            .collect(),
    }
}

/// Run the whole pipeline over two already-extracted document texts.
pub fn check_compliance(company_text: &str, rfp_text: &str) -> ComplianceReport {
    let company = parse_company_text(company_text);
    let rfp = extract_rfp_requirements(rfp_text);
    compare(&company, &rfp)
}

fn evaluate(
    field: ComplianceField,
    company: &CompanyProfile,
    rfp: &RfpRequirements,
) -> ReportLine {
    let (company_value, requirement, satisfied) = match field {
        ComplianceField::BusinessStructure => (
            or_none(company.business_structure.as_deref()),
            or_none(rfp.required_business_structure.as_deref()),
            company.business_structure == rfp.required_business_structure,
        ),
        ComplianceField::YearsInBusiness => (
            company.years_in_business.to_string(),
            format!(">= {}", rfp.min_years_in_business),
            company.years_in_business >= rfp.min_years_in_business,
        ),
        ComplianceField::StaffingExperience => (
            company.staffing_experience_years.to_string(),
            format!(">= {}", rfp.min_staffing_experience_years),
            company.staffing_experience_years >= rfp.min_staffing_experience_years,
        ),
        ComplianceField::PhoneFormat => (
            or_none(company.phone_number.as_deref()),
            "Valid US format".to_string(),
            rules::phone_is_valid(company.phone_number.as_deref()),
        ),
        ComplianceField::EmailFormat => (
            or_none(company.email_address.as_deref()),
            "Valid format".to_string(),
            rules::email_is_valid(company.email_address.as_deref()),
        ),
        ComplianceField::SamRegistrationDate => (
            or_none(company.sam_registration_date.as_deref()),
            format!("Before {}", or_none(rfp.sam_registration_deadline.as_deref())),
            rules::registered_by(
                company.sam_registration_date.as_deref(),
                rfp.sam_registration_deadline.as_deref(),
            ),
        ),
        ComplianceField::NaicsCodes => {
            let codes = company.naics_codes.as_deref().unwrap_or_default();
            (
                list_literal(codes),
                list_literal(&rfp.allowed_naics_codes),
                rules::shares_naics_code(codes, &rfp.allowed_naics_codes),
            )
        }
        ComplianceField::W9Form => (
            or_none(company.w9_form.as_deref()),
            "Required".to_string(),
            rfp.requires_w9,
        ),
        ComplianceField::InsuranceCertificate => (
            or_none(company.insurance_certificate.as_deref()),
            "Required".to_string(),
            rfp.requires_insurance_certificate,
        ),
        ComplianceField::DbeHubCertification => (
            or_none(company.dbe_certification.as_deref()),
            "Optional".to_string(),
            !rfp.requires_dbe_certification,
        ),
    };

    ReportLine {
        field,
        company: company_value,
        requirement,
        verdict: Verdict::from_bool(satisfied),
    }
}
