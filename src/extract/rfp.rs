// RFP requirement extraction.
//
// Requirements are pulled from prose ("at least 3 years in business",
// "SAM.gov registration ... by 01/10/2024") rather than labelled lines.
// Unlike the company extractor, failure here is all-or-nothing: if any step
// errors, the whole record falls back to its defaults.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The only NAICS codes an RFP is scanned for. Other codes in the text are
/// ignored.
pub const RECOGNIZED_NAICS_CODES: [&str; 3] = ["541611", "541612", "561320"];

/// Requirements extracted from a request-for-proposal document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpRequirements {
    /// Only "LLC" is ever detected.
    pub required_business_structure: Option<String>,
    pub min_years_in_business: u32,
    pub min_staffing_experience_years: u32,
    /// Date token following the SAM registration mention, MM/DD/YYYY shaped.
    pub sam_registration_deadline: Option<String>,
    /// Recognized codes in order of occurrence, duplicates kept.
    pub allowed_naics_codes: Vec<String>,
    pub requires_w9: bool,
    pub requires_insurance_certificate: bool,
    pub requires_dbe_certification: bool,
}

struct RfpPatterns {
    min_years: Regex,
    min_staffing: Regex,
    sam_deadline: Regex,
    naics: Regex,
}

impl RfpPatterns {
    fn compile() -> Result<Self, regex_lite::Error> {
        Ok(Self {
            min_years: Regex::new(
                r"(?i)(?:at least|min(?:imum)?)\s+(\d+)\s+years? (?:of existence|in business)",
            )?,
            min_staffing: Regex::new(r"(?i)(?:at least|min(?:imum)?)\s+(\d+)\s+years? of experience")?,
            sam_deadline: Regex::new(r"(?i)SAM(?:\.gov)? registration.*?([0-9]{2}/[0-9]{2}/[0-9]{4})")?,
            naics: Regex::new(&format!(r"\b({})\b", RECOGNIZED_NAICS_CODES.join("|")))?,
        })
    }
}

static PATTERNS: LazyLock<Result<RfpPatterns, regex_lite::Error>> =
    LazyLock::new(RfpPatterns::compile);

/// Extract RFP requirements from free text. Never fails.
///
/// Any internal error discards partial progress and yields
/// `RfpRequirements::default()`.
pub fn extract_rfp_requirements(text: &str) -> RfpRequirements {
    match try_extract(text) {
        Ok(requirements) => {
            debug!(
                min_years = requirements.min_years_in_business,
                min_staffing = requirements.min_staffing_experience_years,
                naics = requirements.allowed_naics_codes.len(),
                "Extracted RFP requirements"
            );
            requirements
        }
        Err(e) => {
            warn!(error = %e, "RFP extraction failed, using empty requirements");
            RfpRequirements::default()
        }
    }
}

fn try_extract(text: &str) -> Result<RfpRequirements> {
    let patterns = PATTERNS
        .as_ref()
        .map_err(|e| anyhow::anyhow!("RFP patterns failed to compile: {e}"))?;
    let lower = text.to_lowercase();

    Ok(RfpRequirements {
        required_business_structure: text.contains("LLC").then(|| "LLC".to_string()),
        min_years_in_business: capture_count(&patterns.min_years, text)
            .context("minimum years in business")?,
        min_staffing_experience_years: capture_count(&patterns.min_staffing, text)
            .context("minimum staffing experience")?,
        sam_registration_deadline: capture_str(&patterns.sam_deadline, text).map(str::to_string),
        allowed_naics_codes: patterns
            .naics
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        requires_w9: lower.contains("w-9"),
        requires_insurance_certificate: lower.contains("certificate of insurance"),
        requires_dbe_certification: lower.contains("dbe certified"),
    })
}

fn capture_str<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the first capture group as a count; 0 when the pattern is absent.
fn capture_count(pattern: &Regex, text: &str) -> Result<u32> {
    match capture_str(pattern, text) {
        Some(digits) => digits
            .parse()
            .with_context(|| format!("invalid year count {digits:?}")),
        None => Ok(0),
    }
}
