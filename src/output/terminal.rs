// Colored terminal output for compliance reports and extracted records.
//
// The plain-text report (ComplianceReport's Display impl) is the canonical
// format. This module is the friendlier rendering used by `rfpcheck check`.

use colored::Colorize;

use crate::compare::{ComplianceReport, Verdict, REPORT_HEADER};

/// Longest company value shown before truncation.
const MAX_VALUE_CHARS: usize = 48;

/// Display a compliance report with colored verdicts and a summary.
pub fn display_report(report: &ComplianceReport) {
    println!("\n{}", REPORT_HEADER.bold());
    println!();

    println!(
        "  {:<24} {:<50} {:<28} {}",
        "Field".dimmed(),
        "Company".dimmed(),
        "RFP".dimmed(),
        "Verdict".dimmed(),
    );
    println!("  {}", "-".repeat(112).dimmed());

    for line in &report.lines {
        println!(
            "  {:<24} {:<50} {:<28} {}",
            line.field.label(),
            super::truncate_chars(&line.company, MAX_VALUE_CHARS),
            line.requirement,
            colorize_verdict(line.verdict),
        );
    }

    println!();
    display_summary(report);
}

/// Print the match/mismatch tally.
pub fn display_summary(report: &ComplianceReport) {
    let matches = report.matches();
    let mismatches = report.mismatches();

    println!(
        "  {} {} matched, {} {} mismatched",
        "✓".green(),
        matches,
        "✗".red(),
        mismatches
    );

    if mismatches == 0 {
        println!("  {}", "Company meets every checked requirement.".green().bold());
    } else {
        let fields: Vec<&str> = report
            .lines
            .iter()
            .filter(|l| !l.verdict.is_match())
            .map(|l| l.field.label())
            .collect();
        println!("  {} {}", "Review:".yellow(), fields.join(", "));
    }
}

fn colorize_verdict(verdict: Verdict) -> colored::ColoredString {
    match verdict {
        Verdict::Match => verdict.as_str().green(),
        Verdict::Mismatch => verdict.as_str().red().bold(),
    }
}
