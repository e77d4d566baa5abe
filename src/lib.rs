// rfpcheck: compliance checking of a company profile against an RFP
//
// This is the library root. Text goes in through `documents`, is parsed by
// `extract` into typed records, and `compare` turns the two records into an
// ordered Match/Mismatch report.

pub mod compare;
pub mod config;
pub mod documents;
pub mod extract;
pub mod output;

#[cfg(feature = "web")]
pub mod web;
