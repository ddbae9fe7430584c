//! Analytics report parsing
//!
//! Extracts structured password-cracking statistics from the plaintext
//! reports produced by the cracking toolchain. The report format is fixed
//! but externally produced, so extraction works on textual anchors rather
//! than a grammar.

use crate::error::{ReportError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref CRACKED_RE: Regex = Regex::new(r"Cracked:\s+(\d+)").unwrap();
    static ref NOT_CRACKED_RE: Regex = Regex::new(r"Not Cracked:\s+(\d+)").unwrap();
    static ref LENGTH_RE: Regex = Regex::new(r"(\d+)\s+chars:.*?\s+(\d+)\s+\(").unwrap();
    static ref TOP_RE: Regex = Regex::new(r"#\d+\s+(\S+)\s+(\d+)").unwrap();
    static ref COMPLIANT_RE: Regex = Regex::new(r"Compliant passwords:\s+(\d+)").unwrap();
    static ref NON_COMPLIANT_RE: Regex = Regex::new(r"Non-compliant passwords:\s+(\d+)").unwrap();
}

/// Cracked vs. not-cracked credential counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrackTally {
    pub cracked: u64,
    pub not_cracked: u64,
}

impl CrackTally {
    /// Total number of credentials in the audit.
    pub fn total(&self) -> u64 {
        self.cracked + self.not_cracked
    }
}

/// One bucket of the password length distribution, e.g. `"8 chars"` with its
/// occurrence count. Buckets keep the order they first appear in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthBucket {
    pub label: String,
    pub count: u64,
}

/// One ranked password entry from the most-used list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCount {
    pub value: String,
    pub count: u64,
}

/// Policy-compliant vs. non-compliant counts among recovered passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplianceTally {
    pub compliant: u64,
    pub non_compliant: u64,
}

/// Parsed analytics report.
///
/// Created once from the source text and immutable afterward. `lengths` and
/// `top_passwords` preserve document order and may be empty; `general` and
/// `compliance` are mandatory anchors and parsing fails without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsData {
    pub general: CrackTally,
    pub lengths: Vec<LengthBucket>,
    pub top_passwords: Vec<PasswordCount>,
    pub compliance: ComplianceTally,
}

fn parse_count(digits: &str) -> Result<u64> {
    digits
        .parse::<u64>()
        .map_err(|_| ReportError::InvalidCount(digits.to_string()))
}

fn required_anchor(re: &Regex, content: &str, name: &'static str) -> Result<u64> {
    let captures = re
        .captures(content)
        .ok_or(ReportError::MissingAnchor(name))?;
    parse_count(&captures[1])
}

/// Parse the full text of an analytics report.
///
/// Missing `Cracked:`/`Not Cracked:` or `Compliant passwords:`/
/// `Non-compliant passwords:` anchors fail the whole parse; there is no
/// partial result. Length-distribution and top-password sections are
/// optional and produce empty sequences when absent.
pub fn parse_analytics(content: &str) -> Result<AnalyticsData> {
    let general = CrackTally {
        cracked: required_anchor(&CRACKED_RE, content, "Cracked")?,
        not_cracked: required_anchor(&NOT_CRACKED_RE, content, "Not Cracked")?,
    };

    let mut lengths = Vec::new();
    for captures in LENGTH_RE.captures_iter(content) {
        lengths.push(LengthBucket {
            label: format!("{} chars", &captures[1]),
            count: parse_count(&captures[2])?,
        });
    }

    let mut top_passwords = Vec::new();
    for captures in TOP_RE.captures_iter(content) {
        top_passwords.push(PasswordCount {
            value: captures[1].to_string(),
            count: parse_count(&captures[2])?,
        });
    }

    let compliance = ComplianceTally {
        compliant: required_anchor(&COMPLIANT_RE, content, "Compliant passwords")?,
        non_compliant: required_anchor(&NON_COMPLIANT_RE, content, "Non-compliant passwords")?,
    };

    tracing::debug!(
        cracked = general.cracked,
        not_cracked = general.not_cracked,
        length_buckets = lengths.len(),
        top_entries = top_passwords.len(),
        "parsed analytics report"
    );

    Ok(AnalyticsData {
        general,
        lengths,
        top_passwords,
        compliance,
    })
}

/// Read and parse an analytics report file.
pub fn parse_analytics_file<P: AsRef<Path>>(path: P) -> Result<AnalyticsData> {
    let content = fs::read_to_string(path)?;
    parse_analytics(&content)
}
