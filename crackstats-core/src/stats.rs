//! Derived report statistics
//!
//! Computes the summary values substituted into the report template. Every
//! value is pre-formatted: the composer consumes them verbatim.

use crate::analytics::AnalyticsData;
use std::collections::HashMap;

/// Placeholder key for the total credential count.
pub const TOTAL_AMOUNT_OF_CREDS: &str = "TOTAL_AMOUNT_OF_CREDS";
/// Placeholder key for the recovered credential count.
pub const RECOVERED_AMOUNT_OF_CREDS: &str = "RECOVERED_AMOUNT_OF_CREDS";
/// Placeholder key for the recovered percentage.
pub const RECOVERED_AMOUNT_OF_CREDS_PERCENTAGE: &str = "RECOVERED_AMOUNT_OF_CREDS_PERCENTAGE";
/// Placeholder key for the most common password length.
pub const HIGHEST_PASSWORD_LENGTH_DISTRIBUTION: &str = "HIGHEST_PASSWORD_LENGTH_DISTRIBUTION";
/// Placeholder key for the second most common password length.
pub const SECOND_HIGHEST_PASSWORD_LENGTH_DISTRIBUTION: &str =
    "SECOND_HIGHEST_PASSWORD_LENGTH_DISTRIBUTION";
/// Placeholder key for the policy compliance percentage.
pub const COMPLIANCE_PASSWORD_PERCENTAGE: &str = "COMPLIANCE_PASSWORD_PERCENTAGE";

fn percentage(numerator: u64, denominator: u64) -> String {
    if denominator == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", numerator as f64 / denominator as f64 * 100.0)
}

/// Compute the formatted statistics consumed by the report template.
///
/// Length buckets are ranked by count, descending; the sort is stable so
/// ties keep their first-seen order. With fewer than one or two buckets the
/// corresponding rank resolves to `"N/A"`.
pub fn calculate_statistics(data: &AnalyticsData) -> HashMap<&'static str, String> {
    let total_creds = data.general.total();
    let recovered_creds = data.general.cracked;

    let mut ranked: Vec<_> = data.lengths.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    let highest_length = ranked
        .first()
        .map(|b| b.label.clone())
        .unwrap_or_else(|| "N/A".to_string());
    let second_highest_length = ranked
        .get(1)
        .map(|b| b.label.clone())
        .unwrap_or_else(|| "N/A".to_string());

    let mut stats = HashMap::new();
    stats.insert(TOTAL_AMOUNT_OF_CREDS, total_creds.to_string());
    stats.insert(RECOVERED_AMOUNT_OF_CREDS, recovered_creds.to_string());
    stats.insert(
        RECOVERED_AMOUNT_OF_CREDS_PERCENTAGE,
        percentage(recovered_creds, total_creds),
    );
    stats.insert(HIGHEST_PASSWORD_LENGTH_DISTRIBUTION, highest_length);
    stats.insert(
        SECOND_HIGHEST_PASSWORD_LENGTH_DISTRIBUTION,
        second_highest_length,
    );
    stats.insert(
        COMPLIANCE_PASSWORD_PERCENTAGE,
        percentage(data.compliance.compliant, recovered_creds),
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{ComplianceTally, CrackTally, LengthBucket};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn sample_data(
        cracked: u64,
        not_cracked: u64,
        compliant: u64,
        lengths: &[(&str, u64)],
    ) -> AnalyticsData {
        AnalyticsData {
            general: CrackTally {
                cracked,
                not_cracked,
            },
            lengths: lengths
                .iter()
                .map(|(label, count)| LengthBucket {
                    label: label.to_string(),
                    count: *count,
                })
                .collect(),
            top_passwords: Vec::new(),
            compliance: ComplianceTally {
                compliant,
                non_compliant: 0,
            },
        }
    }

    #[test]
    fn test_totals_and_recovered_percentage() {
        let stats = calculate_statistics(&sample_data(80, 20, 30, &[]));
        assert_eq!(stats[TOTAL_AMOUNT_OF_CREDS], "100");
        assert_eq!(stats[RECOVERED_AMOUNT_OF_CREDS], "80");
        assert_eq!(stats[RECOVERED_AMOUNT_OF_CREDS_PERCENTAGE], "80.0%");
        assert_eq!(stats[COMPLIANCE_PASSWORD_PERCENTAGE], "37.5%");
    }

    #[test]
    fn test_zero_total_credentials_yields_zero_percent() {
        let stats = calculate_statistics(&sample_data(0, 0, 0, &[]));
        assert_eq!(stats[RECOVERED_AMOUNT_OF_CREDS_PERCENTAGE], "0%");
        assert_eq!(stats[COMPLIANCE_PASSWORD_PERCENTAGE], "0%");
    }

    #[test]
    fn test_zero_cracked_yields_zero_compliance_percent() {
        // The compliant count is irrelevant once nothing was recovered.
        let stats = calculate_statistics(&sample_data(0, 50, 40, &[]));
        assert_eq!(stats[COMPLIANCE_PASSWORD_PERCENTAGE], "0%");
    }

    #[test]
    fn test_length_ranking_is_stable_on_ties() {
        let stats = calculate_statistics(&sample_data(
            1,
            1,
            1,
            &[("8 chars", 5), ("10 chars", 9), ("12 chars", 9)],
        ));
        assert_eq!(stats[HIGHEST_PASSWORD_LENGTH_DISTRIBUTION], "10 chars");
        assert_eq!(stats[SECOND_HIGHEST_PASSWORD_LENGTH_DISTRIBUTION], "12 chars");
    }

    #[test]
    fn test_missing_length_ranks_fall_back_to_na() {
        let stats = calculate_statistics(&sample_data(1, 1, 1, &[]));
        assert_eq!(stats[HIGHEST_PASSWORD_LENGTH_DISTRIBUTION], "N/A");
        assert_eq!(stats[SECOND_HIGHEST_PASSWORD_LENGTH_DISTRIBUTION], "N/A");

        let stats = calculate_statistics(&sample_data(1, 1, 1, &[("8 chars", 5)]));
        assert_eq!(stats[HIGHEST_PASSWORD_LENGTH_DISTRIBUTION], "8 chars");
        assert_eq!(stats[SECOND_HIGHEST_PASSWORD_LENGTH_DISTRIBUTION], "N/A");
    }

    fn parse_percent(value: &str) -> f64 {
        value.trim_end_matches('%').parse::<f64>().unwrap()
    }

    proptest! {
        #[test]
        fn recovered_percentage_stays_in_range(
            cracked in 0u64..1_000_000,
            not_cracked in 0u64..1_000_000,
        ) {
            let stats = calculate_statistics(&sample_data(cracked, not_cracked, 0, &[]));
            let pct = parse_percent(&stats[RECOVERED_AMOUNT_OF_CREDS_PERCENTAGE]);
            prop_assert!((0.0..=100.0).contains(&pct));
        }

        #[test]
        fn compliance_percentage_stays_in_range(
            cracked in 0u64..1_000_000,
            compliant_delta in 0u64..1_000_000,
        ) {
            // Compliant passwords are a subset of the recovered ones.
            let compliant = cracked.saturating_sub(compliant_delta);
            let stats = calculate_statistics(&sample_data(cracked, 0, compliant, &[]));
            let pct = parse_percent(&stats[COMPLIANCE_PASSWORD_PERCENTAGE]);
            prop_assert!((0.0..=100.0).contains(&pct));
        }

        #[test]
        fn zero_cracked_always_reports_zero_compliance(compliant in 0u64..1_000_000) {
            let stats = calculate_statistics(&sample_data(0, 10, compliant, &[]));
            prop_assert_eq!(stats[COMPLIANCE_PASSWORD_PERCENTAGE].as_str(), "0%");
        }
    }
}
