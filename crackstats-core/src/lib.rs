//! # crackstats
//!
//! Turns plaintext password-cracking analytics reports into charts and a
//! localized markdown summary.
//!
//! ## Features
//!
//! - **Analytics Parsing**: Extract crack, length, top-password and policy
//!   compliance statistics from plaintext reports via fixed textual anchors
//! - **Chart Rendering**: Four fixed-layout PNG charts (recovery proportion,
//!   length distribution, top-10 passwords, policy compliance)
//! - **Derived Statistics**: Pre-formatted totals, percentages and length
//!   rankings for template substitution
//! - **Report Composition**: Localized markdown report with charts embedded
//!   inline as base64 data URIs
//! - **Localization**: Built-in English and Spanish templates and labels
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crackstats::{compose_report, parse_analytics_file, render_all_charts, Language};
//!
//! # fn main() -> crackstats::Result<()> {
//! let data = parse_analytics_file("audit_results.txt")?;
//!
//! let outdir = std::path::Path::new("./data");
//! render_all_charts(&data, outdir, Language::En)?;
//!
//! let report = compose_report(&data, outdir, Language::En, None)?;
//! println!("Report written to {}", report.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`analytics`] - Report text parsing into [`AnalyticsData`]
//! - [`stats`] - Derived statistics for template substitution
//! - [`charts`] - PNG chart rendering
//! - [`report`] - Template substitution and image embedding
//! - [`locale`] - The two fixed language tables
//!
//! The pipeline is strictly sequential: parse, then render, then compose.
//! The composer reads chart files from disk, so charts must be rendered
//! into the output directory before the report is composed.

pub mod analytics;
pub mod charts;
pub mod error;
pub mod locale;
pub mod report;
pub mod stats;

pub use analytics::{
    parse_analytics, parse_analytics_file, AnalyticsData, ComplianceTally, CrackTally,
    LengthBucket, PasswordCount,
};
pub use charts::{render_all_charts, render_chart, ChartKind};
pub use error::{ReportError, Result};
pub use locale::{Language, LanguageProfile};
pub use report::{chart_caption, compose_report};
pub use stats::calculate_statistics;
