//! Chart rendering
//!
//! Produces the four fixed-layout PNG charts from parsed analytics data.
//! Filenames are fixed and language-independent, so re-running in another
//! language overwrites the images in place; only titles and legend labels
//! are localized.

pub mod palette;

mod bars;
mod proportion;


use crate::analytics::AnalyticsData;
use crate::error::{ReportError, Result};
use crate::locale::{self, Language};
use palette::{CANVAS_SIZE, FRAME_GREY};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// The four chart artifacts produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    GeneralStats,
    LengthDistribution,
    TopPasswords,
    Compliance,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::GeneralStats,
        ChartKind::LengthDistribution,
        ChartKind::TopPasswords,
        ChartKind::Compliance,
    ];

    /// Fixed output filename for this chart.
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::GeneralStats => "general_stats.png",
            ChartKind::LengthDistribution => "length_distribution.png",
            ChartKind::TopPasswords => "top_10_passwords.png",
            ChartKind::Compliance => "compliance_analysis.png",
        }
    }
}

pub(crate) fn draw_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::ChartRender(e.to_string())
}

/// 1px light-grey border around the full canvas.
pub(crate) fn frame(root: &DrawingArea<BitMapBackend, Shift>) -> Result<()> {
    root.draw(&Rectangle::new(
        [
            (0, 0),
            (CANVAS_SIZE.0 as i32 - 1, CANVAS_SIZE.1 as i32 - 1),
        ],
        FRAME_GREY.stroke_width(1),
    ))
    .map_err(draw_err)
}

/// Render one chart kind into `outdir` and return the artifact path.
pub fn render_chart(
    data: &AnalyticsData,
    outdir: &Path,
    language: Language,
    kind: ChartKind,
) -> Result<PathBuf> {
    let profile = locale::profile(language);
    let path = outdir.join(kind.file_name());

    match kind {
        ChartKind::GeneralStats => proportion::render_proportion_chart(
            &path,
            [data.general.cracked, data.general.not_cracked],
            profile.general_labels,
            profile.general_title,
            palette::GENERAL_SLICE_COLORS,
            "general",
        )?,
        ChartKind::LengthDistribution => {
            bars::render_vertical_bars(&path, &data.lengths, profile.length_title)?
        }
        ChartKind::TopPasswords => {
            bars::render_horizontal_bars(&path, &data.top_passwords, profile.top_title)?
        }
        ChartKind::Compliance => proportion::render_proportion_chart(
            &path,
            [data.compliance.compliant, data.compliance.non_compliant],
            profile.compliance_labels,
            profile.compliance_title,
            palette::COMPLIANCE_SLICE_COLORS,
            "compliance",
        )?,
    }

    tracing::debug!(chart = kind.file_name(), "rendered chart");
    Ok(path)
}

/// Render all four charts into `outdir`, in a fixed order.
pub fn render_all_charts(
    data: &AnalyticsData,
    outdir: &Path,
    language: Language,
) -> Result<Vec<PathBuf>> {
    let mut rendered = Vec::with_capacity(ChartKind::ALL.len());
    for kind in ChartKind::ALL {
        rendered.push(render_chart(data, outdir, language, kind)?);
    }
    tracing::info!(outdir = %outdir.display(), "rendered {} charts", rendered.len());
    Ok(rendered)
}
