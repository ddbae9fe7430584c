//! Two-slice proportion charts
//!
//! Used for the recovery and compliance charts: a pie with the slice
//! percentage printed inside each slice and a frameless legend to the right.

use super::palette::{CANVAS_SIZE, LABEL_SIZE, TITLE_GREY, TITLE_SIZE};
use super::{draw_err, frame};
use crate::error::{ReportError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;

const PIE_CENTER: (i32, i32) = (420, 330);
const PIE_RADIUS: f64 = 220.0;
// Slice separation, as a fraction of the radius.
const EXPLODE: f64 = 0.02;
const SEGMENT_STEPS: usize = 100;

fn draw_slice(
    root: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    start_angle: f64,
    sweep_angle: f64,
    color: RGBColor,
) -> Result<()> {
    let mid = (start_angle + sweep_angle / 2.0).to_radians();
    let center = (
        PIE_CENTER.0 + (PIE_RADIUS * EXPLODE * mid.cos()) as i32,
        PIE_CENTER.1 + (PIE_RADIUS * EXPLODE * mid.sin()) as i32,
    );

    let mut points = Vec::with_capacity(SEGMENT_STEPS + 2);
    points.push(center);
    for i in 0..=SEGMENT_STEPS {
        let angle = start_angle + sweep_angle * i as f64 / SEGMENT_STEPS as f64;
        let rad = angle.to_radians();
        points.push((
            center.0 + (PIE_RADIUS * rad.cos()) as i32,
            center.1 + (PIE_RADIUS * rad.sin()) as i32,
        ));
    }

    root.draw(&Polygon::new(points, color.filled()))
        .map_err(draw_err)
}

/// Render a two-slice proportion chart.
///
/// Fails with [`ReportError::EmptySeries`] when both counts are zero, since
/// the slice fractions are undefined in that case.
pub(crate) fn render_proportion_chart(
    path: &Path,
    values: [u64; 2],
    labels: [&str; 2],
    title: &str,
    slice_colors: [RGBColor; 2],
    series: &'static str,
) -> Result<()> {
    let total = values[0] + values[1];
    if total == 0 {
        return Err(ReportError::EmptySeries(series));
    }

    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    frame(&root)?;

    let title_style = FontDesc::new(FontFamily::SansSerif, TITLE_SIZE, FontStyle::Normal)
        .color(&TITLE_GREY)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw_text(title, &title_style, (CANVAS_SIZE.0 as i32 / 2, 20))
        .map_err(draw_err)?;

    let percent_style = FontDesc::new(FontFamily::SansSerif, 22.0, FontStyle::Bold)
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));

    // Slices start at the top of the pie and sweep clockwise.
    let mut start_angle = -90.0;
    for (value, color) in values.iter().zip(slice_colors) {
        let fraction = *value as f64 / total as f64;
        let sweep_angle = fraction * 360.0;
        draw_slice(&root, start_angle, sweep_angle, color)?;

        let mid = (start_angle + sweep_angle / 2.0).to_radians();
        let label_pos = (
            PIE_CENTER.0 + (PIE_RADIUS * 0.6 * mid.cos()) as i32,
            PIE_CENTER.1 + (PIE_RADIUS * 0.6 * mid.sin()) as i32,
        );
        root.draw_text(&format!("{:.1}%", fraction * 100.0), &percent_style, label_pos)
            .map_err(draw_err)?;

        start_angle += sweep_angle;
    }

    // Legend to the right of the pie, swatch plus label, no frame.
    let legend_style = FontDesc::new(FontFamily::SansSerif, LABEL_SIZE + 2.0, FontStyle::Normal)
        .color(&TITLE_GREY)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let legend_x = PIE_CENTER.0 + PIE_RADIUS as i32 + 80;
    for (i, (label, color)) in labels.iter().zip(slice_colors).enumerate() {
        let y = PIE_CENTER.1 - 20 + i as i32 * 40;
        root.draw(&Rectangle::new(
            [(legend_x, y - 9), (legend_x + 18, y + 9)],
            color.filled(),
        ))
        .map_err(draw_err)?;
        root.draw_text(label, &legend_style, (legend_x + 28, y))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)
}
