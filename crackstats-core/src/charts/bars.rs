//! Bar charts
//!
//! Vertical bars for the length distribution and horizontal bars for the
//! top-10 list. Both cycle the ten-color categorical palette, draw light
//! gridlines behind the bars and keep a single thin axis line.

use super::palette::{
    CANVAS_SIZE, CATEGORY_COLORS, FRAME_GREY, LABEL_SIZE, TITLE_GREY, TITLE_SIZE,
};
use super::{draw_err, frame};
use crate::analytics::{LengthBucket, PasswordCount};
use crate::error::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;

// Bars occupy the middle 30% of their slot.
const BAR_INSET: f64 = 0.35;

fn title_style<'a>() -> TextStyle<'a> {
    FontDesc::new(FontFamily::SansSerif, TITLE_SIZE, FontStyle::Normal).color(&TITLE_GREY)
}

fn tick_font<'a>() -> FontDesc<'a> {
    FontDesc::new(FontFamily::SansSerif, LABEL_SIZE, FontStyle::Normal)
}

/// Render the password length distribution as vertical bars in parse order.
///
/// An empty distribution renders a degenerate chart with empty axes.
pub(crate) fn render_vertical_bars(
    path: &Path,
    buckets: &[LengthBucket],
    title: &str,
) -> Result<()> {
    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    frame(&root)?;

    let x_max = buckets.len().max(1) as f64;
    let y_max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, title_style())
        .margin(25)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    // Light horizontal gridlines only; the axis lines the mesh would draw
    // are replaced by a single bottom line below.
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .bold_line_style(FRAME_GREY)
        .light_line_style(TRANSPARENT)
        .axis_style(TRANSPARENT)
        .set_all_tick_mark_size(0)
        .y_label_style(tick_font().color(&TITLE_GREY))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(buckets.iter().enumerate().map(|(i, bucket)| {
            let color = CATEGORY_COLORS[i % CATEGORY_COLORS.len()];
            Rectangle::new(
                [
                    (i as f64 + BAR_INSET, 0.0),
                    (i as f64 + 1.0 - BAR_INSET, bucket.count as f64),
                ],
                color.filled(),
            )
        }))
        .map_err(draw_err)?;

    // Bottom axis line at zero.
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (x_max, 0.0)],
            FRAME_GREY.stroke_width(1),
        )))
        .map_err(draw_err)?;

    // Category labels centered under each bar.
    let label_style = tick_font()
        .color(&TITLE_GREY)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (i, bucket) in buckets.iter().enumerate() {
        let (px, py) = chart
            .plotting_area()
            .map_coordinate(&(i as f64 + 0.5, 0.0));
        root.draw_text(&bucket.label, &label_style, (px, py + 8))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)
}

/// Render the most-used passwords as horizontal bars.
///
/// Rows are filled bottom-up, so entries are laid out in reversed parse
/// order to put the first-listed password at the top; the palette is
/// reversed in step so every entry keeps its color.
pub(crate) fn render_horizontal_bars(
    path: &Path,
    entries: &[PasswordCount],
    title: &str,
) -> Result<()> {
    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    frame(&root)?;

    let n = entries.len();
    let y_max = n.max(1) as f64;
    let x_max = entries.iter().map(|e| e.count).max().unwrap_or(0).max(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, title_style())
        .margin(25)
        .x_label_area_size(45)
        .y_label_area_size(150)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        .map_err(draw_err)?;

    // Light vertical gridlines only.
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .bold_line_style(FRAME_GREY)
        .light_line_style(TRANSPARENT)
        .axis_style(TRANSPARENT)
        .set_all_tick_mark_size(0)
        .x_label_style(tick_font().color(&TITLE_GREY))
        .x_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, entry)| {
            let row = (n - 1 - i) as f64;
            let color = CATEGORY_COLORS[i % CATEGORY_COLORS.len()];
            Rectangle::new(
                [
                    (0.0, row + BAR_INSET),
                    (entry.count as f64, row + 1.0 - BAR_INSET),
                ],
                color.filled(),
            )
        }))
        .map_err(draw_err)?;

    // Left axis line at zero.
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, 0.0), (0.0, y_max)],
            FRAME_GREY.stroke_width(1),
        )))
        .map_err(draw_err)?;

    // Row labels to the left of each bar.
    let label_style = tick_font()
        .color(&TITLE_GREY)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, entry) in entries.iter().enumerate() {
        let row = (n - 1 - i) as f64;
        let (px, py) = chart.plotting_area().map_coordinate(&(0.0, row + 0.5));
        root.draw_text(&entry.value, &label_style, (px - 8, py))
            .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)
}
