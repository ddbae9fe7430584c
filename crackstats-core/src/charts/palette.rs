//! Fixed chart styling
//!
//! All four charts share the canvas geometry, frame and title styling
//! defined here. Colors are not user-configurable.

use plotters::style::RGBColor;

/// Canvas size of every chart, in pixels.
pub const CANVAS_SIZE: (u32, u32) = (1000, 600);

/// Ten-color categorical palette cycled across bar series.
pub const CATEGORY_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Slice colors of the recovery proportion chart (cracked, not cracked).
pub const GENERAL_SLICE_COLORS: [RGBColor; 2] = [RGBColor(255, 153, 153), RGBColor(102, 179, 255)];

/// Slice colors of the compliance proportion chart (compliant, non-compliant).
pub const COMPLIANCE_SLICE_COLORS: [RGBColor; 2] =
    [RGBColor(153, 255, 153), RGBColor(255, 204, 153)];

/// Light grey used for the outer frame, axis lines and gridlines (`#cccccc`).
pub const FRAME_GREY: RGBColor = RGBColor(204, 204, 204);

/// Dark grey used for chart titles (`#4a4a4a`).
pub const TITLE_GREY: RGBColor = RGBColor(74, 74, 74);

/// Title font size in pixels.
pub const TITLE_SIZE: f64 = 28.0;

/// Tick and legend label font size in pixels.
pub const LABEL_SIZE: f64 = 16.0;
