//! SVG preview of a computed sheet layout.
//!
//! Renders the scaled sheet, the centered projection bounding box, and the
//! isometric silhouette of the object inside it — a quick visual check
//! before committing the layout to paper.
//!
//! # Example
//!
//! ```
//! use isolayout::{Dimensions, SheetFormat, compute_layout};
//! use isolayout::svg::render_sheet_svg;
//!
//! let dims = Dimensions::new(50.0, 50.0, 50.0);
//! let layout = compute_layout(dims.project(), 1.0, SheetFormat::BASE).unwrap();
//!
//! let svg = render_sheet_svg(&dims, &layout);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::projection::{Dimensions, ISO_ANGLE_DEG, ProjectionBox};
use crate::sheet::SheetLayout;

/// Maximum pixel width of the rendered sheet.
const MAX_SHEET_W: f64 = 540.0;
/// Maximum pixel height of the rendered sheet.
const MAX_SHEET_H: f64 = 386.0;
/// Padding around the sheet for margin labels.
const PAD: f64 = 48.0;
/// Label font size in pixels.
const FONT_SIZE: f64 = 11.0;

/// Render the layout as a standalone SVG document.
///
/// `dims` must be the dimensions the layout was computed from; they are used
/// only to draw the cuboid silhouette inside the bounding box.
pub fn render_sheet_svg(dims: &Dimensions, layout: &SheetLayout) -> String {
    // One scale for both axes, so the sheet keeps its aspect ratio.
    let px = (MAX_SHEET_W / layout.format.width).min(MAX_SHEET_H / layout.format.height);

    let sheet_w = layout.format.width * px;
    let sheet_h = layout.format.height * px;
    let doc_w = sheet_w + 2.0 * PAD;
    let doc_h = sheet_h + 2.0 * PAD;

    let bbox_x = PAD + layout.margin_left * px;
    let bbox_y = PAD + layout.margin_top * px;
    let bbox_w = layout.projection.iso_width * px;
    let bbox_h = layout.projection.iso_height * px;

    let mut out = String::with_capacity(2048);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{doc_w:.0}\" height=\"{doc_h:.0}\" \
         viewBox=\"0 0 {doc_w:.2} {doc_h:.2}\" font-family=\"sans-serif\" font-size=\"{FONT_SIZE}\">\n"
    ));

    // Sheet outline.
    out.push_str(&format!(
        "  <rect x=\"{PAD:.2}\" y=\"{PAD:.2}\" width=\"{sheet_w:.2}\" height=\"{sheet_h:.2}\" \
         fill=\"white\" stroke=\"#333\" stroke-width=\"1.5\"/>\n"
    ));

    // Projection bounding box, dashed.
    out.push_str(&format!(
        "  <rect x=\"{bbox_x:.2}\" y=\"{bbox_y:.2}\" width=\"{bbox_w:.2}\" height=\"{bbox_h:.2}\" \
         fill=\"none\" stroke=\"#888\" stroke-width=\"1\" stroke-dasharray=\"4 3\"/>\n"
    ));

    push_silhouette(&mut out, dims, &layout.projection, bbox_x, bbox_y, px);
    push_margin_labels(&mut out, layout, bbox_y, sheet_w);

    out.push_str("</svg>\n");
    out
}

/// Draw the isometric cuboid implied by `dims` inside the bounding box.
///
/// Screen coordinates, y growing downward: the width axis leans up-left, the
/// depth axis up-right, the height axis straight up. The six silhouette
/// vertices land exactly on the bounding-box edges.
fn push_silhouette(
    out: &mut String,
    dims: &Dimensions,
    bbox: &ProjectionBox,
    bx: f64,
    by: f64,
    px: f64,
) {
    let (sin, cos) = ISO_ANGLE_DEG.to_radians().sin_cos();
    let cw = (dims.width * cos).abs() * px;
    let ch = (dims.width * sin).abs() * px;
    let dw = (dims.depth * cos).abs() * px;
    let dh = (dims.depth * sin).abs() * px;
    let h = dims.height.abs() * px;
    let w_total = bbox.iso_width * px;
    let h_total = bbox.iso_height * px;

    let pt = |x: f64, y: f64| (bx + x, by + y);
    let bottom = pt(cw, h_total);
    let left = pt(0.0, h_total - ch);
    let left_top = pt(0.0, h_total - ch - h);
    let top = pt(dw, 0.0);
    let right_top = pt(w_total, h_total - dh - h);
    let right = pt(w_total, h_total - dh);
    let front_top = pt(cw, h_total - h);

    let ring = [bottom, left, left_top, top, right_top, right];
    let mut points = String::new();
    for (x, y) in ring {
        points.push_str(&format!("{x:.2},{y:.2} "));
    }
    out.push_str(&format!(
        "  <polygon points=\"{}\" fill=\"#dce9f5\" stroke=\"#1f4e79\" stroke-width=\"1.2\"/>\n",
        points.trim_end()
    ));

    // Interior edges meeting at the top of the front vertical edge.
    for (x, y) in [bottom, left_top, right_top] {
        out.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{x:.2}\" y2=\"{y:.2}\" \
             stroke=\"#1f4e79\" stroke-width=\"1\"/>\n",
            front_top.0, front_top.1
        ));
    }
}

/// Annotate the margins with their millimeter values, above the sheet.
fn push_margin_labels(out: &mut String, layout: &SheetLayout, bbox_y: f64, sheet_w: f64) {
    out.push_str(&format!(
        "  <text x=\"{PAD:.2}\" y=\"{:.2}\" fill=\"#555\">left/right: {:.2} mm</text>\n",
        PAD - 8.0,
        layout.margin_left
    ));
    out.push_str(&format!(
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" fill=\"#555\">\
         top/bottom: {:.2} mm</text>\n",
        PAD + sheet_w,
        bbox_y - 4.0,
        layout.margin_top
    ));
}
