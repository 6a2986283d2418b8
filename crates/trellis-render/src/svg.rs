//! SVG snapshot export.
//!
//! Serializes a [`Frame`] to a standalone SVG document: one `<g>` render
//! group carrying the pan+zoom transform, a `<path>` per edge, and a
//! `<rect>` + text block per node. Used by the export action; embedders
//! drawing live frames don't go through here.

use crate::scene::{Emphasis, Frame, NodePaint};
use std::fmt::Write;
use trellis_core::Color;

/// Label ink for a given node fill: dark text on light cards, light text
/// on dark boxes.
fn label_color(fill: Color) -> &'static str {
    // Rec. 601 luma, good enough to pick between two inks.
    let luma = 0.299 * f64::from(fill.r) + 0.587 * f64::from(fill.g) + 0.114 * f64::from(fill.b);
    if luma > 150.0 { "#1e293b" } else { "#fafafa" }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Render a frame to an SVG document of the given pixel size.
pub fn render_svg(frame: &Frame, width: f64, height: f64) -> String {
    log::debug!(
        "svg export: {} edges, {} nodes",
        frame.edges.len(),
        frame.nodes.len()
    );
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    out.push_str("<style>\n  text { font-family: Geist, Inter, system-ui, sans-serif; }\n</style>\n");

    // The whole diagram is one transformed group, matching the live
    // canvas: translate(pan) scale(zoom) as a single affine.
    let [a, b, c, d, e, f] = frame.transform.as_coeffs();
    let _ = writeln!(out, "<g transform=\"matrix({a} {b} {c} {d} {e} {f})\">");

    for edge in &frame.edges {
        let stroke_width = if edge.emphasis == Emphasis::Highlighted { 2.5 } else { 1.5 };
        let dash = if edge.dashed { " stroke-dasharray=\"6 3\"" } else { "" };
        let _ = writeln!(
            out,
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{} opacity=\"{}\" />",
            edge.path.to_svg(),
            edge.stroke.to_hex(),
            stroke_width,
            dash,
            edge.emphasis.opacity(),
        );
    }

    for node in &frame.nodes {
        render_node(&mut out, node);
    }

    out.push_str("</g>\n</svg>\n");
    out
}

fn render_node(out: &mut String, node: &NodePaint) {
    let b = &node.bounds;
    let stroke = if node.selected {
        node.category.accent
    } else {
        node.category.border
    };
    let _ = writeln!(
        out,
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"10\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.5\" opacity=\"{}\" />",
        b.x,
        b.y,
        b.width,
        b.height,
        node.category.fill.to_hex(),
        stroke.to_hex(),
        node.emphasis.opacity(),
    );

    let ink = label_color(node.category.fill);
    let mut text_x = b.x + 12.0;
    if let Some(badge) = &node.badge {
        let _ = writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" font-size=\"11\" font-weight=\"800\" fill=\"{}\" opacity=\"{}\">{}</text>",
            text_x,
            b.y + 26.0,
            node.category.accent.to_hex(),
            node.emphasis.opacity(),
            xml_escape(badge),
        );
        text_x += 32.0;
    }
    let _ = writeln!(
        out,
        "  <text x=\"{}\" y=\"{}\" font-size=\"12.5\" font-weight=\"600\" fill=\"{}\" opacity=\"{}\">{}</text>",
        text_x,
        b.y + 26.0,
        ink,
        node.emphasis.opacity(),
        xml_escape(&node.label),
    );
    if let Some(detail) = &node.detail {
        let _ = writeln!(
            out,
            "  <text x=\"{}\" y=\"{}\" font-size=\"11\" fill=\"#71717a\" opacity=\"{}\">{}</text>",
            text_x,
            b.y + 42.0,
            node.emphasis.opacity(),
            xml_escape(detail),
        );
    }

    // Status dot on the right side.
    let _ = writeln!(
        out,
        "  <circle cx=\"{}\" cy=\"{}\" r=\"4\" fill=\"{}\" opacity=\"{}\" />",
        b.x + b.width - 14.0,
        b.y + b.height / 2.0,
        node.status.color().to_hex(),
        node.emphasis.opacity(),
    );
}
