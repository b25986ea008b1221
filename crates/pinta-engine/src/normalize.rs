//! Document normalization.
//!
//! Runs once when a page mounts: responsive root sizing, original
//! attribute snapshots, the corrective stroke rule, and the injected
//! paintable background. After this pass the classifier's inputs are
//! frozen.

use pinta_color::{BLACK, Color, WHITE};
use pinta_dom::{ElementKind, NodeId, SvgDocument};

use crate::classify;
use crate::region::{RegionInfo, Regions};

/// A4 portrait canvas in user units.
pub const A4_WIDTH: f64 = 2480.0;
/// A4 portrait canvas height in user units.
pub const A4_HEIGHT: f64 = 3508.0;

/// Marker attribute on the injected background so it is never reprocessed.
const BG_MARK: &str = "data-bg";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Full normalization pass: root fixup, snapshots, background injection.
pub fn prepare_document(doc: &mut SvgDocument, regions: &mut Regions) {
    normalize_root(doc);
    snapshot_regions(doc, regions);
    ensure_background(doc, regions);
    tracing::debug!(
        regions = regions.len(),
        paintable = regions.paintable_count(),
        "page normalized"
    );
}

/// Force portability attributes and responsive sizing on the `<svg>` root.
fn normalize_root(doc: &mut SvgDocument) {
    doc.set_root_attr("xmlns", SVG_NS);
    doc.set_root_attr("version", "1.1");

    if doc.root_attr("viewBox").is_none() {
        let w = doc.root_attr("width").and_then(parse_length).unwrap_or(A4_WIDTH);
        let h = doc.root_attr("height").and_then(parse_length).unwrap_or(A4_HEIGHT);
        doc.set_root_attr("viewBox", format!("0 0 {w} {h}"));
    }
    let root = doc.svg_root();
    doc.tree.remove_attr(root, "width");
    doc.tree.remove_attr(root, "height");
    doc.set_root_attr("preserveAspectRatio", "xMidYMid meet");
}

/// Capture original fill/stroke for every element (first touch wins) and
/// apply the corrective rule: a white-filled element with no usable
/// stroke gets a black one, recorded as part of its original snapshot.
/// The correction is structural, not a user action, so it never lands on
/// the undo stack.
fn snapshot_regions(doc: &mut SvgDocument, regions: &mut Regions) {
    for id in doc.elements() {
        snapshot_element(doc, regions, id);
    }
}

fn snapshot_element(doc: &mut SvgDocument, regions: &mut Regions, id: NodeId) {
    if regions.is_captured(id) {
        return;
    }
    let Some(elem) = doc.tree.element(id) else {
        return;
    };
    let kind = elem.kind;
    let orig_fill = Color::parse(elem.get_attr("fill"));
    let mut orig_stroke = Color::parse(elem.get_attr("stroke"));

    if orig_fill.is_white() && (orig_stroke.is_invalid() || orig_stroke.is_none()) {
        doc.tree.set_attr(id, "stroke", "#000000");
        orig_stroke = BLACK;
    }

    let paintable = classify::is_paintable(kind, &orig_fill, &orig_stroke);
    regions.insert(
        id,
        RegionInfo {
            orig_fill,
            orig_stroke,
            kind,
            paintable,
        },
    );
}

/// Inject a full-canvas white background rectangle (with an invisible
/// black stroke so it classifies as paintable) unless one is already
/// tagged.
fn ensure_background(doc: &mut SvgDocument, regions: &mut Regions) {
    let tagged = doc
        .elements()
        .into_iter()
        .any(|id| doc.tree.attr(id, BG_MARK).is_some());
    if tagged {
        return;
    }

    let (w, h) = view_box_size(doc);
    let rect = doc.tree.create_element("rect");
    {
        let elem = doc.tree.element_mut(rect).expect("rect just created");
        elem.set_attr("x", "0");
        elem.set_attr("y", "0");
        elem.set_attr("width", w.to_string());
        elem.set_attr("height", h.to_string());
        elem.set_attr("fill", "#FFFFFF");
        // Invisible via opacity, but present so the region classifies.
        elem.set_attr("stroke", "#000000");
        elem.set_attr("stroke-width", "0.01");
        elem.set_attr("stroke-opacity", "0");
        elem.set_attr(BG_MARK, "1");
    }
    let root = doc.svg_root();
    doc.tree.insert_first_child(root, rect);
    regions.insert(
        rect,
        RegionInfo {
            orig_fill: WHITE,
            orig_stroke: BLACK,
            kind: ElementKind::Rect,
            paintable: true,
        },
    );
}

/// Width/height of the root viewBox, defaulting to A4.
fn view_box_size(doc: &SvgDocument) -> (f64, f64) {
    if let Some(vb) = doc.root_attr("viewBox") {
        let parts: Vec<f64> = vb
            .split_whitespace()
            .filter_map(|p| p.parse().ok())
            .collect();
        if parts.len() == 4 {
            return (parts[2], parts[3]);
        }
    }
    (A4_WIDTH, A4_HEIGHT)
}

/// Leading-number parse in the parseFloat style, so `"100px"` reads as 100.
fn parse_length(value: &str) -> Option<f64> {
    let t = value.trim();
    let end = t
        .char_indices()
        .find(|(i, c)| {
            !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        })
        .map(|(i, _)| i)
        .unwrap_or(t.len());
    t[..end].parse().ok()
}
