//! Builtin detectors for HTML-like markup.

use odweave_core::NodeKind;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Detector, DetectorSet, Selector, TEXT_SELECTOR};
use crate::source::SourceNode;

static HEADING_LEVEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^h([1-6])$").expect("valid heading regex"));

/// Create the builtin detector set: headings, paragraphs and raw text, in
/// that priority order.
pub fn markup_detectors() -> DetectorSet {
    let mut set = DetectorSet::new();
    set.add("heading", heading_detector());
    set.add("paragraph", paragraph_detector());
    set.add("text", text_detector());
    set
}

fn heading_detector() -> Detector {
    Detector::new(builtin_selector("h1, h2, h3, h4, h5, h6"), |source| {
        NodeKind::Header {
            level: heading_level(source),
        }
    })
}

fn paragraph_detector() -> Detector {
    Detector::new(builtin_selector("p"), |_| NodeKind::Paragraph)
}

fn text_detector() -> Detector {
    Detector::new(builtin_selector(TEXT_SELECTOR), |source| NodeKind::Text {
        content: source.text().unwrap_or_default().to_string(),
    })
}

fn builtin_selector(input: &str) -> Selector {
    match Selector::parse(input) {
        Ok(selector) => selector,
        Err(_) => unreachable!("builtin selector `{input}` must parse"),
    }
}

/// Heading level from the element name. The builtin selector only admits
/// h1-h6, so the fallback is unreachable through it.
fn heading_level(source: &SourceNode<'_>) -> u8 {
    HEADING_LEVEL
        .captures(source.name())
        .and_then(|caps| caps.get(1))
        .and_then(|level| level.as_str().parse().ok())
        .unwrap_or(1)
}
