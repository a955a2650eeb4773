//! Detector system for structural matching.

mod detector;
mod markup;

pub use detector::{BuildFn, Detector, Selector, TEXT_SELECTOR};
pub use markup::markup_detectors;

use indexmap::IndexMap;

/// Ordered, named collection of detectors.
///
/// Iteration order is insertion order, and it is the priority ranking: the
/// matcher tries detectors front to back and the first match wins for a
/// cursor position. A heading detector therefore has to precede a generic
/// text detector, or headings would be swallowed as text.
pub struct DetectorSet {
    detectors: IndexMap<String, Detector>,
}

impl DetectorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            detectors: IndexMap::new(),
        }
    }

    /// Append a named detector; re-adding a key replaces the detector but
    /// keeps its original priority position
    pub fn add(&mut self, key: &str, detector: Detector) -> &mut Self {
        self.detectors.insert(key.to_string(), detector);
        self
    }

    /// Look up a detector by key
    pub fn get(&self, key: &str) -> Option<&Detector> {
        self.detectors.get(key)
    }

    /// Detectors in priority order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Detector)> {
        self.detectors.iter().map(|(key, d)| (key.as_str(), d))
    }

    /// Number of detectors
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use odweave_core::NodeKind;

    #[test]
    fn test_insertion_order_is_priority() {
        let mut set = DetectorSet::new();
        set.add("b", Detector::new(Selector::Text, |_| NodeKind::Paragraph));
        set.add(
            "a",
            Detector::new(Selector::Text, |_| NodeKind::Document),
        );

        let keys: Vec<&str> = set.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_replacing_keeps_position() {
        let mut set = DetectorSet::new();
        set.add("a", Detector::new(Selector::Text, |_| NodeKind::Paragraph));
        set.add("b", Detector::new(Selector::Text, |_| NodeKind::Paragraph));
        set.add("a", Detector::new(Selector::Text, |_| NodeKind::Document));

        let keys: Vec<&str> = set.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_builtin_set_order() {
        let set = markup_detectors();
        let keys: Vec<&str> = set.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["heading", "paragraph", "text"]);
    }
}
