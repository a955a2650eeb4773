//! Builtin ODF style sheet.

use odweave_core::Node;

use super::{StyleRule, StyleSheet};

/// Font size of a level-1 heading in points; every deeper level is one
/// point smaller
const HEADING_BASE_SIZE: i32 = 13;

/// Create the builtin style sheet: headings reference `Header {level}` and
/// shrink with depth, paragraphs reference `Body Text`.
pub fn basic_styles<S: 'static>() -> StyleSheet<S> {
    let mut sheet = StyleSheet::new();

    sheet.add(
        StyleRule::new(|node: &Node<S>| node.is_header())
            .with_key("heading")
            .with_style_name(|node| format!("Header {}", node.header_level().unwrap_or(1)))
            .with_text_properties(|properties, node| {
                let level = i32::from(node.header_level().unwrap_or(1));
                properties.set("fo:font-size", &format!("{}pt", HEADING_BASE_SIZE - level));
            }),
    );

    sheet.add(
        StyleRule::new(|node: &Node<S>| node.is_paragraph())
            .with_key("body-text")
            .with_style_name(|_| "Body Text".to_string()),
    );

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_rule() {
        let sheet: StyleSheet<()> = basic_styles();
        let rule = sheet.get("heading").unwrap();

        let header: Node<()> = Node::header(1);
        assert!(rule.matches(&header));
        assert_eq!(rule.style_name(&header), Some("Header 1".to_string()));
        assert!(rule.has_text_properties());

        let deep: Node<()> = Node::header(3);
        assert_eq!(rule.style_name(&deep), Some("Header 3".to_string()));
    }

    #[test]
    fn test_body_text_rule() {
        let sheet: StyleSheet<()> = basic_styles();
        let rule = sheet.get("body-text").unwrap();

        let paragraph: Node<()> = Node::paragraph();
        assert!(rule.matches(&paragraph));
        assert_eq!(rule.style_name(&paragraph), Some("Body Text".to_string()));
        assert!(!rule.has_text_properties());

        assert!(!rule.matches(&Node::header(1)));
        assert!(!rule.matches(&Node::text("x")));
    }
}
