//! Style rule types.

use odweave_core::Node;

/// Write access to the shared properties fragment of an output element.
///
/// Rules contribute properties through this narrow surface instead of
/// touching the output tree, so independent concerns merge into the one
/// fragment without knowing about each other.
pub trait PropertySink {
    /// Set one property; setting an existing name overwrites its value
    fn set(&mut self, name: &str, value: &str);
}

/// Type alias for rule predicates
pub type PredicateFn<S> = Box<dyn Fn(&Node<S>) -> bool + Send + Sync>;

/// Type alias for style-name functions
pub type StyleNameFn<S> = Box<dyn Fn(&Node<S>) -> String + Send + Sync>;

/// Type alias for text-property contributions
pub type TextPropertiesFn<S> = Box<dyn Fn(&mut dyn PropertySink, &Node<S>) + Send + Sync>;

/// A declarative styling rule, evaluated per AST node during emission.
///
/// The predicate guards two independent effects: referencing a named style
/// on the output element, and contributing text properties to the element's
/// shared properties fragment. Either effect is optional.
pub struct StyleRule<S> {
    predicate: PredicateFn<S>,
    style_name: Option<StyleNameFn<S>>,
    text_properties: Option<TextPropertiesFn<S>>,
    key: Option<String>,
}

impl<S> StyleRule<S> {
    /// Create a rule with a predicate and no effects
    pub fn new<P>(predicate: P) -> Self
    where
        P: Fn(&Node<S>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            style_name: None,
            text_properties: None,
            key: None,
        }
    }

    /// Set the style-name function
    pub fn with_style_name<F>(mut self, style_name: F) -> Self
    where
        F: Fn(&Node<S>) -> String + Send + Sync + 'static,
    {
        self.style_name = Some(Box::new(style_name));
        self
    }

    /// Set the text-property contribution
    pub fn with_text_properties<F>(mut self, text_properties: F) -> Self
    where
        F: Fn(&mut dyn PropertySink, &Node<S>) + Send + Sync + 'static,
    {
        self.text_properties = Some(Box::new(text_properties));
        self
    }

    /// Name the rule for later lookup
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Check whether the rule applies to a node
    pub fn matches(&self, node: &Node<S>) -> bool {
        (self.predicate)(node)
    }

    /// Compute the style name for a node, if the rule sets one
    pub fn style_name(&self, node: &Node<S>) -> Option<String> {
        self.style_name.as_ref().map(|f| f(node))
    }

    /// Check whether the rule contributes text properties
    pub fn has_text_properties(&self) -> bool {
        self.text_properties.is_some()
    }

    /// Run the text-property contribution against a fragment sink
    pub fn apply_text_properties(&self, sink: &mut dyn PropertySink, node: &Node<S>) {
        if let Some(contribute) = &self.text_properties {
            contribute(sink, node);
        }
    }

    /// The rule's key, if named
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapSink(Vec<(String, String)>);

    impl PropertySink for MapSink {
        fn set(&mut self, name: &str, value: &str) {
            self.0.push((name.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_rule_effects_are_independent() {
        let rule: StyleRule<()> = StyleRule::new(|node: &Node<()>| node.is_header())
            .with_key("heading")
            .with_style_name(|node| format!("Header {}", node.header_level().unwrap_or(1)));

        let header: Node<()> = Node::header(2);
        assert!(rule.matches(&header));
        assert_eq!(rule.style_name(&header), Some("Header 2".to_string()));
        assert!(!rule.has_text_properties());
        assert_eq!(rule.key(), Some("heading"));

        let paragraph: Node<()> = Node::paragraph();
        assert!(!rule.matches(&paragraph));
    }

    #[test]
    fn test_text_property_contribution() {
        let rule: StyleRule<()> = StyleRule::new(|_: &Node<()>| true)
            .with_text_properties(|sink, _| sink.set("fo:font-size", "12pt"));

        let mut sink = MapSink(Vec::new());
        rule.apply_text_properties(&mut sink, &Node::paragraph());
        assert_eq!(sink.0, [("fo:font-size".to_string(), "12pt".to_string())]);
        assert_eq!(rule.style_name(&Node::paragraph()), None);
    }
}
