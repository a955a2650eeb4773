//! Style rule resolution.
//!
//! A [`StyleSheet`] is an ordered list of [`StyleRule`]s. During emission
//! every rule is evaluated against the current AST node; rules are not
//! mutually exclusive, so independent concerns (naming, sizing) accumulate.
//! The one ordering effect is the style-reference attribute: when several
//! matching rules set it, the later rule overwrites the earlier value.

mod odf;
mod rule;

pub use odf::basic_styles;
pub use rule::{PredicateFn, PropertySink, StyleNameFn, StyleRule, TextPropertiesFn};

use log::trace;
use odweave_core::Node;

use crate::output::OutputTree;
use crate::writer::WriterOptions;

/// Ordered list of style rules
pub struct StyleSheet<S> {
    rules: Vec<StyleRule<S>>,
}

impl<S> StyleSheet<S> {
    /// Create an empty sheet
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; evaluation order is append order
    pub fn add(&mut self, rule: StyleRule<S>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[StyleRule<S>] {
        &self.rules
    }

    /// Look up a rule by key
    pub fn get(&self, key: &str) -> Option<&StyleRule<S>> {
        self.rules.iter().find(|rule| rule.key() == Some(key))
    }

    /// Evaluate all rules against `node` and apply their effects to
    /// `element`.
    ///
    /// Text-property contributions all land in the single shared properties
    /// fragment under `element`: located via `find_child` when a previous
    /// rule already created it, created once otherwise.
    pub fn apply<B: OutputTree>(
        &self,
        node: &Node<S>,
        out: &mut B,
        element: B::Element,
        options: &WriterOptions,
    ) {
        for rule in &self.rules {
            if !rule.matches(node) {
                continue;
            }
            trace!(
                "style rule `{}` matches {} node",
                rule.key().unwrap_or("<unnamed>"),
                node.kind_name()
            );

            if let Some(name) = rule.style_name(node) {
                out.set_attribute(element, &options.style_name_attr, &name);
            }

            if rule.has_text_properties() {
                let fragment = match out.find_child(element, &options.text_properties_tag) {
                    Some(existing) => existing,
                    None => out.create_child(element, &options.text_properties_tag),
                };
                let mut sink = FragmentSink { out, fragment };
                rule.apply_text_properties(&mut sink, node);
            }
        }
    }
}

impl<S> Default for StyleSheet<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapts property writes onto the output tree's shared fragment element
struct FragmentSink<'a, B: OutputTree> {
    out: &'a mut B,
    fragment: B::Element,
}

impl<B: OutputTree> PropertySink for FragmentSink<'_, B> {
    fn set(&mut self, name: &str, value: &str) {
        self.out.set_attribute(self.fragment, name, value);
    }
}
