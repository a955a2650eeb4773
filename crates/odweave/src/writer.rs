//! Emission dispatcher.
//!
//! A type-directed visitor over the document AST. Per node it creates the
//! corresponding output element, hands it to the style resolver, then
//! recurses into children with the new element as parent context. The
//! document root and text runs create no element of their own; the root
//! still goes through style resolution so root-level rules can apply.

use log::trace;
use odweave_core::{Node, NodeKind};

use crate::output::OutputTree;
use crate::style::StyleSheet;

/// Tag and attribute names used on the output side
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// Root body element tag
    pub body_tag: String,

    /// Heading element tag
    pub heading_tag: String,

    /// Paragraph element tag
    pub paragraph_tag: String,

    /// Style-reference attribute name
    pub style_name_attr: String,

    /// Tag of the shared properties fragment
    pub text_properties_tag: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            body_tag: "text:body".to_string(),
            heading_tag: "text:h".to_string(),
            paragraph_tag: "text:p".to_string(),
            style_name_attr: "text:style-name".to_string(),
            text_properties_tag: "style:text-properties".to_string(),
        }
    }
}

/// Type-directed visitor emitting a document AST into an output tree
pub struct OdfWriter<'a, S> {
    styles: &'a StyleSheet<S>,
    options: &'a WriterOptions,
}

impl<'a, S> OdfWriter<'a, S> {
    /// Create a writer over a style sheet and output naming options
    pub fn new(styles: &'a StyleSheet<S>, options: &'a WriterOptions) -> Self {
        Self { styles, options }
    }

    /// Emit `node` and its descendants under `parent`
    pub fn write<B: OutputTree>(&self, node: &Node<S>, out: &mut B, parent: B::Element) {
        match node.kind() {
            NodeKind::Document => {
                // no element of its own; root-level rules still apply
                self.styles.apply(node, out, parent, self.options);
                self.write_children(node, out, parent);
            }
            NodeKind::Header { .. } => {
                self.write_styled(node, out, parent, &self.options.heading_tag);
            }
            NodeKind::Paragraph => {
                self.write_styled(node, out, parent, &self.options.paragraph_tag);
            }
            NodeKind::Text { content } => out.append_text(parent, content),
        }
    }

    fn write_styled<B: OutputTree>(
        &self,
        node: &Node<S>,
        out: &mut B,
        parent: B::Element,
        tag: &str,
    ) {
        trace!("emitting `{tag}` for {} node", node.kind_name());
        let element = out.create_child(parent, tag);
        self.styles.apply(node, out, element, self.options);
        self.write_children(node, out, element);
    }

    fn write_children<B: OutputTree>(&self, node: &Node<S>, out: &mut B, parent: B::Element) {
        for child in node.children() {
            self.write(child, out, parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::XmlTree;
    use crate::style::{basic_styles, StyleRule};

    fn sample_document() -> Node<()> {
        let mut doc = Node::document();
        let mut header = Node::header(1);
        header.append(Node::text("Heading 1"));
        doc.append(header);
        let mut para = Node::paragraph();
        para.append(Node::text("Some text"));
        doc.append(para);
        doc
    }

    fn emit(doc: &Node<()>, styles: &StyleSheet<()>) -> XmlTree {
        let options = WriterOptions::default();
        let mut out = XmlTree::new(&options.body_tag);
        let root = out.root();
        OdfWriter::new(styles, &options).write(doc, &mut out, root);
        out
    }

    #[test]
    fn test_styled_emission() {
        let out = emit(&sample_document(), &basic_styles());

        assert_eq!(
            out.to_string(),
            "<text:body>\
             <text:h text:style-name=\"Header 1\">\
             <style:text-properties fo:font-size=\"12pt\"/>\
             Heading 1\
             </text:h>\
             <text:p text:style-name=\"Body Text\">Some text</text:p>\
             </text:body>"
        );
    }

    #[test]
    fn test_paragraph_has_no_properties_fragment() {
        let out = emit(&sample_document(), &basic_styles());
        let root = out.root();

        let children = out.child_elements(root);
        let paragraph = children[1];
        assert_eq!(out.tag(paragraph), "text:p");
        assert!(out.child_elements(paragraph).is_empty());
        assert_eq!(out.text(paragraph), "Some text");
    }

    #[test]
    fn test_document_root_can_be_styled() {
        let mut styles: StyleSheet<()> = StyleSheet::new();
        styles.add(
            StyleRule::new(|node: &Node<()>| node.is_document())
                .with_style_name(|_| "Standard".to_string()),
        );

        let out = emit(&Node::document(), &styles);
        assert_eq!(
            out.to_string(),
            "<text:body text:style-name=\"Standard\"/>"
        );
    }

    #[test]
    fn test_text_is_emitted_raw() {
        let mut doc: Node<()> = Node::document();
        doc.append(Node::text("a < b"));

        let out = emit(&doc, &StyleSheet::new());
        assert_eq!(out.to_string(), "<text:body>a &lt; b</text:body>");
    }

    #[test]
    fn test_custom_tags() {
        let options = WriterOptions {
            paragraph_tag: "p".to_string(),
            ..Default::default()
        };
        let styles: StyleSheet<()> = StyleSheet::new();
        let mut out = XmlTree::new("body");
        let root = out.root();

        let mut doc: Node<()> = Node::document();
        doc.append(Node::paragraph());
        OdfWriter::new(&styles, &options).write(&doc, &mut out, root);

        assert_eq!(out.to_string(), "<body><p/></body>");
    }
}
