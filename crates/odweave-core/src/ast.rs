//! Typed document AST.
//!
//! This module defines the nodes of the normalized document tree produced by
//! ingestion and consumed by emission. The set of kinds is closed on purpose:
//! consumers dispatch with a plain `match` instead of open polymorphism.
//!
//! Nodes are generic over an opaque source handle `S`, the back-reference to
//! the markup-source node a node was matched from. The handle is non-owning
//! (an id or index, never the source tree itself) and is only consulted
//! during ingestion.

/// The kind of a document node, with its minimal payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root container; exactly one per tree, no payload
    Document,

    /// Heading with level (1-6)
    Header { level: u8 },

    /// Paragraph containing further content
    Paragraph,

    /// A raw text run
    Text { content: String },
}

impl NodeKind {
    /// Stable lowercase name of the kind, for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Header { .. } => "header",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Text { .. } => "text",
        }
    }
}

/// A document tree node.
///
/// Owns its children in document order. Every node produced by a structural
/// match carries a source handle at creation; only a hand-built root may go
/// without one. After ingestion the tree is read-only data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    kind: NodeKind,
    source: Option<S>,
    children: Vec<Node<S>>,
}

impl<S> Node<S> {
    /// Create a node without a source handle
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            source: None,
            children: Vec::new(),
        }
    }

    /// Create a node carrying the source handle it was matched from
    pub fn with_source(kind: NodeKind, source: S) -> Self {
        Self {
            kind,
            source: Some(source),
            children: Vec::new(),
        }
    }

    /// Create a root document node
    pub fn document() -> Self {
        Self::new(NodeKind::Document)
    }

    /// Create a heading node
    pub fn header(level: u8) -> Self {
        Self::new(NodeKind::Header { level })
    }

    /// Create a paragraph node
    pub fn paragraph() -> Self {
        Self::new(NodeKind::Paragraph)
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text {
            content: content.into(),
        })
    }

    /// Get the node kind
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Stable lowercase name of the node kind
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Get the source handle, if the node carries one
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Append a child; the child becomes exclusively owned by this node
    pub fn append(&mut self, child: Node<S>) {
        self.children.push(child);
    }

    /// Children in document order
    pub fn children(&self) -> &[Node<S>] {
        &self.children
    }

    /// Check if this is the root document node
    pub fn is_document(&self) -> bool {
        matches!(self.kind, NodeKind::Document)
    }

    /// Check if this is a heading node
    pub fn is_header(&self) -> bool {
        matches!(self.kind, NodeKind::Header { .. })
    }

    /// Check if this is a paragraph node
    pub fn is_paragraph(&self) -> bool {
        matches!(self.kind, NodeKind::Paragraph)
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text { .. })
    }

    /// Heading level, for header nodes
    pub fn header_level(&self) -> Option<u8> {
        match &self.kind {
            NodeKind::Header { level } => Some(*level),
            _ => None,
        }
    }

    /// Text content, for text nodes
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content } => Some(content),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let node: Node<()> = Node::header(2);
        assert!(node.is_header());
        assert_eq!(node.header_level(), Some(2));
        assert_eq!(node.kind_name(), "header");
        assert_eq!(node.text_content(), None);
    }

    #[test]
    fn test_text_payload() {
        let node: Node<()> = Node::text("Hello");
        assert!(node.is_text());
        assert_eq!(node.text_content(), Some("Hello"));
        assert_eq!(node.header_level(), None);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut doc: Node<()> = Node::document();
        doc.append(Node::header(1));
        doc.append(Node::paragraph());
        doc.append(Node::header(1));

        let kinds: Vec<&str> = doc.children().iter().map(|c| c.kind_name()).collect();
        assert_eq!(kinds, ["header", "paragraph", "header"]);
    }

    #[test]
    fn test_source_handle() {
        let node = Node::with_source(NodeKind::Paragraph, 7usize);
        assert_eq!(node.source(), Some(&7));

        let bare: Node<usize> = Node::paragraph();
        assert_eq!(bare.source(), None);
    }
}
