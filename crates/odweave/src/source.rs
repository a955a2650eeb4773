//! Source tree adapter.
//!
//! Wraps one node of an externally-owned markup tree behind the small set of
//! operations the structural matcher needs: identity checks, sibling/child
//! navigation and parent-relative path matching. The adapter is a pure view;
//! it never mutates the underlying tree, and constructing any number of
//! adapters over the same node is free.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node as MarkupNode};

use crate::detect::Selector;

/// Non-owning handle to a markup-source node, stored on AST nodes
pub type SourceId = ego_tree::NodeId;

/// Result of a parent-relative path match: the node itself if it matched,
/// plus its immediate next sibling for cursor advancement.
#[derive(Debug, Clone, Copy)]
pub struct PathMatch<'t> {
    /// The adapted node, when the parent's selector evaluation contains it
    pub matched: Option<SourceNode<'t>>,
    /// The sibling immediately after the matched node
    pub next: Option<SourceNode<'t>>,
}

impl PathMatch<'_> {
    fn none() -> Self {
        Self {
            matched: None,
            next: None,
        }
    }
}

/// A read-only view over one markup-source node
#[derive(Debug, Clone, Copy)]
pub struct SourceNode<'t> {
    node: NodeRef<'t, MarkupNode>,
}

impl<'t> SourceNode<'t> {
    /// Adapt a raw tree node
    pub fn new(node: NodeRef<'t, MarkupNode>) -> Self {
        Self { node }
    }

    /// Adapt the root node of a parsed document (the parentless tree root,
    /// above the root element)
    pub fn root(document: &'t Html) -> Self {
        Self::new(document.tree.root())
    }

    /// Adapt the root element of a parsed document
    pub fn document_root(document: &'t Html) -> Self {
        Self::new(*document.root_element())
    }

    /// Resolve a stored handle against its tree
    pub fn resolve(document: &'t Html, id: SourceId) -> Option<Self> {
        document.tree.get(id).map(Self::new)
    }

    /// Handle for storing on an AST node
    pub fn id(&self) -> SourceId {
        self.node.id()
    }

    /// Check if this is a raw text node
    pub fn is_text(&self) -> bool {
        self.node.value().is_text()
    }

    /// Node name: the tag for elements, `#text` for text nodes
    pub fn name(&self) -> &'t str {
        match self.node.value() {
            MarkupNode::Element(element) => element.name(),
            MarkupNode::Text(_) => "#text",
            MarkupNode::Comment(_) => "#comment",
            MarkupNode::Document | MarkupNode::Fragment => "#document",
            _ => "",
        }
    }

    /// The tag for elements, the raw content for text nodes, empty for
    /// everything else. Emptiness here is what makes the matcher drop a
    /// structurally-matched node.
    pub fn name_or_text(&self) -> &'t str {
        match self.node.value() {
            MarkupNode::Element(element) => element.name(),
            MarkupNode::Text(text) => &*text.text,
            _ => "",
        }
    }

    /// Raw content; defined only for text nodes
    pub fn text(&self) -> Option<&'t str> {
        self.node.value().as_text().map(|text| &*text.text)
    }

    /// First child, if any
    pub fn first_child(&self) -> Option<Self> {
        self.node.first_child().map(Self::new)
    }

    /// Next sibling, if any
    pub fn next_sibling(&self) -> Option<Self> {
        self.node.next_sibling().map(Self::new)
    }

    /// Test whether this node is among the nodes its parent's selector
    /// evaluation returns (or, for the text selector, whether it is a raw
    /// text node), and hand back the following sibling on success.
    ///
    /// A node without an element parent cannot be path-matched; the result
    /// is then no match and no next sibling.
    pub fn match_path(&self, selector: &Selector) -> PathMatch<'t> {
        let Some(parent) = self.node.parent() else {
            return PathMatch::none();
        };
        let Some(parent) = ElementRef::wrap(parent) else {
            return PathMatch::none();
        };

        let matched = match selector {
            Selector::Text => self.is_text(),
            Selector::Path(query) => parent.select(query).any(|hit| hit.id() == self.node.id()),
        };
        if !matched {
            return PathMatch::none();
        }

        PathMatch {
            matched: Some(*self),
            next: self.next_sibling(),
        }
    }
}
