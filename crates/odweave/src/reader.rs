//! Structural matcher: turns source siblings into AST children.
//!
//! A [`Reader`] is rooted at one AST node's source reference. Its cursor
//! starts at that source node's first child and walks the sibling list; at
//! every position the detector list is tried in priority order. A match
//! consumes the source node (building an AST child and descending into it,
//! or dropping it when content-empty), an unmatched node is skipped. The
//! pass ends when the sibling list is exhausted.

use log::{debug, trace};
use scraper::Html;

use crate::detect::DetectorSet;
use crate::source::SourceNode;
use crate::{DocumentNode, Node, OdweaveError, Result};

/// Cursor-driven structural matcher over one source sibling list
#[derive(Debug)]
pub struct Reader<'t> {
    cursor: Option<SourceNode<'t>>,
}

/// Outcome of trying the detector list at one cursor position
enum Stepped<'t> {
    /// A detector matched; the cursor moves to the sibling after the match
    Consumed(Option<SourceNode<'t>>),
    /// No detector matched; the cursor moves to the next sibling
    Skipped,
}

impl<'t> Reader<'t> {
    /// Root a reader at `node`'s source reference inside `document`.
    ///
    /// Fails when the node carries no source reference, or when the
    /// reference does not resolve in the supplied tree. Either means the
    /// pipeline was wired wrong; there is no recovery.
    pub fn for_node(document: &'t Html, node: &DocumentNode) -> Result<Self> {
        let id = node.source().copied().ok_or(OdweaveError::MissingSource {
            kind: node.kind_name(),
        })?;
        let source =
            SourceNode::resolve(document, id).ok_or(OdweaveError::ForeignSource {
                kind: node.kind_name(),
            })?;
        Ok(Self::at(source))
    }

    /// Fresh cursor starting at a source node's first child
    fn at(source: SourceNode<'t>) -> Self {
        Self {
            cursor: source.first_child(),
        }
    }

    /// Run the detectors over the sibling list, appending matched children
    /// to `node` and descending depth-first into each new child.
    pub fn detect(mut self, node: &mut DocumentNode, detectors: &DetectorSet) {
        while let Some(current) = self.cursor {
            self.cursor = match Self::step(current, node, detectors) {
                Stepped::Consumed(next) => next,
                Stepped::Skipped => current.next_sibling(),
            };
        }
    }

    /// Try the detector list at one position; the first match wins and no
    /// further detector sees this node.
    fn step(
        current: SourceNode<'t>,
        node: &mut DocumentNode,
        detectors: &DetectorSet,
    ) -> Stepped<'t> {
        for (key, detector) in detectors.iter() {
            let outcome = current.match_path(detector.selector());
            let Some(matched) = outcome.matched else {
                continue;
            };

            if matched.name_or_text().is_empty() {
                // structurally present but content-empty: consume, emit nothing
                debug!("dropping empty content matched by `{key}`");
            } else {
                trace!("`{key}` matched `{}`", matched.name());
                let mut child = Node::with_source(detector.build(&matched), matched.id());
                Reader::at(matched).detect(&mut child, detectors);
                node.append(child);
            }

            return Stepped::Consumed(outcome.next);
        }

        Stepped::Skipped
    }
}
