//! Detector and selector types for structural matching.

use odweave_core::NodeKind;

use crate::source::SourceNode;
use crate::{OdweaveError, Result};

/// Reserved selector literal matching a raw text node
pub const TEXT_SELECTOR: &str = "text()";

/// A structural selector, evaluated against a node's parent.
///
/// Raw text nodes live outside the element path engine, so the reserved
/// [`TEXT_SELECTOR`] literal gets its own variant instead of a path query.
#[derive(Debug, Clone)]
pub enum Selector {
    /// The reserved `text()` literal: matches a raw text node
    Text,
    /// A structural path query over the parent's elements
    Path(scraper::Selector),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// `text()` is reserved; everything else is compiled as a path query.
    /// An uncompilable query is a configuration error.
    pub fn parse(input: &str) -> Result<Self> {
        if input == TEXT_SELECTOR {
            return Ok(Selector::Text);
        }

        scraper::Selector::parse(input)
            .map(Selector::Path)
            .map_err(|err| OdweaveError::Selector {
                selector: input.to_string(),
                message: err.to_string(),
            })
    }
}

/// Type alias for build functions
pub type BuildFn = Box<dyn Fn(&SourceNode<'_>) -> NodeKind + Send + Sync>;

/// A detector recognizes one document node kind: a selector deciding which
/// source nodes it consumes, and a build function deriving the new node's
/// kind and payload from the matched source node. Attaching the source
/// handle, appending and recursing stay with the matcher.
pub struct Detector {
    selector: Selector,
    build: BuildFn,
}

impl Detector {
    /// Create a detector from a parsed selector
    pub fn new<F>(selector: Selector, build: F) -> Self
    where
        F: Fn(&SourceNode<'_>) -> NodeKind + Send + Sync + 'static,
    {
        Self {
            selector,
            build: Box::new(build),
        }
    }

    /// Create a detector from a selector string
    pub fn for_path<F>(path: &str, build: F) -> Result<Self>
    where
        F: Fn(&SourceNode<'_>) -> NodeKind + Send + Sync + 'static,
    {
        Ok(Self::new(Selector::parse(path)?, build))
    }

    /// The selector deciding which source nodes this detector consumes
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Derive the node kind for a matched source node
    pub fn build(&self, source: &SourceNode<'_>) -> NodeKind {
        (self.build)(source)
    }
}
