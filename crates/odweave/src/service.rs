//! OdweaveService - the main entry point for the transformation pipeline.

use scraper::Html;

use crate::detect::{markup_detectors, Detector, DetectorSet};
use crate::output::{OutputTree, XmlTree};
use crate::reader::Reader;
use crate::source::{SourceId, SourceNode};
use crate::style::{basic_styles, StyleRule, StyleSheet};
use crate::writer::{OdfWriter, WriterOptions};
use crate::{DocumentNode, Node, NodeKind, Result};

/// The pipeline façade: an ordered detector set for ingestion, a style
/// sheet for emission, and the output naming options.
pub struct OdweaveService {
    detectors: DetectorSet,
    styles: StyleSheet<SourceId>,
    options: WriterOptions,
}

impl OdweaveService {
    /// Create a service with the builtin detectors and styles
    pub fn new() -> Self {
        Self {
            detectors: markup_detectors(),
            styles: basic_styles(),
            options: WriterOptions::default(),
        }
    }

    /// Create a service with custom output naming options
    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            detectors: markup_detectors(),
            styles: basic_styles(),
            options,
        }
    }

    /// Append a named detector (lowest priority)
    pub fn add_detector(&mut self, key: &str, detector: Detector) -> &mut Self {
        self.detectors.add(key, detector);
        self
    }

    /// Append a style rule (evaluated last)
    pub fn add_style(&mut self, rule: StyleRule<SourceId>) -> &mut Self {
        self.styles.add(rule);
        self
    }

    /// The detector set
    pub fn detectors(&self) -> &DetectorSet {
        &self.detectors
    }

    /// The style sheet
    pub fn styles(&self) -> &StyleSheet<SourceId> {
        &self.styles
    }

    /// The output naming options
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Ingest a parsed markup tree into a document AST rooted at the
    /// tree's root element.
    pub fn read(&self, document: &Html) -> Result<DocumentNode> {
        let root = SourceNode::document_root(document);
        let mut ast = Node::with_source(NodeKind::Document, root.id());
        Reader::for_node(document, &ast)?.detect(&mut ast, &self.detectors);
        Ok(ast)
    }

    /// Emit a document AST under `parent` in an output tree
    pub fn write<B: OutputTree>(&self, ast: &DocumentNode, out: &mut B, parent: B::Element) {
        OdfWriter::new(&self.styles, &self.options).write(ast, out, parent);
    }

    /// Ingest and emit in one step, into a fresh XML tree rooted at the
    /// body tag
    pub fn convert(&self, document: &Html) -> Result<XmlTree> {
        let ast = self.read(document)?;
        let mut out = XmlTree::new(&self.options.body_tag);
        let root = out.root();
        self.write(&ast, &mut out, root);
        Ok(out)
    }
}

impl Default for OdweaveService {
    fn default() -> Self {
        Self::new()
    }
}
