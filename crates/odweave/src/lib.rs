//! # odweave
//!
//! Transform a parsed markup tree into a typed document AST, then emit that
//! AST into a styled output tree.
//!
//! ## Design
//!
//! The pipeline sits between two external trees. On the inbound side a
//! [`SourceNode`] adapts one node of a parsed markup tree; the [`Reader`]
//! walks sibling lists with a cursor, trying an ordered [`DetectorSet`] at
//! each position and building the AST depth-first. On the outbound side the
//! [`OdfWriter`] visits the AST, creates output elements through the
//! [`OutputTree`] view and lets the [`StyleSheet`] decide, per node, which
//! style to reference and which properties to merge into the shared
//! properties fragment.
//!
//! ## Example
//!
//! ```rust
//! use odweave::OdweaveService;
//! use scraper::Html;
//!
//! let document = Html::parse_fragment("<h1>Heading 1</h1><p>Some text</p>");
//!
//! let service = OdweaveService::new();
//! let xml = service.convert(&document).unwrap().to_string();
//!
//! assert!(xml.contains("text:style-name=\"Header 1\""));
//! assert!(xml.contains("fo:font-size=\"12pt\""));
//! ```

pub mod detect;
pub mod output;
pub mod source;
pub mod style;
mod reader;
mod service;
mod writer;

pub use detect::{markup_detectors, Detector, DetectorSet, Selector, TEXT_SELECTOR};
pub use odweave_core::{outline, Node, NodeKind};
pub use output::{ElementId, OutputTree, XmlTree};
pub use reader::Reader;
pub use service::OdweaveService;
pub use source::{PathMatch, SourceId, SourceNode};
pub use style::{basic_styles, PropertySink, StyleRule, StyleSheet};
pub use writer::{OdfWriter, WriterOptions};

/// Error type for odweave operations
#[derive(Debug, thiserror::Error)]
pub enum OdweaveError {
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("{kind} node has no source reference")]
    MissingSource { kind: &'static str },

    #[error("{kind} node references a source outside the supplied tree")]
    ForeignSource { kind: &'static str },
}

pub type Result<T> = std::result::Result<T, OdweaveError>;

/// A document AST node carrying markup-source handles
pub type DocumentNode = Node<SourceId>;
