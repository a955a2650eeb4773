//! odweave-core - typed document AST
//!
//! This crate provides the normalized document tree shared by the odweave
//! ingestion and emission engines. It has no dependencies and no opinion on
//! where the tree came from: nodes are generic over an opaque source handle,
//! so any markup parser can feed it.
//!
//! # Architecture
//!
//! ```text
//! Markup Tree ──ingestion──▶ ┌──────────────┐
//!                            │              │
//!                            │ Document AST │ ──emission──▶ Output Tree
//!                            │              │
//!                            └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use odweave_core::{outline, Node};
//!
//! let mut doc: Node<()> = Node::document();
//! let mut header = Node::header(1);
//! header.append(Node::text("Hello World"));
//! doc.append(header);
//!
//! assert!(outline(&doc).contains("header 1"));
//! ```

mod ast;
mod outline;

pub use ast::{Node, NodeKind};
pub use outline::outline;
