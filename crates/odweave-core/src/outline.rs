//! Plain-text outline of a document tree.
//!
//! Renders the tree shape as indented lines, one node per line. Used for
//! debugging ingestion results and for asserting tree shape in tests.

use crate::ast::{Node, NodeKind};

/// Render an indented outline of `node` and its descendants.
pub fn outline<S>(node: &Node<S>) -> String {
    let mut out = String::new();
    outline_node(node, 0, &mut out);
    out
}

fn outline_node<S>(node: &Node<S>, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }

    match node.kind() {
        NodeKind::Document => out.push_str("document"),
        NodeKind::Header { level } => {
            out.push_str("header ");
            out.push_str(&level.to_string());
        }
        NodeKind::Paragraph => out.push_str("paragraph"),
        NodeKind::Text { content } => {
            out.push_str("text ");
            out.push('"');
            out.push_str(content);
            out.push('"');
        }
    }
    out.push('\n');

    for child in node.children() {
        outline_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_shape() {
        let mut doc: Node<()> = Node::document();
        let mut header = Node::header(1);
        header.append(Node::text("Heading 1"));
        doc.append(header);
        let mut para = Node::paragraph();
        para.append(Node::text("Some text"));
        doc.append(para);

        let expected = "\
document
  header 1
    text \"Heading 1\"
  paragraph
    text \"Some text\"
";
        assert_eq!(outline(&doc), expected);
    }

    #[test]
    fn test_outline_single_node() {
        let doc: Node<()> = Node::document();
        assert_eq!(outline(&doc), "document\n");
    }
}
