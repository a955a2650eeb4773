//! Output tree view and an in-memory XML reference builder.
//!
//! The pipeline writes its result through the [`OutputTree`] capability and
//! never reads it back, with one exception: `find_child`, which the style
//! resolver needs to merge property contributions into the one shared
//! fragment. [`XmlTree`] is the reference implementation backing tests and
//! the service façade; a real serializer can implement the trait instead.

use std::fmt;

use indexmap::IndexMap;

/// Write-only capability over an externally-owned output tree
pub trait OutputTree {
    /// Opaque element handle
    type Element: Copy;

    /// Create a child element under `parent`, appended after existing content
    fn create_child(&mut self, parent: Self::Element, tag: &str) -> Self::Element;

    /// Set an attribute; an existing name keeps its position, the value is
    /// overwritten
    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);

    /// Append a raw text run under `parent`
    fn append_text(&mut self, parent: Self::Element, text: &str);

    /// Locate an existing child element of `parent` by tag
    fn find_child(&self, parent: Self::Element, tag: &str) -> Option<Self::Element>;
}

/// Handle into an [`XmlTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementId(usize);

enum XmlContent {
    Element(ElementId),
    Text(String),
}

struct XmlElement {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<XmlContent>,
}

impl XmlElement {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }
}

/// In-memory element store with `Display` serialization
pub struct XmlTree {
    elements: Vec<XmlElement>,
}

impl XmlTree {
    /// Create a tree holding a single root element
    pub fn new(root_tag: &str) -> Self {
        Self {
            elements: vec![XmlElement::new(root_tag)],
        }
    }

    /// The root element handle
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Tag of an element
    pub fn tag(&self, element: ElementId) -> &str {
        &self.elements[element.0].tag
    }

    /// Attribute value of an element
    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.elements[element.0]
            .attributes
            .get(name)
            .map(String::as_str)
    }

    /// Child elements of an element, in document order (text runs excluded)
    pub fn child_elements(&self, parent: ElementId) -> Vec<ElementId> {
        self.elements[parent.0]
            .children
            .iter()
            .filter_map(|content| match content {
                XmlContent::Element(id) => Some(*id),
                XmlContent::Text(_) => None,
            })
            .collect()
    }

    /// Concatenated direct text runs of an element
    pub fn text(&self, parent: ElementId) -> String {
        self.elements[parent.0]
            .children
            .iter()
            .filter_map(|content| match content {
                XmlContent::Text(text) => Some(text.as_str()),
                XmlContent::Element(_) => None,
            })
            .collect()
    }

    fn render(&self, element: ElementId, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.elements[element.0];

        write!(out, "<{}", node.tag)?;
        for (name, value) in &node.attributes {
            write!(out, " {}=\"{}\"", name, escape_attribute(value))?;
        }

        if node.children.is_empty() {
            return write!(out, "/>");
        }

        write!(out, ">")?;
        for content in &node.children {
            match content {
                XmlContent::Element(child) => self.render(*child, out)?,
                XmlContent::Text(text) => write!(out, "{}", escape_text(text))?,
            }
        }
        write!(out, "</{}>", node.tag)
    }
}

impl OutputTree for XmlTree {
    type Element = ElementId;

    fn create_child(&mut self, parent: ElementId, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(XmlElement::new(tag));
        self.elements[parent.0].children.push(XmlContent::Element(id));
        id
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        self.elements[element.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn append_text(&mut self, parent: ElementId, text: &str) {
        self.elements[parent.0]
            .children
            .push(XmlContent::Text(text.to_string()));
    }

    fn find_child(&self, parent: ElementId, tag: &str) -> Option<ElementId> {
        self.child_elements(parent)
            .into_iter()
            .find(|child| self.tag(*child) == tag)
    }
}

impl fmt::Display for XmlTree {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(self.root(), out)
    }
}

/// Escape an attribute value
fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a text run
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_serialize() {
        let mut tree = XmlTree::new("text:body");
        let root = tree.root();

        let heading = tree.create_child(root, "text:h");
        tree.set_attribute(heading, "text:style-name", "Header 1");
        tree.append_text(heading, "Hello");

        assert_eq!(
            tree.to_string(),
            "<text:body><text:h text:style-name=\"Header 1\">Hello</text:h></text:body>"
        );
    }

    #[test]
    fn test_empty_element_self_closes() {
        let tree = XmlTree::new("text:body");
        assert_eq!(tree.to_string(), "<text:body/>");
    }

    #[test]
    fn test_set_attribute_overwrites() {
        let mut tree = XmlTree::new("root");
        let root = tree.root();
        tree.set_attribute(root, "a", "1");
        tree.set_attribute(root, "b", "2");
        tree.set_attribute(root, "a", "3");

        assert_eq!(tree.attribute(root, "a"), Some("3"));
        // overwriting keeps the original attribute position
        assert_eq!(tree.to_string(), "<root a=\"3\" b=\"2\"/>");
    }

    #[test]
    fn test_find_child() {
        let mut tree = XmlTree::new("root");
        let root = tree.root();
        tree.append_text(root, "before");
        let child = tree.create_child(root, "inner");

        assert_eq!(tree.find_child(root, "inner"), Some(child));
        assert_eq!(tree.find_child(root, "other"), None);
        assert_eq!(tree.find_child(child, "inner"), None);
    }

    #[test]
    fn test_escaping() {
        let mut tree = XmlTree::new("root");
        let root = tree.root();
        tree.set_attribute(root, "title", "a \"b\" & <c>");
        tree.append_text(root, "1 < 2 & 3 > 2");

        assert_eq!(
            tree.to_string(),
            "<root title=\"a &quot;b&quot; &amp; &lt;c&gt;\">1 &lt; 2 &amp; 3 &gt; 2</root>"
        );
    }

    #[test]
    fn test_text_and_child_elements() {
        let mut tree = XmlTree::new("root");
        let root = tree.root();
        tree.append_text(root, "a");
        tree.create_child(root, "x");
        tree.append_text(root, "b");

        assert_eq!(tree.text(root), "ab");
        assert_eq!(tree.child_elements(root).len(), 1);
    }
}
