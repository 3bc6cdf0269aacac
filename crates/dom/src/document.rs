//! Documents: the factory and root holder for one conversion.

use crate::element::Element;
use crate::node::{Node, TextNode};
use crate::node_list::{NodeContainer, NodeList};
use crate::serialize::XML_DECLARATION;
use std::fmt;

/// The capability set every document backing provides.
///
/// Renderers are written against this trait so that the same building code works for
/// the minimal string-leaf backing and for richer documents that wrap it.
pub trait CreatableDocument {
    type Text: TextNode;

    /// Creates a document whose root element has the given tag name.
    fn with_root(root_tag_name: &str) -> Self
    where
        Self: Sized;

    fn document_element(&self) -> &Element<Self::Text>;

    fn document_element_mut(&mut self) -> &mut Element<Self::Text>;

    /// Creates a detached element with no attributes and no children.
    fn create_element(&self, tag_name: &str) -> Element<Self::Text> {
        Element::new(tag_name)
    }

    fn create_text_node(&self, content: &str) -> Self::Text {
        Self::Text::from_content(content)
    }

    fn create_node_list(&self) -> NodeList<Self::Text> {
        NodeList::new()
    }
}

/// Shorthand for the text leaf type of a document backing.
pub type TextOf<D> = <D as CreatableDocument>::Text;

/// A document holding exactly one root element.
///
/// Appending to the document appends to its root, and its string form is the XML
/// declaration followed by the serialized root.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    document_element: Element<T>,
}

/// The minimal backing: an attribute-map tree with plain string leaves.
pub type SimpleDocument = Document<String>;

impl<T: TextNode> Document<T> {
    pub fn new(root_tag_name: &str) -> Self {
        Self {
            document_element: Element::new(root_tag_name),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.document_element.get_attribute(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.document_element.set_attribute(name, value);
        self
    }

    pub fn into_document_element(self) -> Element<T> {
        self.document_element
    }
}

impl<T: TextNode> CreatableDocument for Document<T> {
    type Text = T;

    fn with_root(root_tag_name: &str) -> Self {
        Self::new(root_tag_name)
    }

    fn document_element(&self) -> &Element<T> {
        &self.document_element
    }

    fn document_element_mut(&mut self) -> &mut Element<T> {
        &mut self.document_element
    }
}

impl<T: TextNode> NodeContainer<T> for Document<T> {
    fn child_nodes_mut(&mut self) -> &mut Vec<Node<T>> {
        self.document_element.child_nodes_mut()
    }
}

impl<T: TextNode> fmt::Display for Document<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", XML_DECLARATION)?;
        write!(f, "{}", self.document_element)
    }
}
