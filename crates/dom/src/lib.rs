//! # folio-dom
//!
//! A small document tree for producing markup such as XSL-FO.
//!
//! - **node**: text leaves and the `Node` child type
//! - **element**: tagged elements with ordered attributes and children
//! - **node_list**: unwrapped sibling groups, the `NodeLike` union and the shared
//!   append API
//! - **document**: document backings and the `CreatableDocument` contract
//! - **builder**: the `DocumentBuilder` trait renderers implement
//! - **serialize**: escaped, deterministic string output
//! - **derived**: attribute values computed from other attributes
//!
//! Building is callback driven: every `append_element` call takes a configurator that
//! fills the new element before it is returned.
//!
//! ```ignore
//! use folio_dom::prelude::*;
//!
//! let mut document = SimpleDocument::new("fo:root");
//! document.append_element("fo:block", |block| {
//!     block.set_attribute("space-before", "1mm");
//!     block.make_elastic("space-before", ElasticRatios::default());
//!     block.append_text_node("Hello & welcome");
//! });
//! let output = document.to_string();
//! ```

pub mod builder;
pub mod derived;
pub mod document;
pub mod element;
pub mod node;
pub mod node_list;
pub mod serialize;

pub use builder::DocumentBuilder;
pub use derived::ElasticRatios;
pub use document::{CreatableDocument, Document, SimpleDocument, TextOf};
pub use element::{Element, SimpleElement, TextElement};
pub use node::{Node, Text, TextNode};
pub use node_list::{NodeContainer, NodeLike, NodeList, configure};
pub use serialize::XML_DECLARATION;

/// Glob-importable set of the traits and types needed to build trees.
pub mod prelude {
    pub use crate::builder::DocumentBuilder;
    pub use crate::derived::ElasticRatios;
    pub use crate::document::{CreatableDocument, Document, SimpleDocument};
    pub use crate::element::{Element, SimpleElement, TextElement};
    pub use crate::node::{Node, Text, TextNode};
    pub use crate::node_list::{NodeContainer, NodeLike, NodeList};
}
