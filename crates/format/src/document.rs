//! The XSL-FO document and its layout-master factories.

use crate::config::{PageSize, PageSpaces};
use folio_dom::{CreatableDocument, Document, Element, Node, NodeContainer, Text, configure};
use std::fmt;

pub const FO_NAMESPACE: &str = "http://www.w3.org/1999/XSL/Format";
pub const AXF_NAMESPACE: &str = "http://www.antennahouse.com/names/XSL/Extensions";

/// Which side of a spread a page sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
}

impl Position {
    pub fn opposite(self) -> Self {
        match self {
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }

    /// The (left, right) margins for this side. Outer margins face the page edge.
    pub fn margins<'a>(self, outer: &'a str, inner: &'a str) -> (&'a str, &'a str) {
        match self {
            Position::Left => (outer, inner),
            Position::Right => (inner, outer),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An XSL-FO document rooted at `fo:root`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatDocument(Document<Text>);

impl Default for FormatDocument {
    fn default() -> Self {
        Self::with_root("fo:root")
    }
}

impl FormatDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `fo:simple-page-master` of the given size.
    pub fn create_page_master<F>(
        &self,
        page_size: &PageSize,
        bleed: &str,
        background_image: Option<&str>,
        configure_master: F,
    ) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        configure(self.create_element("fo:simple-page-master"), |master| {
            master
                .set_attribute("page-width", page_size.width.as_str())
                .set_attribute("page-height", page_size.height.as_str())
                .set_attribute("axf:bleed", bleed);
            if let Some(image) = background_image {
                master
                    .set_attribute("background-image", image)
                    .set_attribute("background-repeat", "no-repeat");
            }
            configure_master(master);
        })
    }

    /// A `fo:region-body` whose side margins follow the page position.
    pub fn create_region_body<F>(&self, page_spaces: &PageSpaces, position: Position, configure_region: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        let (left, right) = position.margins(&page_spaces.outer, &page_spaces.inner);
        configure(self.create_element("fo:region-body"), |region| {
            region
                .set_attribute("margin-top", page_spaces.top.as_str())
                .set_attribute("margin-bottom", page_spaces.bottom.as_str())
                .set_attribute("margin-left", left)
                .set_attribute("margin-right", right);
            configure_region(region);
        })
    }

    pub fn create_region_before<F>(&self, extent: &str, configure_region: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        self.create_region("fo:region-before", extent, configure_region)
    }

    pub fn create_region_after<F>(&self, extent: &str, configure_region: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        self.create_region("fo:region-after", extent, configure_region)
    }

    pub fn create_region_start<F>(&self, extent: &str, configure_region: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        self.create_region("fo:region-start", extent, configure_region)
    }

    pub fn create_region_end<F>(&self, extent: &str, configure_region: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        self.create_region("fo:region-end", extent, configure_region)
    }

    fn create_region<F>(&self, tag_name: &str, extent: &str, configure_region: F) -> Element<Text>
    where
        F: FnOnce(&mut Element<Text>),
    {
        configure(self.create_element(tag_name), |region| {
            region.set_attribute("extent", extent);
            configure_region(region);
        })
    }
}

impl CreatableDocument for FormatDocument {
    type Text = Text;

    fn with_root(root_tag_name: &str) -> Self {
        Self(Document::new(root_tag_name))
    }

    fn document_element(&self) -> &Element<Text> {
        self.0.document_element()
    }

    fn document_element_mut(&mut self) -> &mut Element<Text> {
        self.0.document_element_mut()
    }
}

impl NodeContainer<Text> for FormatDocument {
    fn child_nodes_mut(&mut self) -> &mut Vec<Node<Text>> {
        self.0.child_nodes_mut()
    }
}

impl fmt::Display for FormatDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_body_margins_follow_position() {
        let document = FormatDocument::new();
        let spaces = PageSpaces::default();
        let left = document.create_region_body(&spaces, Position::Left, |_| {});
        assert_eq!(left.get_attribute("margin-left"), Some("14mm"));
        assert_eq!(left.get_attribute("margin-right"), Some("18mm"));
        let right = document.create_region_body(&spaces, Position::Right, |region| {
            region.set_attribute("column-count", "2");
        });
        assert_eq!(right.get_attribute("margin-left"), Some("18mm"));
        assert_eq!(right.get_attribute("margin-right"), Some("14mm"));
        assert_eq!(right.get_attribute("column-count"), Some("2"));
    }

    #[test]
    fn test_page_master() {
        let document = FormatDocument::new();
        let master = document.create_page_master(&PageSize::default(), "3mm", None, |master| {
            master.set_attribute("master-name", "main.left");
            master.append_child(document.create_region_end("8mm", |_| {}));
        });
        assert_eq!(
            master.to_string(),
            r#"<fo:simple-page-master page-width="148mm" page-height="220mm" axf:bleed="3mm" master-name="main.left"><fo:region-end extent="8mm"/></fo:simple-page-master>"#
        );
    }

    #[test]
    fn test_page_master_background() {
        let document = FormatDocument::new();
        let master = document.create_page_master(&PageSize::default(), "0mm", Some("url('x.svg')"), |_| {});
        assert_eq!(master.get_attribute("background-image"), Some("url('x.svg')"));
        assert_eq!(master.get_attribute("background-repeat"), Some("no-repeat"));
    }

    #[test]
    fn test_default_root() {
        let document = FormatDocument::new();
        assert_eq!(document.document_element().tag_name(), "fo:root");
        assert!(document.to_string().ends_with("<fo:root/>"));
    }
}
