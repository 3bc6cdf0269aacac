use crate::config::FormatConfig;
use folio_dom::{Element, NodeContainer, NodeLike, NodeList, Text};
use folio_markup::{MarkupChild, MarkupResolver};

/// Resolves dictionary markup into XSL-FO nodes.
///
/// Links and top-level sequences become node lists so that they disappear into their
/// parent, bracket spans switch to the Shaleian font and slash spans are set in italics.
#[derive(Debug, Clone)]
pub struct FormatResolver {
    shaleian_font_family: String,
    shaleian_font_size: String,
}

impl FormatResolver {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            shaleian_font_family: config.shaleian_font_family(),
            shaleian_font_size: config.shaleian_font_size.clone(),
        }
    }

    fn shaleian_inline(&self) -> Element<Text> {
        let mut inline = Element::new("fo:inline");
        inline
            .set_attribute("font-family", self.shaleian_font_family.as_str())
            .set_attribute("font-size", self.shaleian_font_size.as_str());
        inline
    }
}

/// Appends resolver children to `container`, text leaves as text nodes.
pub fn append_markup_children<C>(container: &mut C, children: Vec<MarkupChild<NodeLike<Text>>>)
where
    C: NodeContainer<Text>,
{
    for child in children {
        match child {
            MarkupChild::Text(text) => container.append_text_node(&text),
            MarkupChild::Node(node) => container.append_child(node),
        };
    }
}

impl MarkupResolver for FormatResolver {
    type Output = NodeLike<Text>;

    fn resolve_link(&self, _name: &str, children: Vec<MarkupChild<NodeLike<Text>>>) -> NodeLike<Text> {
        let mut list = NodeList::new();
        append_markup_children(&mut list, children);
        list.into()
    }

    fn resolve_bracket(&self, children: Vec<MarkupChild<NodeLike<Text>>>) -> NodeLike<Text> {
        let mut inline = self.shaleian_inline();
        append_markup_children(&mut inline, children);
        inline.into()
    }

    fn resolve_slash(&self, children: Vec<MarkupChild<NodeLike<Text>>>) -> NodeLike<Text> {
        let mut inline = Element::new("fo:inline");
        inline.set_attribute("font-style", "italic");
        append_markup_children(&mut inline, children);
        inline.into()
    }

    fn join(&self, children: Vec<MarkupChild<NodeLike<Text>>>) -> NodeLike<Text> {
        let mut list = NodeList::new();
        append_markup_children(&mut list, children);
        list.into()
    }
}
