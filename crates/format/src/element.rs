use folio_dom::{Element, Text};

/// Attribute presets shared by XSL-FO elements.
pub trait FormatElementExt {
    /// Zeroes the inherited start and end indents.
    fn reset_indent(&mut self) -> &mut Self;

    fn justify_text(&mut self) -> &mut Self;

    /// Nudges the text down by a tenth of an em. Used with fonts whose large descent
    /// makes descender-free text sit visibly high.
    fn fix_text_position(&mut self) -> &mut Self;
}

impl FormatElementExt for Element<Text> {
    fn reset_indent(&mut self) -> &mut Self {
        self.set_attribute("start-indent", "0mm").set_attribute("end-indent", "0mm")
    }

    fn justify_text(&mut self) -> &mut Self {
        self.set_attribute("text-align", "justify")
            .set_attribute("axf:text-justify-trim", "punctuation ideograph inter-word")
    }

    fn fix_text_position(&mut self) -> &mut Self {
        self.set_attribute("relative-position", "relative").set_attribute("top", "0.1em")
    }
}
