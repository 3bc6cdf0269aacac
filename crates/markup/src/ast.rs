/// One node of parsed inline markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    /// Literal text, with escapes already applied.
    Text(String),
    /// A `{…}` cross reference. `name` is the plain text of the content.
    Link { name: String, children: Vec<Markup> },
    /// A `[…]` span.
    Bracket(Vec<Markup>),
    /// A `/…/` span.
    Slash(Vec<Markup>),
}

impl Markup {
    pub fn text(content: impl Into<String>) -> Self {
        Markup::Text(content.into())
    }

    /// The literal text of this node and its descendants, without any delimiters.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain_text(&mut out);
        out
    }

    fn collect_plain_text(&self, out: &mut String) {
        match self {
            Markup::Text(text) => out.push_str(text),
            Markup::Link { children, .. } | Markup::Bracket(children) | Markup::Slash(children) => {
                for child in children {
                    child.collect_plain_text(out);
                }
            }
        }
    }
}

/// Plain text of a markup sequence.
pub fn plain_text(markup: &[Markup]) -> String {
    markup.iter().map(Markup::plain_text).collect()
}

/// Joins adjacent text nodes so that escapes never split a run of text.
pub(crate) fn merge_text(markup: Vec<Markup>) -> Vec<Markup> {
    let mut merged: Vec<Markup> = Vec::with_capacity(markup.len());
    for node in markup {
        match (merged.last_mut(), node) {
            (Some(Markup::Text(previous)), Markup::Text(text)) => previous.push_str(&text),
            (_, node) => merged.push(node),
        }
    }
    merged
}
