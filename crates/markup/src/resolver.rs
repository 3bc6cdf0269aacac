//! The resolver protocol: four callbacks that turn parsed markup into host nodes.
//!
//! Resolution runs bottom-up. Every child handed to a callback is either a raw text
//! leaf or a value some callback already produced, and the top level of every source
//! always passes through [`MarkupResolver::join`].

use crate::ast::Markup;

/// A child passed to a resolver callback.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupChild<N> {
    Text(String),
    Node(N),
}

impl<N> MarkupChild<N> {
    pub fn map<M, F: FnOnce(N) -> M>(self, f: F) -> MarkupChild<M> {
        match self {
            MarkupChild::Text(text) => MarkupChild::Text(text),
            MarkupChild::Node(node) => MarkupChild::Node(f(node)),
        }
    }
}

/// Converts markup into nodes of some output format.
///
/// Implementations must keep child order, and must accept as a child anything any of
/// their callbacks return, including the result of `join`.
pub trait MarkupResolver {
    type Output;

    /// A `{…}` link. `name` is the plain text of the link content.
    fn resolve_link(&self, name: &str, children: Vec<MarkupChild<Self::Output>>) -> Self::Output;

    fn resolve_bracket(&self, children: Vec<MarkupChild<Self::Output>>) -> Self::Output;

    fn resolve_slash(&self, children: Vec<MarkupChild<Self::Output>>) -> Self::Output;

    /// Combines a top-level sequence into a single value.
    fn join(&self, children: Vec<MarkupChild<Self::Output>>) -> Self::Output;
}

impl<R: MarkupResolver + ?Sized> MarkupResolver for &R {
    type Output = R::Output;

    fn resolve_link(&self, name: &str, children: Vec<MarkupChild<Self::Output>>) -> Self::Output {
        (**self).resolve_link(name, children)
    }

    fn resolve_bracket(&self, children: Vec<MarkupChild<Self::Output>>) -> Self::Output {
        (**self).resolve_bracket(children)
    }

    fn resolve_slash(&self, children: Vec<MarkupChild<Self::Output>>) -> Self::Output {
        (**self).resolve_slash(children)
    }

    fn join(&self, children: Vec<MarkupChild<Self::Output>>) -> Self::Output {
        (**self).join(children)
    }
}

/// Evaluates `markup` with `resolver`, children before parents.
pub fn resolve<R: MarkupResolver>(markup: &[Markup], resolver: &R) -> R::Output {
    resolver.join(resolve_children(markup, resolver))
}

fn resolve_children<R: MarkupResolver>(markup: &[Markup], resolver: &R) -> Vec<MarkupChild<R::Output>> {
    markup
        .iter()
        .map(|node| match node {
            Markup::Text(text) => MarkupChild::Text(text.clone()),
            Markup::Link { name, children } => {
                MarkupChild::Node(resolver.resolve_link(name, resolve_children(children, resolver)))
            }
            Markup::Bracket(children) => MarkupChild::Node(resolver.resolve_bracket(resolve_children(children, resolver))),
            Markup::Slash(children) => MarkupChild::Node(resolver.resolve_slash(resolve_children(children, resolver))),
        })
        .collect()
}

/// Strips all markup and keeps the literal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextResolver;

impl PlainTextResolver {
    fn concat(children: Vec<MarkupChild<String>>) -> String {
        children
            .into_iter()
            .map(|child| match child {
                MarkupChild::Text(text) | MarkupChild::Node(text) => text,
            })
            .collect()
    }
}

impl MarkupResolver for PlainTextResolver {
    type Output = String;

    fn resolve_link(&self, _name: &str, children: Vec<MarkupChild<String>>) -> String {
        Self::concat(children)
    }

    fn resolve_bracket(&self, children: Vec<MarkupChild<String>>) -> String {
        Self::concat(children)
    }

    fn resolve_slash(&self, children: Vec<MarkupChild<String>>) -> String {
        Self::concat(children)
    }

    fn join(&self, children: Vec<MarkupChild<String>>) -> String {
        Self::concat(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_markup;
    use std::cell::RefCell;

    /// Renders every callback as a visible tag and records the call order.
    #[derive(Default)]
    struct TracingResolver {
        calls: RefCell<Vec<String>>,
    }

    impl TracingResolver {
        fn wrap(&self, kind: &str, children: Vec<MarkupChild<String>>) -> String {
            self.calls.borrow_mut().push(kind.to_string());
            let inner: String = children
                .into_iter()
                .map(|child| match child {
                    MarkupChild::Text(text) => format!("'{text}'"),
                    MarkupChild::Node(node) => node,
                })
                .collect();
            format!("{kind}({inner})")
        }
    }

    impl MarkupResolver for TracingResolver {
        type Output = String;

        fn resolve_link(&self, name: &str, children: Vec<MarkupChild<String>>) -> String {
            self.wrap(&format!("link:{name}"), children)
        }

        fn resolve_bracket(&self, children: Vec<MarkupChild<String>>) -> String {
            self.wrap("bracket", children)
        }

        fn resolve_slash(&self, children: Vec<MarkupChild<String>>) -> String {
            self.wrap("slash", children)
        }

        fn join(&self, children: Vec<MarkupChild<String>>) -> String {
            self.wrap("join", children)
        }
    }

    #[test]
    fn test_text_bracket_text_keeps_order() {
        let resolver = TracingResolver::default();
        let output = resolve(&parse_markup("a[b]c").unwrap(), &resolver);
        assert_eq!(output, "join('a'bracket('b')'c')");
    }

    #[test]
    fn test_resolution_is_bottom_up() {
        let resolver = TracingResolver::default();
        let output = resolve(&parse_markup("[x {y /z/}]").unwrap(), &resolver);
        assert_eq!(output, "join(bracket('x 'link:y z('y 'slash('z'))))");
        assert_eq!(*resolver.calls.borrow(), vec!["slash", "link:y z", "bracket", "join"]);
    }

    #[test]
    fn test_empty_source_still_joins() {
        let resolver = TracingResolver::default();
        assert_eq!(resolve(&[], &resolver), "join()");
    }

    #[test]
    fn test_plain_text_resolver() {
        let markup = parse_markup(r"{sal} [a /b/] c\/d").unwrap();
        assert_eq!(resolve(&markup, &PlainTextResolver), "sal a b c/d");
    }

    #[test]
    fn test_resolver_by_reference() {
        let resolver = PlainTextResolver;
        let markup = parse_markup("[x]").unwrap();
        assert_eq!(resolve(&markup, &&resolver), "x");
    }

    #[test]
    fn test_child_map() {
        let child: MarkupChild<usize> = MarkupChild::Node(2);
        assert_eq!(child.map(|n| n * 2), MarkupChild::Node(4));
        let text: MarkupChild<usize> = MarkupChild::Text("t".into());
        assert_eq!(text.map(|n| n * 2), MarkupChild::Text("t".into()));
    }
}
