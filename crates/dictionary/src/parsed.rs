//! Parsed counterparts of the dictionary model.
//!
//! These mirror [`Word`](crate::Word) and its children, with every marked-up string
//! replaced by a node of type `N` produced by a markup resolver.

use crate::model::InformationKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWord<N> {
    pub name: String,
    pub pronunciation: String,
    pub parts: BTreeMap<String, ParsedPart<N>>,
}

impl<N> ParsedWord<N> {
    pub fn part(&self, language: &str) -> Option<&ParsedPart<N>> {
        self.parts.get(language)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPart<N> {
    pub sort: Option<String>,
    pub sections: Vec<ParsedSection<N>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSection<N> {
    pub equivalents: Vec<ParsedEquivalent<N>>,
    pub informations: Vec<ParsedNormalInformation<N>>,
    pub phrases: Vec<ParsedPhraseInformation<N>>,
    pub examples: Vec<ParsedExampleInformation<N>>,
}

impl<N> ParsedSection<N> {
    /// Notes of one kind, in source order.
    pub fn informations_of(&self, kind: InformationKind) -> impl Iterator<Item = &ParsedNormalInformation<N>> {
        self.informations.iter().filter(move |i| i.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquivalent<N> {
    pub category: Option<String>,
    pub frame: Option<N>,
    pub names: Vec<N>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedNormalInformation<N> {
    pub kind: InformationKind,
    pub text: N,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPhraseInformation<N> {
    pub expression: N,
    pub equivalent_names: Vec<N>,
    pub text: Option<N>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExampleInformation<N> {
    pub sentence: N,
    pub translation: N,
}
