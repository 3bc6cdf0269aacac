//! The dictionary as it is loaded from its JSON source.
//!
//! Every human-readable field of a section holds raw inline markup; turning it into
//! nodes is the job of the markup parser.

use crate::collation::Collation;
use crate::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    pub settings: DictionarySettings,
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DictionarySettings {
    /// The structural version of the dictionary format.
    pub version: String,
    /// Letters in collation order. Names are compared by code point when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alphabet_rule: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub name: String,
    #[serde(default)]
    pub pronunciation: String,
    /// Sense sections keyed by language code.
    #[serde(default)]
    pub parts: BTreeMap<String, Part>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// The word's class label, such as a part of speech.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub equivalents: Vec<Equivalent>,
    #[serde(default)]
    pub informations: Vec<NormalInformation>,
    #[serde(default)]
    pub phrases: Vec<PhraseInformation>,
    #[serde(default)]
    pub examples: Vec<ExampleInformation>,
}

impl Section {
    pub fn equivalents(&self, only_visible: bool) -> impl Iterator<Item = &Equivalent> {
        self.equivalents.iter().filter(move |e| !only_visible || !e.hidden)
    }

    pub fn normal_informations(&self, only_visible: bool) -> impl Iterator<Item = &NormalInformation> {
        self.informations.iter().filter(move |i| !only_visible || !i.hidden)
    }

    pub fn phrase_informations(&self, only_visible: bool) -> impl Iterator<Item = &PhraseInformation> {
        self.phrases.iter().filter(move |p| !only_visible || !p.hidden)
    }

    pub fn example_informations(&self, only_visible: bool) -> impl Iterator<Item = &ExampleInformation> {
        self.examples.iter().filter(move |e| !only_visible || !e.hidden)
    }
}

/// A group of translation equivalents sharing one category.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equivalent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Disambiguating frame text, such as the object a verb takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<String>,
    pub names: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum InformationKind {
    Meaning,
    Etymology,
    Usage,
    Note,
    #[serde(other)]
    Other,
}

/// A free-text note attached to a section.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NormalInformation {
    pub kind: InformationKind,
    pub text: String,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhraseInformation {
    pub expression: String,
    #[serde(default)]
    pub equivalent_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExampleInformation {
    pub sentence: String,
    pub translation: String,
    #[serde(default)]
    pub hidden: bool,
}

impl Dictionary {
    pub fn from_json_str(source: &str) -> Result<Self, DictionaryError> {
        let dictionary: Dictionary = serde_json::from_str(source)?;
        log::debug!(
            "Loaded dictionary (version '{}') with {} words.",
            dictionary.settings.version,
            dictionary.words.len()
        );
        Ok(dictionary)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|source| DictionaryError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    pub fn collation(&self) -> Collation {
        match &self.settings.alphabet_rule {
            Some(rule) => Collation::from_rule(rule),
            None => Collation::code_point(),
        }
    }

    /// Sorts the words in place by the dictionary's collation.
    pub fn sort(&mut self) {
        let collation = self.collation();
        self.words.sort_by(|a, b| collation.compare(&a.name, &b.name));
    }

    /// Returns the words in collation order without reordering the dictionary.
    pub fn sorted_words(&self) -> Vec<&Word> {
        let collation = self.collation();
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_by(|a, b| collation.compare(&a.name, &b.name));
        words
    }
}
