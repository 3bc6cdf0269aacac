use crate::error::MarkupError;
use crate::parser::parse_markup;
use crate::resolver::{MarkupResolver, resolve};
use folio_dictionary::{
    ParsedEquivalent, ParsedExampleInformation, ParsedNormalInformation, ParsedPart, ParsedPhraseInformation,
    ParsedSection, ParsedWord, Part, Section, Word,
};

/// Turns the marked-up fields of dictionary words into resolver output.
///
/// Parsing is pure: the same word and resolver always give the same result, and the
/// first malformed field aborts the whole word.
#[derive(Debug, Clone)]
pub struct Parser<R> {
    resolver: R,
    only_visible: bool,
}

impl<R: MarkupResolver> Parser<R> {
    /// A parser that skips hidden entries.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            only_visible: true,
        }
    }

    pub fn with_only_visible(mut self, only_visible: bool) -> Self {
        self.only_visible = only_visible;
        self
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn parse_text(&self, source: &str) -> Result<R::Output, MarkupError> {
        let markup = parse_markup(source)?;
        Ok(resolve(&markup, &self.resolver))
    }

    pub fn parse(&self, word: &Word) -> Result<ParsedWord<R::Output>, MarkupError> {
        let parts = word
            .parts
            .iter()
            .map(|(language, part)| -> Result<_, MarkupError> { Ok((language.clone(), self.parse_part(part)?)) })
            .collect::<Result<_, MarkupError>>()
            .inspect_err(|e| log::debug!("Failed to parse word '{}': {}", word.name, e))?;
        Ok(ParsedWord {
            name: word.name.clone(),
            pronunciation: word.pronunciation.clone(),
            parts,
        })
    }

    /// Parses only the part written in `language`; `None` when the word has none.
    pub fn parse_language(&self, word: &Word, language: &str) -> Result<Option<ParsedPart<R::Output>>, MarkupError> {
        word.parts.get(language).map(|part| self.parse_part(part)).transpose()
    }

    fn parse_part(&self, part: &Part) -> Result<ParsedPart<R::Output>, MarkupError> {
        let sections = part
            .sections
            .iter()
            .map(|section| self.parse_section(section))
            .collect::<Result<_, _>>()?;
        Ok(ParsedPart {
            sort: part.sort.clone(),
            sections,
        })
    }

    fn parse_section(&self, section: &Section) -> Result<ParsedSection<R::Output>, MarkupError> {
        let equivalents = section
            .equivalents(self.only_visible)
            .map(|equivalent| -> Result<_, MarkupError> {
                Ok(ParsedEquivalent {
                    category: equivalent.category.clone(),
                    frame: self.parse_optional(equivalent.frame.as_deref())?,
                    names: self.parse_all(&equivalent.names)?,
                })
            })
            .collect::<Result<_, MarkupError>>()?;
        let informations = section
            .normal_informations(self.only_visible)
            .map(|information| -> Result<_, MarkupError> {
                Ok(ParsedNormalInformation {
                    kind: information.kind,
                    text: self.parse_text(&information.text)?,
                })
            })
            .collect::<Result<_, MarkupError>>()?;
        let phrases = section
            .phrase_informations(self.only_visible)
            .map(|phrase| -> Result<_, MarkupError> {
                Ok(ParsedPhraseInformation {
                    expression: self.parse_text(&phrase.expression)?,
                    equivalent_names: self.parse_all(&phrase.equivalent_names)?,
                    text: self.parse_optional(phrase.text.as_deref())?,
                })
            })
            .collect::<Result<_, MarkupError>>()?;
        let examples = section
            .example_informations(self.only_visible)
            .map(|example| -> Result<_, MarkupError> {
                Ok(ParsedExampleInformation {
                    sentence: self.parse_text(&example.sentence)?,
                    translation: self.parse_text(&example.translation)?,
                })
            })
            .collect::<Result<_, MarkupError>>()?;
        Ok(ParsedSection {
            equivalents,
            informations,
            phrases,
            examples,
        })
    }

    fn parse_all(&self, sources: &[String]) -> Result<Vec<R::Output>, MarkupError> {
        sources.iter().map(|source| self.parse_text(source)).collect()
    }

    fn parse_optional(&self, source: Option<&str>) -> Result<Option<R::Output>, MarkupError> {
        source.map(|source| self.parse_text(source)).transpose()
    }
}
