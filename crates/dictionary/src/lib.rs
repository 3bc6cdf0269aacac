//! # folio-dictionary
//!
//! The dictionary data model, its JSON loader and the alphabet collation used to order
//! entries.

pub mod collation;
pub mod error;
pub mod model;
pub mod parsed;

pub use collation::Collation;
pub use error::DictionaryError;
pub use model::{
    Dictionary, DictionarySettings, Equivalent, ExampleInformation, InformationKind, NormalInformation, Part,
    PhraseInformation, Section, Word,
};
pub use parsed::{
    ParsedEquivalent, ParsedExampleInformation, ParsedNormalInformation, ParsedPart, ParsedPhraseInformation,
    ParsedSection, ParsedWord,
};
