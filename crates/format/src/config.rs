//! Styling configuration for the dictionary layout.
//!
//! `FormatConfig::default()` is the house style. A JSON file may override any subset of
//! fields; everything it leaves out keeps its default value.

use crate::error::FormatError;
use folio_dom::ElasticRatios;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatConfig {
    pub fonts: FontConfig,
    pub font_size: String,
    /// Size of Shaleian text relative to the surrounding text.
    pub shaleian_font_size: String,
    pub line_height: String,
    pub page_size: PageSize,
    pub page_spaces: PageSpaces,
    pub header_extent: String,
    pub footer_extent: String,
    pub side_extent: String,
    pub bleed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub column_gap: String,
    pub alphabet_index_height: String,
    pub alphabet_index_gap: String,
    pub colors: ColorConfig,
    /// Index letters in order, one bookmark and one side tab each.
    pub alphabets: String,
    pub alphabet_partition: AlphabetPartition,
    /// Stretch applied to the space around each entry.
    pub entry_ratios: ElasticRatios,
    /// Stretch applied to the line height of body paragraphs.
    pub line_ratios: ElasticRatios,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            fonts: FontConfig::default(),
            font_size: "8pt".to_string(),
            shaleian_font_size: "100%".to_string(),
            line_height: "1.2".to_string(),
            page_size: PageSize::default(),
            page_spaces: PageSpaces::default(),
            header_extent: "11mm".to_string(),
            footer_extent: "11mm".to_string(),
            side_extent: "8mm".to_string(),
            bleed: "0mm".to_string(),
            background_image: Some("url('../document/material/blank.svg')".to_string()),
            column_gap: "3mm".to_string(),
            alphabet_index_height: "6mm".to_string(),
            alphabet_index_gap: "2mm".to_string(),
            colors: ColorConfig::default(),
            alphabets: "sztdkgfvpbcqxjlrnmyha".to_string(),
            alphabet_partition: AlphabetPartition::default(),
            entry_ratios: ElasticRatios::default(),
            line_ratios: ElasticRatios::new(0.9, 1.0),
        }
    }
}

impl FormatConfig {
    pub fn from_json_str(source: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn font_family(&self) -> String {
        format!("{}, {}", self.fonts.european, self.fonts.japanese)
    }

    pub fn shaleian_font_family(&self) -> String {
        format!("{}, {}", self.fonts.european_shaleian, self.fonts.japanese_shaleian)
    }

    pub fn index_letters(&self) -> impl Iterator<Item = String> + '_ {
        self.alphabets.chars().map(String::from)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    pub european: String,
    pub japanese: String,
    pub european_shaleian: String,
    pub japanese_shaleian: String,
    /// Used for page numbers.
    pub special: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            european: "Linux Libertine G".to_string(),
            japanese: "源ノ明朝".to_string(),
            european_shaleian: "Vekos".to_string(),
            japanese_shaleian: "源ノ角ゴシック".to_string(),
            special: "Gill Sans Nova Cn Book".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    pub text: String,
    pub highlight: String,
    pub gray: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            text: "rgb-icc(#CMYK, 0, 0, 0, 1)".to_string(),
            highlight: "rgb-icc(#CMYK, 0, 0.8, 0, 0)".to_string(),
            gray: "rgb-icc(#CMYK, 0, 0, 0, 0.6)".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSize {
    pub width: String,
    pub height: String,
}

impl Default for PageSize {
    fn default() -> Self {
        Self {
            width: "148mm".to_string(),
            height: "220mm".to_string(),
        }
    }
}

/// Page margins. `outer` and `inner` swap sides between left and right pages.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSpaces {
    pub top: String,
    pub bottom: String,
    pub outer: String,
    pub inner: String,
}

impl Default for PageSpaces {
    fn default() -> Self {
        Self {
            top: "15mm".to_string(),
            bottom: "15mm".to_string(),
            outer: "14mm".to_string(),
            inner: "18mm".to_string(),
        }
    }
}

/// How word names map onto index letters.
///
/// A name belongs to the partition of its first significant character, except that
/// every vowel is folded into a single partition.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AlphabetPartition {
    pub vowels: String,
    pub folded_into: String,
    /// Display label of the folded partition.
    pub label: String,
    /// Characters skipped when looking for the first significant character.
    pub ignored: String,
}

impl Default for AlphabetPartition {
    fn default() -> Self {
        Self {
            vowels: "aáàâeéèêiíìîoóòôuúùû".to_string(),
            folded_into: "a".to_string(),
            label: "a–u".to_string(),
            ignored: "'+-".to_string(),
        }
    }
}

impl AlphabetPartition {
    /// The partition key of a word name, or `None` when the name consists of ignored
    /// characters only.
    pub fn partition_of(&self, name: &str) -> Option<String> {
        let first = name.chars().find(|c| !self.ignored.contains(*c))?;
        if self.vowels.contains(first) {
            Some(self.folded_into.clone())
        } else {
            Some(first.to_string())
        }
    }

    pub fn label_of<'a>(&'a self, letter: &'a str) -> &'a str {
        if letter == self.folded_into { &self.label } else { letter }
    }
}
