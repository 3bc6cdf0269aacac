pub mod fixtures;
pub mod fo_assertions;

use folio::{Dictionary, FolioError, FormatConfig, convert_dictionary};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A rendered document together with its source text.
pub struct RenderedFo {
    pub source: String,
}

impl RenderedFo {
    pub fn document(&self) -> Result<roxmltree::Document<'_>, roxmltree::Error> {
        roxmltree::Document::parse(&self.source)
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders a dictionary given as JSON with the default style.
pub fn render(dictionary: &Value, language: &str) -> Result<RenderedFo, FolioError> {
    init_logging();
    let dictionary = Dictionary::from_json_str(&dictionary.to_string())?;
    let source = convert_dictionary(&dictionary, language, FormatConfig::default())?;
    Ok(RenderedFo { source })
}
