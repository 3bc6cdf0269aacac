//! # folio
//!
//! Renders dictionaries as XSL-FO documents. The work is split across the workspace
//! crates, re-exported here:
//!
//! - [`dom`]: the element tree and its XML serialization
//! - [`dictionary`]: the dictionary model and JSON loader
//! - [`markup`]: inline markup parsing and the resolver protocol
//! - [`format`]: the XSL-FO renderer
//!
//! ```ignore
//! let dictionary = folio::Dictionary::load("dictionary.json")?;
//! let output = folio::convert_dictionary(&dictionary, "ja", folio::FormatConfig::default())?;
//! ```

pub mod error;
pub mod formatter;

pub use folio_dictionary as dictionary;
pub use folio_dom as dom;
pub use folio_format as format;
pub use folio_markup as markup;

pub use error::FolioError;
pub use folio_dictionary::Dictionary;
pub use folio_format::{DictionaryFormatBuilder, FormatConfig, FormatError};
pub use formatter::Formatter;

use std::fs;
use std::path::Path;

/// Reads a style configuration file. Fields it omits keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FormatConfig, FolioError> {
    let source = fs::read_to_string(path)?;
    Ok(FormatConfig::from_json_str(&source)?)
}

/// Renders a dictionary. Markup errors surface as [`FolioError::Markup`], unwrapped.
pub fn convert_dictionary(dictionary: &Dictionary, language: &str, config: FormatConfig) -> Result<String, FolioError> {
    let mut builder = DictionaryFormatBuilder::new(language).with_config(config);
    builder.convert(dictionary).map_err(|error| match error {
        FormatError::Markup(error) => FolioError::Markup(error),
        other => FolioError::Format(other),
    })
}

/// Loads a dictionary, renders it and writes the XSL-FO to `output_path`.
///
/// Nothing is written when loading or rendering fails.
pub fn convert_file<P, Q>(dictionary_path: P, output_path: Q, language: &str, config: FormatConfig) -> Result<(), FolioError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let dictionary = Dictionary::load(dictionary_path)?;
    let output = convert_dictionary(&dictionary, language, config)?;
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, output)?;
    log::info!("Wrote {}", output_path.display());
    Ok(())
}
