use folio_dictionary::DictionaryError;
use folio_format::FormatError;
use folio_markup::MarkupError;
use thiserror::Error;

/// Every failure a conversion run can report.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Loading the dictionary failed: {0}")]
    Dictionary(#[from] DictionaryError),

    #[error("Rendering failed: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Formatter '{program}' failed: {message}")]
    Formatter { program: String, message: String },
}
