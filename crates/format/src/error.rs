use folio_markup::MarkupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unsupported dictionary version '{0}'")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("Invalid format configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
