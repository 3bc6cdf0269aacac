use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary from '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dictionary JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
}
