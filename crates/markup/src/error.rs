use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    #[error("Markup parse error in '{input}': {message}")]
    Parse { input: String, message: String },
}
