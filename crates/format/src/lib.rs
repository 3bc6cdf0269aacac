//! # folio-format
//!
//! Renders a [`folio_dictionary::Dictionary`] as an XSL-FO document ready for a print
//! formatter.
//!
//! - **document**: `FormatDocument` and its page-master and region factories
//! - **element**: attribute presets for XSL-FO elements
//! - **config**: the serde-loadable house style
//! - **resolver**: inline markup to XSL-FO nodes
//! - **builder**: `DictionaryFormatBuilder`, the conversion entry point

pub mod builder;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod resolver;

pub use builder::{DictionaryFormatBuilder, SUPPORTED_VERSION};
pub use config::{AlphabetPartition, ColorConfig, FontConfig, FormatConfig, PageSize, PageSpaces};
pub use document::{FormatDocument, Position};
pub use element::FormatElementExt;
pub use error::FormatError;
pub use resolver::{FormatResolver, append_markup_children};
