//! # folio-markup
//!
//! Inline markup used in dictionary text and the protocol that turns it into nodes:
//!
//! - `{name}` cross-reference links
//! - `[…]` bracket spans
//! - `/…/` slash spans
//! - `\x` escapes
//!
//! [`parse_markup`] produces a [`Markup`] tree, [`resolve`] hands it to a
//! [`MarkupResolver`], and [`Parser`] does both for every field of a dictionary word.

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod word;

pub use ast::{Markup, plain_text};
pub use error::MarkupError;
pub use parser::parse_markup;
pub use resolver::{MarkupChild, MarkupResolver, PlainTextResolver, resolve};
pub use word::Parser;
