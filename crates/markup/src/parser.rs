//! A `nom`-based parser for inline dictionary markup.
//!
//! Each span kind accepts the other kinds inside it but never itself, so `[a [b]]` is
//! rejected while `[a {b} /c/]` is fine. A link holds only text and slash spans.
use crate::ast::{Markup, merge_text, plain_text};
use crate::error::MarkupError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::is_not,
    character::complete::{anychar, char},
    combinator::map,
    multi::many0,
    sequence::{delimited, preceded},
};

const SPECIAL_CHARACTERS: &str = "{}[]/\\";

// --- Main Public Parser ---

pub fn parse_markup(source: &str) -> Result<Vec<Markup>, MarkupError> {
    match markup_sequence(source) {
        Ok(("", markup)) => Ok(markup),
        Ok((rest, _)) => Err(MarkupError::Parse {
            input: source.to_string(),
            message: describe_remainder(source, rest),
        }),
        Err(e) => Err(MarkupError::Parse {
            input: source.to_string(),
            message: e.to_string(),
        }),
    }
}

fn describe_remainder(source: &str, rest: &str) -> String {
    let offset = source.len() - rest.len();
    match rest.chars().next() {
        Some('{') => format!("link opened at byte {offset} is not closed properly"),
        Some('[') => format!("bracket span opened at byte {offset} is not closed properly"),
        Some('/') => format!("slash span opened at byte {offset} is not closed properly"),
        Some('\\') => format!("escape at byte {offset} has no character to escape"),
        Some(c) => format!("unexpected '{c}' at byte {offset}"),
        None => format!("parser stopped at byte {offset}"),
    }
}

// --- Sequences ---

fn markup_sequence(input: &str) -> IResult<&str, Vec<Markup>> {
    map(many0(alt((text, escape, link, bracket, slash))), merge_text).parse(input)
}

fn link_content(input: &str) -> IResult<&str, Vec<Markup>> {
    map(many0(alt((text, escape, slash))), merge_text).parse(input)
}

fn bracket_content(input: &str) -> IResult<&str, Vec<Markup>> {
    map(many0(alt((text, escape, link, slash))), merge_text).parse(input)
}

fn slash_content(input: &str) -> IResult<&str, Vec<Markup>> {
    map(many0(alt((text, escape, link, bracket))), merge_text).parse(input)
}

// --- Leaves ---

fn text(input: &str) -> IResult<&str, Markup> {
    map(is_not(SPECIAL_CHARACTERS), |s: &str| Markup::text(s)).parse(input)
}

fn escape(input: &str) -> IResult<&str, Markup> {
    map(preceded(char('\\'), anychar), |c| Markup::Text(c.to_string())).parse(input)
}

// --- Spans ---

fn link(input: &str) -> IResult<&str, Markup> {
    map(delimited(char('{'), link_content, char('}')), |children| Markup::Link {
        name: plain_text(&children),
        children,
    })
    .parse(input)
}

fn bracket(input: &str) -> IResult<&str, Markup> {
    map(delimited(char('['), bracket_content, char(']')), Markup::Bracket).parse(input)
}

fn slash(input: &str) -> IResult<&str, Markup> {
    map(delimited(char('/'), slash_content, char('/')), Markup::Slash).parse(input)
}
