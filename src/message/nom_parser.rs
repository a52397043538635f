//! Nom-based line tokenizer.
//!
//! This module splits a trimmed protocol line into borrowed slices. The
//! tag segment, prefix and command are recognised with nom combinators;
//! the body is split on the first `" :"` marker before the command is read.

use nom::{
    bytes::complete::{take_till, take_till1, take_while},
    character::complete::char,
    combinator::opt,
    error::{context, VerboseError},
    sequence::{preceded, terminated},
    IResult,
};

use crate::error::MessageParseError;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse the tag segment: `@` up to the first space, consuming that space.
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing tag segment",
        terminated(
            preceded(char('@'), take_till(|c: char| c == ' ')),
            opt(char(' ')),
        ),
    )(input)
}

/// Parse the prefix: `:` up to the first space, consuming that space.
fn parse_prefix(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message prefix",
        terminated(
            preceded(char(':'), take_till(|c: char| c == ' ')),
            opt(char(' ')),
        ),
    )(input)
}

/// Parse the command: the first whitespace-delimited token of the body.
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing required command",
        preceded(
            take_while(|c: char| c.is_whitespace()),
            take_till1(|c: char| c.is_whitespace()),
        ),
    )(input)
}

/// Parse a complete line into its components.
///
/// ```text
/// [@tags] [:prefix] <command> [params...] [:trailing]
/// ```
fn parse_line(input: &str) -> ParseResult<&str, ParsedLine<'_>> {
    let (input, tags) = context("parsing optional tags", opt(parse_tags))(input)?;
    let (input, prefix) = context("parsing optional prefix", opt(parse_prefix))(input)?;

    // A colon that is not preceded by a space stays part of its token.
    let (body, trailing) = match input.split_once(" :") {
        Some((body, trailing)) => (body, Some(trailing)),
        None => (input, None),
    };

    let (rest, command) = parse_command(body)?;

    Ok((
        "",
        ParsedLine {
            tags,
            prefix,
            command,
            params: rest.split_whitespace().collect(),
            trailing,
        },
    ))
}

/// A tokenized line with borrowed string slices.
///
/// The command is returned as it appears on the wire; canonicalisation
/// happens when the owned message is built.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedLine<'a> {
    /// Raw tag segment (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    pub command: &'a str,
    pub params: Vec<&'a str>,
    /// Everything after the first `" :"` of the body.
    pub trailing: Option<&'a str>,
}

impl<'a> ParsedLine<'a> {
    /// Tokenize an already-trimmed, non-empty line.
    ///
    /// Tags, prefix and trailing are optional, so the only way this fails
    /// is a body without a command token.
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        parse_line(input)
            .map(|(_, line)| line)
            .map_err(|_| MessageParseError::MissingCommand)
    }
}
