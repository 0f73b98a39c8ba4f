//! Token parsers for CODEOWNERS lines.
//!
//! This module contains nom-based parsers for comments and rule lines.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, space0, space1},
    combinator::{eof, opt, rest},
    multi::many0,
    sequence::preceded,
};

/// Characters that can appear in a pattern (non-whitespace, non-comment).
fn is_pattern_char(c: char) -> bool {
    !c.is_whitespace() && c != '#'
}

/// Characters that can appear in an owner token.
fn is_owner_char(c: char) -> bool {
    !c.is_whitespace() && c != '#'
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (space0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// The pieces of a rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleComponents<'a> {
    /// The pattern text.
    pub pattern: &'a str,
    /// Owner tokens following the pattern, in order.
    pub owners: Vec<&'a str>,
}

/// Parses a rule line: a pattern, zero or more owners, and an optional
/// trailing comment.
///
/// Fails if anything other than whitespace or a comment follows the owners.
pub fn parse_rule_components(input: &str) -> IResult<&str, RuleComponents<'_>> {
    (
        space0,
        take_while1(is_pattern_char),
        many0(preceded(space1, take_while1(is_owner_char))),
        space0,
        opt((char('#'), rest)),
        eof,
    )
        .map(|(_, pattern, owners, _, _, _)| RuleComponents { pattern, owners })
        .parse(input)
}
