//! Line scanner for the input format.
//!
//! The input is read one line at a time with a [`LocatingSlice`] over the
//! whole source, so every span is an absolute byte range. A line is one of:
//!
//! - blank, or a comment starting with `#`
//! - a directive: `@name value, value, ...`
//! - a setting: `key = value`
//! - anything else, which is ignored
//!
//! Leading and trailing whitespace is not significant anywhere.

use std::ops::Range;

use winnow::{
    Parser as _,
    ascii::{line_ending, space0, till_line_ending},
    combinator::{alt, eof, opt, separated},
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::take_till,
};

use crate::span::{Span, Spanned};

pub(crate) type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// One classified line of input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement<'a> {
    /// Blank line or comment.
    Blank,
    /// `key = value`
    Setting {
        key: Spanned<&'a str>,
        value: Spanned<&'a str>,
    },
    /// `@name value, value, ...` with empty values already dropped.
    Directive {
        name: Spanned<&'a str>,
        values: Vec<Spanned<String>>,
    },
    /// A line with no meaning in the format.
    Ignored(Spanned<&'a str>),
}

/// Trims `raw`, keeping its span in step with the trimmed text.
fn trimmed(raw: &str, range: Range<usize>) -> Spanned<&str> {
    let leading = raw.len() - raw.trim_start().len();
    let value = raw.trim();
    let start = range.start + leading;
    Spanned::new(value, Span::new(start..start + value.len()))
}

/// Trims a directive value and decodes literal `\n` sequences into newlines.
///
/// Returns `None` for values that end up empty.
fn directive_value(raw: &str, range: Range<usize>) -> Option<Spanned<String>> {
    let value = trimmed(raw, range);
    let decoded = value.inner().replace(r"\n", "\n");
    if decoded.is_empty() {
        return None;
    }
    Some(Spanned::new(decoded, value.span()))
}

fn line_end(input: &mut Input<'_>) -> IResult<()> {
    alt((line_ending.void(), eof.void())).parse_next(input)
}

fn comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', till_line_ending, line_end).void().parse_next(input)
}

fn directive<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let (name, name_range) = ('@', take_till(0.., [' ', '\t', '\r', '\n']))
        .take()
        .with_span()
        .parse_next(input)?;

    let segments: Vec<(&'a str, Range<usize>)> =
        separated(0.., take_till(0.., [',', '\n']).with_span(), ',').parse_next(input)?;
    line_end.parse_next(input)?;

    let values = segments
        .into_iter()
        .filter_map(|(raw, range)| directive_value(raw, range))
        .collect();

    Ok(Statement::Directive {
        name: Spanned::new(name, Span::new(name_range)),
        values,
    })
}

fn setting<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let (key, key_range) = take_till(1.., ['=', '\n']).with_span().parse_next(input)?;
    '='.parse_next(input)?;
    let (value, value_range) = till_line_ending.with_span().parse_next(input)?;
    line_end.parse_next(input)?;

    Ok(Statement::Setting {
        key: trimmed(key, key_range),
        value: trimmed(value, value_range),
    })
}

fn other<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let (text, range) = till_line_ending.with_span().parse_next(input)?;
    line_end.parse_next(input)?;
    Ok(Statement::Ignored(trimmed(text, range)))
}

/// Reads exactly one line, including its line ending.
pub(crate) fn statement<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    space0.parse_next(input)?;
    alt((
        line_end.value(Statement::Blank),
        comment.value(Statement::Blank),
        directive,
        setting,
        other,
    ))
    .parse_next(input)
}

/// Skips the remainder of the current line after a scanning failure.
///
/// Always makes progress on non-empty input, including lines that contain
/// a bare carriage return.
pub(crate) fn skip_line(input: &mut Input<'_>) {
    let _: IResult<_> = (take_till(0.., '\n'), opt('\n')).parse_next(input);
}
