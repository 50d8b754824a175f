//! Quote-aware splitting of one raw line into field substrings.
//!
//! The tokenizer scans a single line left to right and honors the configured
//! escape character: a field that begins with it is quoted, a doubled escape
//! character inside a quoted field stands for one literal occurrence, and a
//! single one closes the field. Unquoted fields are taken verbatim.

use std::iter::Peekable;
use std::str::Chars;

use super::error::{ParseError, ParseErrorKind};
use crate::config::ParserConfig;

/// Split one raw line into its raw field substrings.
///
/// After a quoted field closes, only ASCII whitespace may precede the next
/// field delimiter; anything else is rejected, as is reaching the end of the line
/// with the quote still open. Consuming a delimiter advances to the next
/// field and increments the column counter; the end of the line terminates
/// the scan, so a trailing delimiter does not produce a trailing empty
/// field.
///
/// `line_number` is used only for error attribution. A returned error's
/// column is the 1-based index of the field being scanned when the failure
/// occurred.
pub fn tokenize(
    line: &str,
    line_number: usize,
    config: &ParserConfig,
) -> Result<Vec<String>, ParseError> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();
    let mut column = 1;

    while chars.peek().is_some() {
        let field = if chars.peek() == Some(&config.escape_char) {
            chars.next();
            read_quoted(&mut chars, config, line_number, column)?
        } else {
            read_unquoted(&mut chars, config.field_delimiter)
        };
        fields.push(field);

        if chars.peek() == Some(&config.field_delimiter) {
            chars.next();
            column += 1;
        } else {
            break;
        }
    }

    Ok(fields)
}

/// Consume a quoted field body; the opening escape character has already
/// been consumed.
fn read_quoted(
    chars: &mut Peekable<Chars<'_>>,
    config: &ParserConfig,
    line_number: usize,
    column: usize,
) -> Result<String, ParseError> {
    let mut field = String::new();

    loop {
        match chars.next() {
            None => {
                return Err(ParseError::new(
                    ParseErrorKind::UnclosedEscape,
                    line_number,
                    column,
                ));
            }
            Some(c) if c == config.escape_char => {
                if chars.peek() == Some(&config.escape_char) {
                    // Doubled escape character: one literal occurrence
                    chars.next();
                    field.push(config.escape_char);
                } else {
                    break;
                }
            }
            Some(c) => field.push(c),
        }
    }

    // Only ASCII whitespace may sit between the closing escape character
    // and the next field delimiter
    while let Some(&c) = chars.peek() {
        if c == config.field_delimiter {
            break;
        }
        if !c.is_ascii_whitespace() {
            return Err(ParseError::new(
                ParseErrorKind::TrailingAfterEscape { found: c },
                line_number,
                column,
            ));
        }
        chars.next();
    }

    Ok(field)
}

/// Consume an unquoted field verbatim, stopping before the field delimiter.
fn read_unquoted(chars: &mut Peekable<Chars<'_>>, field_delimiter: char) -> String {
    let mut field = String::new();
    while let Some(&c) = chars.peek() {
        if c == field_delimiter {
            break;
        }
        field.push(c);
        chars.next();
    }
    field
}
