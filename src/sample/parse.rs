//! Parser for serialized address lists.
//!
//! Accepts exactly a bracketed list of quoted strings, e.g.
//! `['8.8.8.1', "8.8.8.2"]`. Nothing is evaluated: numbers, nested lists,
//! bare words and trailing text are all rejected.

use std::iter::Peekable;
use std::str::Chars;

/// Parses a bracketed list of single- or double-quoted strings.
///
/// Whitespace around elements and a single trailing comma are allowed.
/// Supported escapes inside strings: `\\`, `\'`, `\"`, `\n`, `\t`.
///
/// # Errors
///
/// Returns a human-readable reason when the text is not such a list.
pub fn parse_address_list(text: &str) -> Result<Vec<String>, String> {
    let mut chars = text.chars().peekable();
    skip_whitespace(&mut chars);

    match chars.next() {
        Some('[') => {}
        Some(c) => return Err(format!("expected '[' but found '{c}'")),
        None => return Err("empty value".to_string()),
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.peek().copied() {
            Some(']') => {
                chars.next();
                break;
            }
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                items.push(parse_quoted(&mut chars, quote)?);
            }
            Some(c) => return Err(format!("expected a quoted string but found '{c}'")),
            None => return Err("unterminated list".to_string()),
        }

        skip_whitespace(&mut chars);
        match chars.next() {
            Some(',') => {}
            Some(']') => break,
            Some(c) => return Err(format!("expected ',' or ']' but found '{c}'")),
            None => return Err("unterminated list".to_string()),
        }
    }

    skip_whitespace(&mut chars);
    if let Some(c) = chars.next() {
        return Err(format!("unexpected '{c}' after closing ']'"));
    }

    Ok(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn parse_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Result<String, String> {
    let mut value = String::new();
    loop {
        match chars.next() {
            Some(c) if c == quote => return Ok(value),
            Some('\\') => match chars.next() {
                Some('\\') => value.push('\\'),
                Some('\'') => value.push('\''),
                Some('"') => value.push('"'),
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some(c) => return Err(format!("unsupported escape '\\{c}'")),
                None => return Err("unterminated string".to_string()),
            },
            Some(c) => value.push(c),
            None => return Err("unterminated string".to_string()),
        }
    }
}
