//! JavaScript single-quoted string literals embedded in page scripts.

use crate::error::ParseError;

/// Returns the raw body of the `'...'` literal that starts right after `marker`
/// (the marker ends with the opening quote). Escapes are left in place.
pub(super) fn initializer_literal<'a>(script: &'a str, marker: &str) -> Option<&'a str> {
    let start = script.find(marker)? + marker.len();
    let rest = &script[start..];
    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '\'' => return Some(&rest[..i]),
            _ => {}
        }
    }
    None
}

/// Decodes the escapes of a JavaScript string literal body.
pub(super) fn decode(literal: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            return Err(ParseError::Payload("dangling backslash".into()));
        };
        match esc {
            'x' => {
                let code = hex_code(&mut chars, 2)?;
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            'u' => {
                let code = hex_code(&mut chars, 4)?;
                out.push(utf16_unit(code, &mut chars)?);
            }
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            other => out.push(other),
        }
    }
    Ok(out)
}

fn hex_code(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<u32, ParseError> {
    let mut code = 0u32;
    for _ in 0..digits {
        let d = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| ParseError::Payload("bad hex escape".into()))?;
        code = code << 4 | d;
    }
    Ok(code)
}

/// Combines a `\uD8xx\uDCxx` surrogate pair; lone surrogates become U+FFFD.
fn utf16_unit(code: u32, chars: &mut std::str::Chars<'_>) -> Result<char, ParseError> {
    if !(0xD800..0xDC00).contains(&code) {
        return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
    let mut lookahead = chars.clone();
    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
        let low = hex_code(&mut lookahead, 4)?;
        if (0xDC00..0xE000).contains(&low) {
            *chars = lookahead;
            let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
            return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }
    Ok(char::REPLACEMENT_CHARACTER)
}
