//! Instruction syntax: symbol constants, the escape codec, and the
//! quoted-span stripper shared by duplicate detection and validation.
//!
//! The codec decodes escape sequences inside extracted parameter values in a
//! single left-to-right scan. At each backslash, `\uXXXX` is tried first,
//! then the two-character escapes; an escape that matches neither form is
//! copied through verbatim. Decoded characters are never re-scanned, so a
//! value cannot be double-decoded.
//!
//! ## Examples
//!
//! ```rust
//! use dslfmt::syntax::decode_escapes;
//!
//! assert_eq!(decode_escapes("\\u0041\\t"), "A\t");
//! assert_eq!(decode_escapes("\\q"), "\\q"); // unknown escape, verbatim
//! ```

/// Marks the start of a parameter.
pub const PARAM_PREFIX: char = '/';

/// Separates a parameter name from its value.
pub const PARAM_SEPARATOR: char = ':';

/// Wraps quoted parameter values.
pub const QUOTE: char = '"';

/// The platform line-break sequence `\n` decodes to.
#[cfg(windows)]
pub const LINE_BREAK: &str = "\r\n";
/// The platform line-break sequence `\n` decodes to.
#[cfg(not(windows))]
pub const LINE_BREAK: &str = "\n";

/// Decodes `\uXXXX` and two-character backslash escapes in `input`.
///
/// Lenient by design: a `\u` with fewer than four hex digits, or naming an
/// invalid code point, stays verbatim, as does any `\X` outside the escape
/// table. A trailing lone backslash is kept as-is.
#[must_use]
pub fn decode_escapes(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\\' || i + 1 >= chars.len() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        match chars[i + 1] {
            'u' => {
                if let Some(decoded) = decode_unicode(&chars, i + 2) {
                    out.push(decoded);
                    i += 6;
                } else {
                    out.push('\\');
                    out.push('u');
                    i += 2;
                }
            }
            'n' => {
                out.push_str(LINE_BREAK);
                i += 2;
            }
            other => {
                match simple_escape(other) {
                    Some(mapped) => out.push(mapped),
                    None => {
                        out.push('\\');
                        out.push(other);
                    }
                }
                i += 2;
            }
        }
    }

    out
}

fn decode_unicode(chars: &[char], start: usize) -> Option<char> {
    if start + 4 > chars.len() {
        return None;
    }
    let hex: String = chars[start..start + 4].iter().collect();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(&hex, 16).ok()?;
    char::from_u32(code)
}

fn simple_escape(c: char) -> Option<char> {
    Some(match c {
        '0' => '\0',
        'a' => '\u{0007}',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{000B}',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    })
}

/// Removes every quoted span from `input`, quotes included.
///
/// A single-pass scanner tracking inside-quotes state: within a span, a
/// backslash escapes the following character, so `\"` does not terminate
/// the span. An unterminated span runs to the end of input. Prefix-looking
/// characters inside quoted values therefore never leak into duplicate
/// detection or allow-list validation.
#[must_use]
pub fn strip_quoted_spans(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut inside = false;
    let mut escaped = false;

    for ch in input.chars() {
        if inside {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == QUOTE {
                inside = false;
            }
        } else if ch == QUOTE {
            inside = true;
        } else {
            out.push(ch);
        }
    }

    out
}

/// Escapes a value for interpolation between quote symbols by the builder.
///
/// Both the quote and the backslash are rewritten to their `\uXXXX` forms
/// (backslash first) so the emitted instruction parses unambiguously and the
/// extractor's decode recovers the original text exactly.
#[must_use]
pub fn escape_value(value: &str) -> String {
    value.replace('\\', "\\u005C").replace('"', "\\u0022")
}
