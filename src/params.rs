//! Parameter extraction and validation.
//!
//! Parameters live inside an instruction as `/name:value`, the value either
//! quoted (`/end:", "`) or bare (`/exclude-last-end:true`). [`extract`]
//! pulls one parameter's decoded value out of an instruction; [`validate`]
//! checks every parameter name present against a directive family's
//! allow-list and reports all offenders at once.
//!
//! Both operations ignore anything inside quoted spans, using the same
//! single-pass scanner ([`crate::syntax::strip_quoted_spans`]), so a `/` or
//! a parameter-looking substring inside a quoted value is never mistaken
//! for a parameter.
//!
//! Legacy parameter spellings from the superseded grammar (`dicformat`,
//! `keyformat`, `valueformat`, `last-concat-string`) are accepted through an
//! alias table and count toward their canonical names everywhere, including
//! duplicate detection.

use crate::error::{Error, Result};
use crate::syntax::{decode_escapes, strip_quoted_spans, PARAM_PREFIX, PARAM_SEPARATOR, QUOTE};

/// A directive family, selecting which parameter names are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Single-value formatting (`basic`).
    Scalar,
    /// Sequence iteration (`fe` over a sequence).
    Sequence,
    /// Mapping iteration (`fe` over a mapping).
    Mapping,
}

impl Family {
    /// The parameter names this family accepts.
    #[must_use]
    pub const fn allowed(self) -> &'static [&'static str] {
        match self {
            Family::Scalar => &["end", "tostring"],
            Family::Sequence => &["end", "tostring", "exclude-last-end", "final-pair-separator"],
            Family::Mapping => &[
                "end",
                "exclude-last-end",
                "final-pair-separator",
                "dict-format",
                "key-format",
                "value-format",
            ],
        }
    }

    pub(crate) const fn label(self) -> &'static str {
        match self {
            Family::Scalar => "scalar",
            Family::Sequence => "sequence",
            Family::Mapping => "mapping",
        }
    }
}

/// Legacy spelling → canonical name.
const ALIASES: &[(&str, &str)] = &[
    ("dicformat", "dict-format"),
    ("keyformat", "key-format"),
    ("valueformat", "value-format"),
    ("last-concat-string", "final-pair-separator"),
];

fn canonical(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canon)| canon)
}

fn alias_of(canon: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(_, c)| *c == canon)
        .map(|(alias, _)| *alias)
}

/// Builds the full parameter key (`/name:`) for a bare name.
#[must_use]
pub fn key_for(name: &str) -> String {
    format!("{}{}{}", PARAM_PREFIX, name, PARAM_SEPARATOR)
}

/// Extracts the decoded value of the parameter addressed by `key`.
///
/// `key` carries the prefix and separator, e.g. `/end:`. Returns the empty
/// string when the parameter is absent. A quoted value runs to the next
/// quote symbol or, leniently, to the end of the instruction; a bare value
/// runs to the next whitespace or prefix character.
///
/// # Errors
///
/// [`Error::DuplicateParameter`] if the parameter's name (under any
/// spelling) occurs more than once outside quoted spans.
pub fn extract(instruction: &str, key: &str) -> Result<String> {
    if instruction.is_empty() || key.is_empty() {
        return Ok(String::new());
    }

    let name = key
        .trim_start_matches(PARAM_PREFIX)
        .trim_end_matches(PARAM_SEPARATOR);
    let canon = canonical(name);
    if occurrence_count(instruction, canon) > 1 {
        return Err(Error::duplicate(canon));
    }

    if let Some(raw) = locate_raw_value(instruction, key) {
        return Ok(decode_escapes(raw));
    }
    if let Some(alias) = alias_of(canon) {
        if let Some(raw) = locate_raw_value(instruction, &key_for(alias)) {
            return Ok(decode_escapes(raw));
        }
    }
    Ok(String::new())
}

/// Like [`extract`], but substitutes `default` when the value is empty or
/// the parameter is absent.
pub fn extract_or(instruction: &str, key: &str, default: &str) -> Result<String> {
    let value = extract(instruction, key)?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

/// Checks every parameter name in `instruction` against `family`'s
/// allow-list.
///
/// An empty or whitespace-only instruction is trivially valid.
///
/// # Errors
///
/// [`Error::InvalidParameters`] carrying the full set of offending names.
pub fn validate(instruction: &str, family: Family) -> Result<()> {
    if instruction.trim().is_empty() {
        return Ok(());
    }

    let allowed = family.allowed();
    let mut invalid: Vec<String> = Vec::new();
    for name in parameter_names(instruction) {
        if !allowed.contains(&name.as_str()) && !invalid.contains(&name) {
            invalid.push(name);
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_parameters(family.label(), invalid))
    }
}

/// Returns `true` if the parameter `name` (canonical or alias spelling)
/// appears in `instruction` outside quoted spans.
#[must_use]
pub fn has_param(instruction: &str, name: &str) -> bool {
    let canon = canonical(name);
    parameter_names(instruction).iter().any(|n| n == canon)
}

/// Every parameter name present outside quoted spans, canonicalized, one
/// entry per occurrence, in order of appearance.
fn parameter_names(instruction: &str) -> Vec<String> {
    let stripped = strip_quoted_spans(instruction);
    let mut names = Vec::new();
    let mut chars = stripped.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != PARAM_PREFIX {
            continue;
        }
        let mut ident = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                ident.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if !ident.is_empty() {
            names.push(canonical(&ident).to_string());
        }
    }

    names
}

fn occurrence_count(instruction: &str, canon: &str) -> usize {
    parameter_names(instruction)
        .iter()
        .filter(|n| n.as_str() == canon)
        .count()
}

/// Finds the raw (undecoded) value for `key` in the raw instruction text.
fn locate_raw_value<'a>(instruction: &'a str, key: &str) -> Option<&'a str> {
    let start = instruction.find(key)? + key.len();
    let rest = instruction[start..].trim_start();

    let mut chars = rest.chars();
    match chars.next() {
        None => Some(""),
        Some(QUOTE) => {
            let inner = &rest[QUOTE.len_utf8()..];
            match inner.find(QUOTE) {
                Some(end) => Some(&inner[..end]),
                // unterminated quote runs to the end of input
                None => Some(inner),
            }
        }
        Some(_) => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == PARAM_PREFIX)
                .unwrap_or(rest.len());
            Some(&rest[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_value() {
        let value = extract("fe /end:\", \" /tostring:F2", "/end:").unwrap();
        assert_eq!(value, ", ");
    }

    #[test]
    fn extracts_bare_value() {
        let value = extract("fe /exclude-last-end:true /end:x", "/exclude-last-end:").unwrap();
        assert_eq!(value, "true");
    }

    #[test]
    fn bare_value_stops_at_prefix() {
        let value = extract("fe /end:abc/tostring:F2", "/end:").unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn absent_parameter_is_empty() {
        assert_eq!(extract("basic /end:x", "/tostring:").unwrap(), "");
        assert_eq!(
            extract_or("basic", "/end:", "fallback").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn whitespace_after_key_is_skipped() {
        let value = extract("basic /end: \"!\"", "/end:").unwrap();
        assert_eq!(value, "!");
    }

    #[test]
    fn unterminated_quote_is_lenient() {
        let value = extract("basic /end:\"rest of it", "/end:").unwrap();
        assert_eq!(value, "rest of it");
    }

    #[test]
    fn value_is_escape_decoded() {
        let value = extract("basic /end:\"\\u0021\\t\"", "/end:").unwrap();
        assert_eq!(value, "!\t");
    }

    #[test]
    fn duplicate_parameter_rejected() {
        let err = extract("basic /end:\"x\" /end:\"y\"", "/end:").unwrap_err();
        assert_eq!(err, Error::duplicate("end"));
    }

    #[test]
    fn duplicate_inside_quotes_not_counted() {
        let value = extract("basic /end:\"/end:fake\"", "/end:").unwrap();
        assert_eq!(value, "/end:fake");
    }

    #[test]
    fn alias_and_canonical_count_as_one_name() {
        let err = extract(
            "fe /final-pair-separator:a /last-concat-string:b /dict-format:x",
            "/final-pair-separator:",
        )
        .unwrap_err();
        assert_eq!(err, Error::duplicate("final-pair-separator"));
    }

    #[test]
    fn alias_spelling_is_extractable_by_canonical_key() {
        let value = extract("fe /last-concat-string:\" and \"", "/final-pair-separator:").unwrap();
        assert_eq!(value, " and ");
    }

    #[test]
    fn validate_accepts_family_parameters() {
        assert!(validate("fe /end:\",\" /exclude-last-end:true", Family::Sequence).is_ok());
        assert!(validate("", Family::Scalar).is_ok());
        assert!(validate("   ", Family::Mapping).is_ok());
    }

    #[test]
    fn validate_reports_all_offenders() {
        let err = validate("basic /foo:1 /end:x /bar:2", Family::Scalar).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_parameters("scalar", vec!["foo".to_string(), "bar".to_string()])
        );
    }

    #[test]
    fn validate_ignores_quoted_content() {
        assert!(validate("basic /end:\"/bogus:1\"", Family::Scalar).is_ok());
    }

    #[test]
    fn validate_canonicalizes_aliases() {
        assert!(validate("fe /dicformat:\"{0}={1}\"", Family::Mapping).is_ok());
        assert!(validate("fe /dicformat:\"{0}={1}\"", Family::Sequence).is_err());
    }

    #[test]
    fn has_param_sees_only_unquoted_names() {
        assert!(has_param("basic /tostring:D4", "tostring"));
        assert!(!has_param("basic /end:\"/tostring:D4\"", "tostring"));
    }
}
