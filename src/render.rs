//! Directive dispatch and the three formatting algorithms.
//!
//! An instruction's leading token selects the algorithm: `basic` (or the
//! legacy `print`) formats a single value, `fe` (or `foreach`) iterates a
//! sequence or mapping. An instruction that opens directly with a parameter
//! is treated as implicit `basic`.

use crate::error::{Error, Result};
use crate::fmtspec;
use crate::params::{self, Family};
use crate::syntax::PARAM_PREFIX;
use crate::value::Value;
use crate::DslMap;

/// Applies `instruction` to `value` and returns the formatted text.
pub(crate) fn apply(value: &Value, instruction: &str) -> Result<String> {
    let trimmed = instruction.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInstruction);
    }

    // the directive token is everything before the first parameter
    let token = match trimmed.find(PARAM_PREFIX) {
        Some(pos) => trimmed[..pos].trim(),
        None => trimmed,
    };
    match token {
        "fe" | "foreach" => format_iteration(value, trimmed),
        "basic" | "print" => format_scalar(value, trimmed),
        // opening directly with a parameter implies the scalar directive
        "" => format_scalar(value, trimmed),
        _ => Err(Error::unknown_directive(token)),
    }
}

fn format_iteration(value: &Value, instruction: &str) -> Result<String> {
    match value {
        Value::Object(map) => format_mapping(map, instruction),
        Value::Array(items) => format_sequence(items, instruction),
        other => Err(Error::not_enumerable(other.kind())),
    }
}

fn format_scalar(value: &Value, instruction: &str) -> Result<String> {
    let end = params::extract(instruction, "/end:")?;
    let spec = params::extract(instruction, "/tostring:")?;

    // presence of the parameter demands format-spec support even when its
    // value is empty; null is exempt and renders as the empty string. This
    // check runs before allow-list validation.
    if params::has_param(instruction, "tostring")
        && !value.supports_format_spec()
        && !value.is_null()
    {
        return Err(Error::unformattable(value.kind()));
    }
    params::validate(instruction, Family::Scalar)?;

    let body = if spec.is_empty() {
        value.render()
    } else {
        fmtspec::apply(value, &spec)
    };
    Ok(format!("{body}{end}"))
}

fn format_sequence(items: &[Value], instruction: &str) -> Result<String> {
    let end = params::extract(instruction, "/end:")?;
    let spec = params::extract(instruction, "/tostring:")?;
    let exclude_last = parse_flag(&params::extract(instruction, "/exclude-last-end:")?);
    let final_sep = params::extract(instruction, "/final-pair-separator:")?;

    // pre-flight before producing any output and before allow-list
    // validation: a spec must be applicable to every element or none of
    // them are rendered
    if !spec.is_empty() {
        if let Some(bad) = items
            .iter()
            .find(|v| !v.supports_format_spec() && !v.is_null())
        {
            return Err(Error::unformattable(bad.kind()));
        }
    }
    params::validate(instruction, Family::Sequence)?;

    let count = items.len();
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let body = if spec.is_empty() {
            item.render()
        } else {
            fmtspec::apply(item, &spec)
        };
        out.push_str(&body);
        push_terminator(&mut out, i, count, &end, exclude_last, &final_sep);
    }
    Ok(out)
}

fn format_mapping(map: &DslMap, instruction: &str) -> Result<String> {
    let end = params::extract(instruction, "/end:")?;
    let exclude_last = parse_flag(&params::extract(instruction, "/exclude-last-end:")?);
    let final_sep = params::extract(instruction, "/final-pair-separator:")?;
    let dict_format = params::extract(instruction, "/dict-format:")?;
    let key_format = params::extract(instruction, "/key-format:")?;
    let value_format = params::extract(instruction, "/value-format:")?;
    params::validate(instruction, Family::Mapping)?;

    if dict_format.is_empty() {
        return Err(Error::MissingRequiredParameter {
            name: "dict-format",
        });
    }

    let count = map.len();
    let mut out = String::new();
    for (i, (key, value)) in map.iter().enumerate() {
        let key_text = if key_format.is_empty() {
            key.clone()
        } else {
            fmtspec::apply(&Value::String(key.clone()), &key_format)
        };
        let value_text = if value_format.is_empty() {
            value.render()
        } else {
            fmtspec::apply(value, &value_format)
        };
        out.push_str(&apply_pair_format(&dict_format, &key_text, &value_text));
        push_terminator(&mut out, i, count, &end, exclude_last, &final_sep);
    }
    Ok(out)
}

/// Appends the terminator due after element `i` of `count`.
///
/// The second-to-last element takes the final-pair separator (when one is
/// set) in place of `end`; the last element takes `end` unless suppressed.
fn push_terminator(
    out: &mut String,
    i: usize,
    count: usize,
    end: &str,
    exclude_last: bool,
    final_sep: &str,
) {
    if count >= 2 && i == count - 2 && !final_sep.is_empty() {
        out.push_str(final_sep);
    } else if i == count - 1 {
        if !exclude_last {
            out.push_str(end);
        }
    } else {
        out.push_str(end);
    }
}

/// Substitutes `{0}` with `key` and `{1}` with `value` in `template`.
///
/// A single-pass scan: any brace sequence other than those two exact
/// placeholders is copied through verbatim.
fn apply_pair_format(template: &str, key: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + key.len() + value.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(stripped) = tail.strip_prefix("{0}") {
            out.push_str(key);
            rest = stripped;
        } else if let Some(stripped) = tail.strip_prefix("{1}") {
            out.push_str(value);
            rest = stripped;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Parses a boolean flag value. Anything other than `true` (case-insensitive)
/// is `false`.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
