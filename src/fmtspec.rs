//! Format-spec rendering for the `/tostring:`, `/key-format:` and
//! `/value-format:` parameters.
//!
//! A spec is a one-letter style followed by an optional precision, e.g.
//! `D4`, `x`, `F2`, `P1`. Numbers, big integers and dates are the
//! formattable kinds; dates take a strftime pattern instead of a style
//! letter. Rendering is lenient: an unrecognized spec falls back to the
//! value's default rendering rather than erroring, matching the engine's
//! other leniency points.

use crate::value::{Number, Value};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::fmt::Write;

/// Renders `value` under `spec`.
///
/// An empty spec, a non-formattable value, or an unknown style all produce
/// the default rendering.
#[must_use]
pub fn apply(value: &Value, spec: &str) -> String {
    if spec.is_empty() {
        return value.render();
    }
    match value {
        Value::Number(Number::Integer(n)) => format_integer(*n, spec),
        Value::Number(Number::Float(f)) => format_float(*f, spec),
        Value::BigInt(n) => format_bigint(n, spec),
        Value::Date(dt) => format_date(dt, spec),
        other => other.render(),
    }
}

/// Splits a spec into its style letter and optional precision digits.
fn split_spec(spec: &str) -> Option<(char, Option<usize>)> {
    let mut chars = spec.chars();
    let style = chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() {
        return Some((style, None));
    }
    rest.parse::<usize>().ok().map(|p| (style, Some(p)))
}

fn format_integer(n: i64, spec: &str) -> String {
    let Some((style, precision)) = split_spec(spec) else {
        return n.to_string();
    };
    match style {
        'D' | 'd' => {
            let digits = precision.unwrap_or(0);
            if n < 0 {
                format!("-{:0width$}", n.unsigned_abs(), width = digits)
            } else {
                format!("{n:0digits$}")
            }
        }
        // hex and binary render the two's-complement bit pattern
        'X' => pad_radix(format!("{:X}", n as u64), precision),
        'x' => pad_radix(format!("{:x}", n as u64), precision),
        'B' | 'b' => pad_radix(format!("{:b}", n as u64), precision),
        'F' | 'f' => format!("{:.prec$}", n as f64, prec = precision.unwrap_or(2)),
        'E' | 'e' => format_exponential(n as f64, precision.unwrap_or(6), style == 'E'),
        _ => n.to_string(),
    }
}

fn format_float(f: f64, spec: &str) -> String {
    let Some((style, precision)) = split_spec(spec) else {
        return Number::Float(f).to_string();
    };
    match style {
        'F' | 'f' => format!("{:.prec$}", f, prec = precision.unwrap_or(2)),
        'E' | 'e' => format_exponential(f, precision.unwrap_or(6), style == 'E'),
        'P' | 'p' => format!("{:.prec$}%", f * 100.0, prec = precision.unwrap_or(2)),
        'D' | 'd' => {
            let digits = precision.unwrap_or(0);
            let n = f as i64;
            if n < 0 {
                format!("-{:0width$}", n.unsigned_abs(), width = digits)
            } else {
                format!("{n:0digits$}")
            }
        }
        _ => Number::Float(f).to_string(),
    }
}

fn format_bigint(n: &BigInt, spec: &str) -> String {
    let Some((style, precision)) = split_spec(spec) else {
        return n.to_string();
    };
    match style {
        'D' | 'd' => {
            let digits = precision.unwrap_or(0);
            let body = n.magnitude().to_string();
            let padded = if body.len() < digits {
                format!("{}{}", "0".repeat(digits - body.len()), body)
            } else {
                body
            };
            if n.sign() == num_bigint::Sign::Minus {
                format!("-{padded}")
            } else {
                padded
            }
        }
        'X' => pad_radix(format!("{:X}", n), precision),
        'x' => pad_radix(format!("{:x}", n), precision),
        'B' | 'b' => pad_radix(format!("{:b}", n), precision),
        _ => n.to_string(),
    }
}

fn format_date(dt: &DateTime<Utc>, spec: &str) -> String {
    // chrono's DelayedFormat panics on write for bad patterns only when
    // unwrapped; routing through write! surfaces the Err instead.
    let mut out = String::new();
    match write!(out, "{}", dt.format(spec)) {
        Ok(()) => out,
        Err(_) => dt.to_rfc3339(),
    }
}

fn pad_radix(digits: String, precision: Option<usize>) -> String {
    let width = precision.unwrap_or(0);
    if digits.len() < width {
        format!("{}{}", "0".repeat(width - digits.len()), digits)
    } else {
        digits
    }
}

fn format_exponential(f: f64, precision: usize, upper: bool) -> String {
    let rendered = format!("{:.prec$e}", f, prec = precision);
    // normalize 1.5e3 to 1.5E+003-style exponents
    let (mantissa, exponent) = match rendered.split_once('e') {
        Some(parts) => parts,
        None => return rendered,
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exponent),
    };
    let marker = if upper { 'E' } else { 'e' };
    format!("{mantissa}{marker}{sign}{digits:0>3}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decimal_padding() {
        assert_eq!(apply(&Value::from(42), "D4"), "0042");
        assert_eq!(apply(&Value::from(-42), "D4"), "-0042");
        assert_eq!(apply(&Value::from(42), "D"), "42");
    }

    #[test]
    fn hex_and_binary() {
        assert_eq!(apply(&Value::from(255), "X"), "FF");
        assert_eq!(apply(&Value::from(255), "x4"), "00ff");
        assert_eq!(apply(&Value::from(5), "B"), "101");
        // negative hex is the two's-complement pattern
        assert_eq!(apply(&Value::from(-1), "X"), "FFFFFFFFFFFFFFFF");
    }

    #[test]
    fn fixed_point() {
        assert_eq!(apply(&Value::from(3.14159), "F2"), "3.14");
        assert_eq!(apply(&Value::from(3.14159), "F"), "3.14");
        assert_eq!(apply(&Value::from(2), "F1"), "2.0");
    }

    #[test]
    fn percent() {
        assert_eq!(apply(&Value::from(0.1234), "P1"), "12.3%");
        assert_eq!(apply(&Value::from(0.5), "P0"), "50%");
    }

    #[test]
    fn exponential() {
        assert_eq!(apply(&Value::from(1500.0), "E2"), "1.50E+003");
        assert_eq!(apply(&Value::from(0.0015), "e2"), "1.50e-003");
    }

    #[test]
    fn bigint_styles() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            apply(&Value::BigInt(big.clone()), "D"),
            "123456789012345678901234567890"
        );
        let neg: BigInt = "-255".parse().unwrap();
        assert_eq!(apply(&Value::BigInt(neg), "D5"), "-00255");
    }

    #[test]
    fn date_strftime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        assert_eq!(apply(&Value::Date(dt), "%Y-%m-%d"), "2024-03-15");
        assert_eq!(apply(&Value::Date(dt), "%H:%M"), "10:30");
    }

    #[test]
    fn unknown_spec_falls_back_to_default() {
        assert_eq!(apply(&Value::from(42), "Q9"), "42");
        assert_eq!(apply(&Value::from("text"), "D4"), "text");
        assert_eq!(apply(&Value::from(42), ""), "42");
    }
}
