//! Instruction Grammar Reference
//!
//! This module documents the instruction language as implemented by this
//! library.
//!
//! # Overview
//!
//! An instruction is a single line of text that tells the formatter how to
//! turn a value into a string. It starts with a directive token and is
//! followed by zero or more parameters:
//!
//! ```text
//! fe /end:", " /exclude-last-end:true
//! ```
//!
//! # Directives
//!
//! | Directive | Target | Description |
//! |-----------|--------|-------------|
//! | `basic` | any value | Renders the value once |
//! | `fe` | sequence or mapping | Renders each element/pair in turn |
//! | `print` | any value | Legacy alias for `basic` |
//! | `foreach` | sequence or mapping | Legacy alias for `fe` |
//!
//! An instruction whose first token begins with `/` is treated as `basic`
//! with the token as its first parameter. Any other leading token is an
//! unknown directive and an error.
//!
//! # Parameters
//!
//! A parameter is written `/name:value`. The value may be:
//!
//! - **quoted** — wrapped in `"` symbols, may contain whitespace and `/`,
//!   runs to the next quote symbol (or leniently to the end of the
//!   instruction if unterminated);
//! - **bare** — runs to the next whitespace or `/`.
//!
//! Whitespace between the `:` and the value is skipped. Extracted values
//! are escape-decoded (see below). A parameter name may appear at most
//! once; occurrences inside quoted values do not count.
//!
//! ## Allow-lists
//!
//! | Parameter | Scalar | Sequence | Mapping |
//! |-----------------------|:------:|:--------:|:-------:|
//! | `end` | yes | yes | yes |
//! | `tostring` | yes | yes | no |
//! | `exclude-last-end` | no | yes | yes |
//! | `final-pair-separator`| no | yes | yes |
//! | `dict-format` | no | no | required |
//! | `key-format` | no | no | yes |
//! | `value-format` | no | no | yes |
//!
//! Any parameter outside the active allow-list fails the instruction; the
//! error names every offender.
//!
//! ## Legacy spellings
//!
//! | Legacy | Canonical |
//! |---------------------|--------------------------|
//! | `dicformat` | `dict-format` |
//! | `keyformat` | `key-format` |
//! | `valueformat` | `value-format` |
//! | `last-concat-string`| `final-pair-separator` |
//!
//! Legacy and canonical spellings are the same parameter everywhere,
//! including duplicate detection.
//!
//! # Escapes
//!
//! Parameter values are decoded in a single left-to-right pass:
//!
//! | Escape | Result |
//! |----------|------------------------------------------|
//! | `\uXXXX` | The code point named by four hex digits |
//! | `\n` | The platform line break |
//! | `\0` `\a` `\b` `\f` `\r` `\t` `\v` | The usual control characters |
//! | `\\` `\'` `\"` | The literal character |
//! | anything else | Copied through verbatim |
//!
//! A malformed `\uXXXX` (short, non-hex, or naming an invalid code point)
//! is also copied through verbatim. Decoded characters are never
//! re-scanned, so text cannot be double-decoded.
//!
//! # Semantics
//!
//! ## Scalar (`basic`)
//!
//! The value is rendered (null renders as the empty string), optionally
//! through the `/tostring:` format spec, then `/end:` is appended. The mere
//! presence of `/tostring:` requires a value with format-spec support
//! (number, date, or big integer); null is exempt.
//!
//! ## Sequence (`fe` over a sequence)
//!
//! Each element is rendered (through `/tostring:` if set) followed by
//! `/end:`. With two or more elements and a non-empty
//! `/final-pair-separator:`, the separator replaces `/end:` after the
//! second-to-last element. `/exclude-last-end:true` drops `/end:` after
//! the last element. A non-empty `/tostring:` is checked against every
//! element before any output is produced.
//!
//! ## Mapping (`fe` over a mapping)
//!
//! Each pair is rendered through the required `/dict-format:` template,
//! with `{0}` replaced by the key and `{1}` by the value; any other brace
//! sequence is copied through verbatim. `/key-format:` and
//! `/value-format:` apply format specs to the key and value renderings.
//! Mapping keys are always strings, and strings take no format spec, so
//! `/key-format:` currently falls back to the key text unchanged; it is
//! accepted for symmetry with `/value-format:`. Trailing behavior matches
//! sequences. Pairs iterate in the mapping's insertion order.
//!
//! # Format specs
//!
//! A spec is a style letter plus optional precision: `D4` (zero-padded
//! decimal), `X`/`x` (hex), `B` (binary), `F2` (fixed-point), `E`
//! (exponential), `P1` (percent). Dates take a strftime pattern instead.
//! Unknown specs fall back to the default rendering.
//!
//! # Examples
//!
//! ```rust
//! use dslfmt::format;
//!
//! let out = format(&vec![1, 2, 3], "fe /end:\", \" /exclude-last-end:true").unwrap();
//! assert_eq!(out, "1, 2, 3");
//!
//! let out = format(&255, "basic /tostring:X4 /end:\"h\"").unwrap();
//! assert_eq!(out, "00FFh");
//! ```
