//! Fluent builders that assemble instruction strings.
//!
//! Each builder emits a directive token followed by quoted parameters. Every
//! parameter value is escaped on the way in ([`crate::syntax::escape_value`])
//! so that extracting it back out of the finished instruction returns exactly
//! the text that was supplied, quotes and backslashes included.
//!
//! ## Examples
//!
//! ```rust
//! use dslfmt::Instruction;
//!
//! let instruction = Instruction::sequence()
//!     .with_end(", ")
//!     .exclude_last_end(true)
//!     .build();
//! assert_eq!(
//!     instruction.as_str(),
//!     "fe /end:\", \" /exclude-last-end:\"true\""
//! );
//!
//! let out = Instruction::sequence()
//!     .with_end(", ")
//!     .exclude_last_end(true)
//!     .run(&vec![1, 2, 3])
//!     .unwrap();
//! assert_eq!(out, "1, 2, 3");
//! ```

use crate::error::Result;
use crate::syntax::escape_value;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// A finished instruction string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction(String);

impl Instruction {
    /// Starts a builder for single-value formatting.
    #[must_use]
    pub fn scalar() -> ScalarBuilder {
        ScalarBuilder::new()
    }

    /// Starts a builder for sequence iteration.
    #[must_use]
    pub fn sequence() -> SequenceBuilder {
        SequenceBuilder::new()
    }

    /// Starts a builder for mapping iteration.
    #[must_use]
    pub fn mapping() -> MappingBuilder {
        MappingBuilder::new()
    }

    /// The instruction text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Applies this instruction to an already-converted [`Value`].
    pub fn apply(&self, value: &Value) -> Result<String> {
        crate::format_value(value, &self.0)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Instruction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Instruction> for String {
    fn from(instruction: Instruction) -> Self {
        instruction.0
    }
}

fn push_param(buffer: &mut String, name: &str, value: &str) {
    buffer.push_str(" /");
    buffer.push_str(name);
    buffer.push_str(":\"");
    buffer.push_str(&escape_value(value));
    buffer.push('"');
}

/// Builds `basic` instructions.
#[derive(Debug, Clone)]
pub struct ScalarBuilder {
    buffer: String,
}

impl ScalarBuilder {
    #[must_use]
    pub fn new() -> Self {
        ScalarBuilder {
            buffer: String::from("basic"),
        }
    }

    /// Sets the text appended after the rendered value (`/end:`).
    #[must_use]
    pub fn with_end(mut self, text: &str) -> Self {
        push_param(&mut self.buffer, "end", text);
        self
    }

    /// Sets the format spec applied to the value (`/tostring:`).
    #[must_use]
    pub fn with_format_spec(mut self, spec: &str) -> Self {
        push_param(&mut self.buffer, "tostring", spec);
        self
    }

    /// Finishes the instruction.
    #[must_use]
    pub fn build(self) -> Instruction {
        Instruction(self.buffer)
    }

    /// Builds and applies the instruction to any serializable value.
    pub fn run<T: Serialize>(self, value: &T) -> Result<String> {
        let instruction = self.build();
        crate::format(value, instruction.as_str())
    }

    /// Builds and applies the instruction to an existing [`Value`].
    pub fn run_with(self, value: &Value) -> Result<String> {
        self.build().apply(value)
    }
}

impl Default for ScalarBuilder {
    fn default() -> Self {
        ScalarBuilder::new()
    }
}

/// Builds `fe` instructions for sequences.
#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    buffer: String,
}

impl SequenceBuilder {
    #[must_use]
    pub fn new() -> Self {
        SequenceBuilder {
            buffer: String::from("fe"),
        }
    }

    /// Sets the text appended after each element (`/end:`).
    #[must_use]
    pub fn with_end(mut self, text: &str) -> Self {
        push_param(&mut self.buffer, "end", text);
        self
    }

    /// Sets the format spec applied to every element (`/tostring:`).
    #[must_use]
    pub fn with_format_spec(mut self, spec: &str) -> Self {
        push_param(&mut self.buffer, "tostring", spec);
        self
    }

    /// Suppresses `/end:` after the final element when `flag` is true.
    #[must_use]
    pub fn exclude_last_end(mut self, flag: bool) -> Self {
        if flag {
            push_param(&mut self.buffer, "exclude-last-end", "true");
        }
        self
    }

    /// Sets the separator placed before the last element
    /// (`/final-pair-separator:`).
    #[must_use]
    pub fn with_final_pair_separator(mut self, text: &str) -> Self {
        push_param(&mut self.buffer, "final-pair-separator", text);
        self
    }

    /// Finishes the instruction.
    #[must_use]
    pub fn build(self) -> Instruction {
        Instruction(self.buffer)
    }

    /// Builds and applies the instruction to any serializable value.
    pub fn run<T: Serialize>(self, value: &T) -> Result<String> {
        let instruction = self.build();
        crate::format(value, instruction.as_str())
    }

    /// Builds and applies the instruction to an existing [`Value`].
    pub fn run_with(self, value: &Value) -> Result<String> {
        self.build().apply(value)
    }
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        SequenceBuilder::new()
    }
}

/// Builds `fe` instructions for mappings.
#[derive(Debug, Clone)]
pub struct MappingBuilder {
    buffer: String,
}

impl MappingBuilder {
    #[must_use]
    pub fn new() -> Self {
        MappingBuilder {
            buffer: String::from("fe"),
        }
    }

    /// Sets the pair template with `{0}`/`{1}` placeholders (`/dict-format:`).
    ///
    /// Mapping instructions reject application without this parameter.
    #[must_use]
    pub fn with_dict_format(mut self, template: &str) -> Self {
        push_param(&mut self.buffer, "dict-format", template);
        self
    }

    /// Sets the text appended after each pair (`/end:`).
    #[must_use]
    pub fn with_end(mut self, text: &str) -> Self {
        push_param(&mut self.buffer, "end", text);
        self
    }

    /// Sets the format spec applied to keys (`/key-format:`).
    #[must_use]
    pub fn with_key_format(mut self, spec: &str) -> Self {
        push_param(&mut self.buffer, "key-format", spec);
        self
    }

    /// Sets the format spec applied to values (`/value-format:`).
    #[must_use]
    pub fn with_value_format(mut self, spec: &str) -> Self {
        push_param(&mut self.buffer, "value-format", spec);
        self
    }

    /// Suppresses `/end:` after the final pair when `flag` is true.
    #[must_use]
    pub fn exclude_last_end(mut self, flag: bool) -> Self {
        if flag {
            push_param(&mut self.buffer, "exclude-last-end", "true");
        }
        self
    }

    /// Sets the separator placed before the last pair
    /// (`/final-pair-separator:`).
    #[must_use]
    pub fn with_final_pair_separator(mut self, text: &str) -> Self {
        push_param(&mut self.buffer, "final-pair-separator", text);
        self
    }

    /// Finishes the instruction.
    #[must_use]
    pub fn build(self) -> Instruction {
        Instruction(self.buffer)
    }

    /// Builds and applies the instruction to any serializable value.
    pub fn run<T: Serialize>(self, value: &T) -> Result<String> {
        let instruction = self.build();
        crate::format(value, instruction.as_str())
    }

    /// Builds and applies the instruction to an existing [`Value`].
    pub fn run_with(self, value: &Value) -> Result<String> {
        self.build().apply(value)
    }
}

impl Default for MappingBuilder {
    fn default() -> Self {
        MappingBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn scalar_builder_emits_expected_text() {
        let instruction = Instruction::scalar()
            .with_end("!")
            .with_format_spec("D4")
            .build();
        assert_eq!(instruction.as_str(), "basic /end:\"!\" /tostring:\"D4\"");
    }

    #[test]
    fn sequence_builder_emits_expected_text() {
        let instruction = Instruction::sequence()
            .with_end(", ")
            .exclude_last_end(true)
            .with_final_pair_separator(" and ")
            .build();
        assert_eq!(
            instruction.as_str(),
            "fe /end:\", \" /exclude-last-end:\"true\" /final-pair-separator:\" and \""
        );
    }

    #[test]
    fn exclude_last_end_false_is_omitted() {
        let instruction = Instruction::sequence().with_end(",").exclude_last_end(false).build();
        assert_eq!(instruction.as_str(), "fe /end:\",\"");
    }

    #[test]
    fn parameters_round_trip_exactly() {
        for tricky in ["plain", "wi\"th quote", "back\\slash", "/end:fake", "\\u0041", "a\nb"] {
            let instruction = Instruction::scalar().with_end(tricky).build();
            let extracted = params::extract(instruction.as_str(), "/end:").unwrap();
            assert_eq!(extracted, tricky);
        }
    }

    #[test]
    fn mapping_builder_round_trips_template() {
        let instruction = Instruction::mapping()
            .with_dict_format("\"{0}\" => {1}")
            .with_end("; ")
            .build();
        let extracted = params::extract(instruction.as_str(), "/dict-format:").unwrap();
        assert_eq!(extracted, "\"{0}\" => {1}");
    }

    #[test]
    fn run_applies_built_instruction() {
        let out = Instruction::sequence()
            .with_end(", ")
            .exclude_last_end(true)
            .run(&vec!["a", "b", "c"])
            .unwrap();
        assert_eq!(out, "a, b, c");
    }

    #[test]
    fn run_with_accepts_values_directly() {
        let value = Value::Array(vec![Value::from(1), Value::from(2)]);
        let out = Instruction::sequence().with_end("|").run_with(&value).unwrap();
        assert_eq!(out, "1|2|");
    }
}
