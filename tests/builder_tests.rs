//! Builder output, and the guarantee that built instructions parse back to
//! exactly the inputs that produced them.

use dslfmt::{format_value, params, DslMap, Instruction, Value};

#[test]
fn test_scalar_builder_text() {
    let instruction = Instruction::scalar().with_end("!").build();
    assert_eq!(instruction.as_str(), "basic /end:\"!\"");

    let instruction = Instruction::scalar().with_format_spec("F2").with_end(" EUR").build();
    assert_eq!(instruction.as_str(), "basic /tostring:\"F2\" /end:\" EUR\"");
}

#[test]
fn test_sequence_builder_text() {
    let instruction = Instruction::sequence()
        .with_end(", ")
        .with_final_pair_separator(" and ")
        .exclude_last_end(true)
        .build();
    assert_eq!(
        instruction.as_str(),
        "fe /end:\", \" /final-pair-separator:\" and \" /exclude-last-end:\"true\""
    );
}

#[test]
fn test_mapping_builder_text() {
    let instruction = Instruction::mapping()
        .with_dict_format("{0}={1}")
        .with_end("; ")
        .build();
    assert_eq!(
        instruction.as_str(),
        "fe /dict-format:\"{0}={1}\" /end:\"; \""
    );
}

#[test]
fn test_built_instructions_execute() {
    let out = Instruction::scalar().with_end("!").run(&"hey").unwrap();
    assert_eq!(out, "hey!");

    let out = Instruction::sequence()
        .with_end(", ")
        .exclude_last_end(true)
        .run(&vec![1, 2, 3])
        .unwrap();
    assert_eq!(out, "1, 2, 3");

    let mut map = DslMap::new();
    map.insert("a".to_string(), Value::from(1));
    map.insert("b".to_string(), Value::from(2));
    let out = Instruction::mapping()
        .with_dict_format("{0} -> {1}")
        .with_end("\n")
        .exclude_last_end(true)
        .run_with(&Value::Object(map))
        .unwrap();
    assert_eq!(out, "a -> 1\nb -> 2");
}

#[test]
fn test_round_trip_for_plain_values() {
    let instruction = Instruction::sequence()
        .with_end(", ")
        .with_final_pair_separator(" and ")
        .build();

    assert_eq!(
        params::extract(instruction.as_str(), "/end:").unwrap(),
        ", "
    );
    assert_eq!(
        params::extract(instruction.as_str(), "/final-pair-separator:").unwrap(),
        " and "
    );
}

#[test]
fn test_round_trip_for_hostile_values() {
    // values that would break naive quoting must still extract exactly
    let cases = [
        "contains \"quotes\"",
        "back\\slash",
        "both \\\" at once",
        "/end:looks-like-a-parameter",
        "\\u0041 stays literal",
        "trailing backslash \\",
    ];

    for case in cases {
        let instruction = Instruction::scalar().with_end(case).build();
        let extracted = params::extract(instruction.as_str(), "/end:").unwrap();
        assert_eq!(extracted, case, "failed for {case:?}");
    }
}

#[test]
fn test_round_trip_survives_execution() {
    // a built instruction with a quote-bearing end must also format correctly
    let instruction = Instruction::sequence()
        .with_end("\" | \"")
        .exclude_last_end(true)
        .build();
    let value = Value::Array(vec![Value::from("a"), Value::from("b")]);
    let out = format_value(&value, instruction.as_str()).unwrap();
    assert_eq!(out, "a\" | \"b");
}

#[test]
fn test_builder_emits_no_duplicate_or_invalid_parameters() {
    let instruction = Instruction::mapping()
        .with_dict_format("{0}:{1}")
        .with_end(", ")
        .with_key_format("")
        .with_value_format("F2")
        .with_final_pair_separator(" & ")
        .exclude_last_end(true)
        .build();

    let mut map = DslMap::new();
    map.insert("x".to_string(), Value::from(1.5));
    map.insert("y".to_string(), Value::from(2.0));
    let out = format_value(&Value::Object(map), instruction.as_str()).unwrap();
    assert_eq!(out, "x:1.50 & y:2.00");
}

#[test]
fn test_display_and_conversions() {
    let instruction = Instruction::scalar().with_end("!").build();
    assert_eq!(instruction.to_string(), "basic /end:\"!\"");
    assert_eq!(instruction.as_ref(), "basic /end:\"!\"");
    let text: String = instruction.into();
    assert_eq!(text, "basic /end:\"!\"");
}
