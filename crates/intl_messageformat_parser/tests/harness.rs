use intl_messageformat_parser::{parse, print_message, Message, ParseErrorKind, ParserOptions};

pub fn parse_default(input: &str) -> Message {
    parse(input, &ParserOptions::default()).expect("message should parse")
}

#[allow(unused)]
pub fn parse_with(input: &str, options: &ParserOptions) -> Message {
    parse(input, options).expect("message should parse")
}

/// Test that the input fails to parse with the given error kind.
#[allow(unused)]
pub fn run_error_test(input: &str, expected: ParseErrorKind) {
    let error = parse(input, &ParserOptions::default()).expect_err("message should fail to parse");
    assert_eq!(expected, error.kind, "for input: {input}");
}

/// Test that the input is parsed and printed back as the given string.
#[allow(unused)]
pub fn run_print_test(input: &str, expected: &str) {
    let ast = parse_default(input);
    assert_eq!(expected, print_message(&ast), "for input: {input}");
}

/// Test that printing and re-parsing reproduces the same tree.
#[allow(unused)]
pub fn run_roundtrip_test(input: &str) {
    let ast = parse_default(input);
    let printed = print_message(&ast);
    assert_eq!(
        ast,
        parse_default(&printed),
        "printed form of {input:?} was: {printed:?}"
    );
}

/// Same as `run_roundtrip_test` under non-default parse options.
#[allow(unused)]
pub fn run_roundtrip_test_with(input: &str, options: &ParserOptions) {
    let ast = parse_with(input, options);
    let printed = print_message(&ast);
    assert_eq!(
        ast,
        parse_with(&printed, options),
        "printed form of {input:?} was: {printed:?}"
    );
}

/// Test that the input is parsed and serialized to the given JSON.
#[allow(unused)]
pub fn run_json_test(input: &str, expected: &str) {
    let ast = parse_default(input);
    let json = serde_json::to_string(&ast).expect("AST should serialize");
    assert_eq!(expected, json, "for input: {input}");
}
