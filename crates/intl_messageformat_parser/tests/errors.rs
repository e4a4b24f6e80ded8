mod harness;

use intl_messageformat_parser::{parse, ParseErrorKind, ParserOptions};
use test_case::test_case;

use crate::harness::run_error_test;

#[test_case("{", ParseErrorKind::ExpectArgumentClosingBrace ; "open brace only")]
#[test_case("{name", ParseErrorKind::ExpectArgumentClosingBrace ; "unterminated argument")]
#[test_case("{n, number, percent", ParseErrorKind::ExpectArgumentClosingBrace ; "unterminated style")]
#[test_case("{}", ParseErrorKind::EmptyArgument ; "empty argument")]
#[test_case("{  }", ParseErrorKind::EmptyArgument ; "blank argument")]
#[test_case("{,}", ParseErrorKind::MalformedArgument ; "missing name")]
#[test_case("{a b}", ParseErrorKind::MalformedArgument ; "space in name")]
#[test_case("{a,}", ParseErrorKind::ExpectArgumentType ; "missing type")]
#[test_case("{a, bogus}", ParseErrorKind::InvalidArgumentType ; "unknown type")]
#[test_case("{a, bogus, extra}", ParseErrorKind::InvalidArgumentType ; "unknown type with style")]
#[test_case("{n, plural}", ParseErrorKind::ExpectPluralArgumentSelector ; "plural without selectors")]
#[test_case("{n, plural,}", ParseErrorKind::ExpectPluralArgumentSelector ; "plural with empty body")]
#[test_case("{n, plural", ParseErrorKind::EndOfInput ; "plural cut off")]
#[test_case("{n, plural, one}", ParseErrorKind::ExpectPluralArgumentSelectorFragment ; "selector without message")]
#[test_case("{n, plural, =x{a} other{b}}", ParseErrorKind::ExpectPluralArgumentSelector ; "exact selector without digits")]
#[test_case("{n, plural, one {a} one {b} other{c}}", ParseErrorKind::DuplicatePluralSelector ; "duplicate plural selector")]
#[test_case("{n, plural, one {a}}", ParseErrorKind::MissingOtherClause ; "plural missing other")]
#[test_case("{n, plural, other {a} one {b}}", ParseErrorKind::MissingOtherClause ; "other not last")]
#[test_case("{n, plural, offset: one {a} other{b}}", ParseErrorKind::ExpectPluralArgumentOffsetValue ; "offset without value")]
#[test_case("{n, plural, offset:-1 one {a} other{b}}", ParseErrorKind::InvalidPluralArgumentOffsetValue ; "negative offset")]
#[test_case("{n, selectordinal, offset:1 one {a} other{b}}", ParseErrorKind::ExpectPluralArgumentSelectorFragment ; "selectordinal rejects offset")]
#[test_case("{g, select}", ParseErrorKind::ExpectSelectArgumentSelector ; "select without selectors")]
#[test_case("{g, select, =0 {a} other {b}}", ParseErrorKind::ExpectSelectArgumentSelector ; "select rejects exact selectors")]
#[test_case("{g, select, female}", ParseErrorKind::ExpectSelectArgumentSelectorFragment ; "select selector without message")]
#[test_case("{g, select, a {x} a {y} other {z}}", ParseErrorKind::DuplicateSelectSelector ; "duplicate select selector")]
#[test_case("{g, select, female {woman}}", ParseErrorKind::MissingOtherClause ; "select missing other")]
#[test_case("</x:a>", ParseErrorKind::UnmatchedClosingTag ; "stray closing tag")]
#[test_case("</x:a", ParseErrorKind::InvalidTag ; "malformed closing tag")]
#[test_case("{n, plural, other{</x:a>}}", ParseErrorKind::UnmatchedClosingTag ; "stray closing tag inside arm")]
fn error_kinds(input: &str, expected: ParseErrorKind) {
    run_error_test(input, expected);
}

#[test]
fn deep_nesting_fails_instead_of_overflowing() {
    let input = "{n, plural, other{".repeat(200);
    let error = parse(&input, &ParserOptions::default()).expect_err("nesting should be bounded");
    assert_eq!(error.kind, ParseErrorKind::NestingTooDeep);
}

#[test]
fn first_error_wins() {
    // both the argument and the plural are malformed; the leftmost one is
    // reported
    let error = parse("{a b} {n, plural}", &ParserOptions::default())
        .expect_err("message should fail to parse");
    assert_eq!(error.kind, ParseErrorKind::MalformedArgument);
    assert_eq!(error.span.start.offset, 0);
}

#[test]
fn error_display_includes_position() {
    let error = parse("{a, bogus}", &ParserOptions::default())
        .expect_err("unknown argument type should fail");
    assert_eq!(error.name(), "InvalidArgumentType");
    assert_eq!(error.to_string(), "unknown argument type at 1:5-1:10");
}
