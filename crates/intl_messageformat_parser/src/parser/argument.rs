use crate::ast::{
    Argument, DateArgument, MessageElement, NumberArgument, PluralArgument, PluralArm, PluralKind,
    Position, SelectArgument, TimeArgument,
};
use crate::error::{ParseErrorKind, ParseResult};
use crate::skeleton::{self, DateTimeStyle, NumberStyle};

use super::{parse_message, Context, Parser, MAX_NESTING_DEPTH};

/// Parse a `{…}` placeholder: either a bare argument or one of the typed
/// forms dispatched on the keyword after the first comma.
pub(super) fn parse_argument(p: &mut Parser, ctx: Context) -> ParseResult<MessageElement> {
    let start = p.scanner.position();
    if ctx.nesting >= MAX_NESTING_DEPTH {
        return Err(p.error(ParseErrorKind::NestingTooDeep, start));
    }
    p.scanner.advance();
    p.skip_whitespace();

    match p.scanner.peek() {
        None => return Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, start)),
        Some('}') => {
            p.scanner.advance();
            return Err(p.error(ParseErrorKind::EmptyArgument, start));
        }
        Some(_) => {}
    }

    let name = read_identifier(p).to_owned();
    if name.is_empty() {
        return Err(p.error(ParseErrorKind::MalformedArgument, start));
    }
    p.skip_whitespace();

    match p.scanner.advance() {
        Some('}') => Ok(MessageElement::Argument(Argument {
            name,
            location: p.capture(start),
        })),
        Some(',') => {
            p.skip_whitespace();
            parse_argument_options(p, ctx, name, start)
        }
        Some(_) => Err(p.error(ParseErrorKind::MalformedArgument, start)),
        None => Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, start)),
    }
}

fn parse_argument_options(
    p: &mut Parser,
    ctx: Context,
    name: String,
    start: Position,
) -> ParseResult<MessageElement> {
    let type_start = p.scanner.position();
    let arg_type = read_identifier(p);
    if arg_type.is_empty() {
        return Err(p.error(ParseErrorKind::ExpectArgumentType, type_start));
    }

    match arg_type {
        "number" | "date" | "time" => {
            p.skip_whitespace();
            parse_simple_argument(p, name, arg_type, start)
        }
        "plural" => {
            p.skip_whitespace();
            parse_plural_argument(p, ctx, name, PluralKind::Plural, start)
        }
        "selectordinal" => {
            p.skip_whitespace();
            parse_plural_argument(p, ctx, name, PluralKind::SelectOrdinal, start)
        }
        "select" => {
            p.skip_whitespace();
            parse_select_argument(p, ctx, name, start)
        }
        _ => Err(p.error(ParseErrorKind::InvalidArgumentType, type_start)),
    }
}

/// `number`, `date`, and `time` share one shape: an optional style
/// substring after a second comma, read through to the matching brace.
fn parse_simple_argument(
    p: &mut Parser,
    name: String,
    arg_type: &str,
    start: Position,
) -> ParseResult<MessageElement> {
    let style = match p.scanner.peek() {
        Some(',') => {
            p.scanner.advance();
            p.skip_whitespace();
            let text = read_style_text(p, start)?;
            (!text.is_empty()).then_some(text)
        }
        _ => None,
    };
    match p.scanner.advance() {
        Some('}') => {}
        _ => return Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, start)),
    }

    let location = p.capture(start);
    let parse_skeleton = p.options.should_parse_skeleton;
    Ok(match arg_type {
        "number" => MessageElement::Number(NumberArgument {
            name,
            style: style.map(|text| {
                if parse_skeleton {
                    skeleton::parse_number_style(&text)
                } else {
                    NumberStyle::Raw(text)
                }
            }),
            location,
        }),
        "date" => MessageElement::Date(DateArgument {
            name,
            style: style.map(|text| resolve_date_time_style(text, parse_skeleton)),
            location,
        }),
        _ => MessageElement::Time(TimeArgument {
            name,
            style: style.map(|text| resolve_date_time_style(text, parse_skeleton)),
            location,
        }),
    })
}

fn resolve_date_time_style(text: String, parse_skeleton: bool) -> DateTimeStyle {
    if parse_skeleton {
        skeleton::parse_date_time_style(&text)
    } else {
        DateTimeStyle::Raw(text)
    }
}

/// Read the raw style substring of a number/date/time argument, stopping
/// at the brace that closes the argument. Nested braces are tracked since
/// a style can legally contain `{…}` groups, and apostrophe-quoted spans
/// (as in `h 'o''clock'`) may contain anything.
fn read_style_text(p: &mut Parser, arg_start: Position) -> ParseResult<String> {
    let start = p.scanner.position();
    let mut depth = 0usize;
    loop {
        match p.scanner.peek() {
            None => return Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, arg_start)),
            Some('\'') => {
                p.scanner.advance();
                loop {
                    match p.scanner.advance() {
                        Some('\'') => {
                            if p.scanner.peek() == Some('\'') {
                                p.scanner.advance();
                            } else {
                                break;
                            }
                        }
                        Some(_) => {}
                        None => {
                            return Err(
                                p.error(ParseErrorKind::ExpectArgumentClosingBrace, arg_start)
                            )
                        }
                    }
                }
            }
            Some('{') => {
                depth += 1;
                p.scanner.advance();
            }
            Some('}') => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                p.scanner.advance();
            }
            Some(_) => {
                p.scanner.advance();
            }
        }
    }
    Ok(p.scanner.slice_from(&start).trim().to_owned())
}

fn parse_plural_argument(
    p: &mut Parser,
    ctx: Context,
    name: String,
    kind: PluralKind,
    start: Position,
) -> ParseResult<MessageElement> {
    expect_comma(p, ParseErrorKind::ExpectPluralArgumentSelector, start)?;
    p.skip_whitespace();

    let mut offset = 0;
    // `offset:` is only part of the cardinal plural grammar; inside a
    // selectordinal the word would be read as a selector and fail below.
    if kind == PluralKind::Plural && p.scanner.matches_literal("offset:") {
        let offset_start = p.scanner.position();
        p.scanner.advance_literal("offset:");
        p.skip_whitespace();
        offset = read_plural_offset(p, offset_start)?;
        p.skip_whitespace();
    }

    let arms = parse_arm_list(p, ctx, SelectorMode::Plural, start)?;
    match p.scanner.advance() {
        Some('}') => {}
        _ => return Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, start)),
    }
    require_other_clause(p, &arms, start)?;

    Ok(MessageElement::Plural(PluralArgument {
        name,
        kind,
        offset,
        arms,
        location: p.capture(start),
    }))
}

fn parse_select_argument(
    p: &mut Parser,
    ctx: Context,
    name: String,
    start: Position,
) -> ParseResult<MessageElement> {
    expect_comma(p, ParseErrorKind::ExpectSelectArgumentSelector, start)?;
    p.skip_whitespace();

    let arms = parse_arm_list(p, ctx, SelectorMode::Select, start)?;
    match p.scanner.advance() {
        Some('}') => {}
        _ => return Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, start)),
    }
    require_other_clause(p, &arms, start)?;

    Ok(MessageElement::Select(SelectArgument {
        name,
        arms,
        location: p.capture(start),
    }))
}

fn expect_comma(p: &mut Parser, kind: ParseErrorKind, start: Position) -> ParseResult<()> {
    match p.scanner.advance() {
        Some(',') => Ok(()),
        Some(_) => Err(p.error(kind, start)),
        None => Err(p.error_here(ParseErrorKind::EndOfInput)),
    }
}

fn read_plural_offset(p: &mut Parser, offset_start: Position) -> ParseResult<u64> {
    let digits_start = p.scanner.position();
    while p
        .scanner
        .peek()
        .is_some_and(|ch| ch.is_ascii_digit() || ch == '-')
    {
        p.scanner.advance();
    }
    let digits = p.scanner.slice_from(&digits_start);
    if digits.is_empty() {
        return Err(p.error(ParseErrorKind::ExpectPluralArgumentOffsetValue, offset_start));
    }
    digits
        .parse()
        .map_err(|_| p.error(ParseErrorKind::InvalidPluralArgumentOffsetValue, offset_start))
}

/// Enforced only when the option asks for it: the `other` clause must be
/// present and must be the final arm.
fn require_other_clause(p: &Parser, arms: &[PluralArm], start: Position) -> ParseResult<()> {
    if p.options.requires_other_clause
        && arms.last().map(|arm| arm.selector.as_str()) != Some("other")
    {
        return Err(p.error(ParseErrorKind::MissingOtherClause, start));
    }
    Ok(())
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum SelectorMode {
    Plural,
    Select,
}

impl SelectorMode {
    fn expect_selector(&self) -> ParseErrorKind {
        match self {
            SelectorMode::Plural => ParseErrorKind::ExpectPluralArgumentSelector,
            SelectorMode::Select => ParseErrorKind::ExpectSelectArgumentSelector,
        }
    }

    fn expect_fragment(&self) -> ParseErrorKind {
        match self {
            SelectorMode::Plural => ParseErrorKind::ExpectPluralArgumentSelectorFragment,
            SelectorMode::Select => ParseErrorKind::ExpectSelectArgumentSelectorFragment,
        }
    }

    fn duplicate(&self) -> ParseErrorKind {
        match self {
            SelectorMode::Plural => ParseErrorKind::DuplicatePluralSelector,
            SelectorMode::Select => ParseErrorKind::DuplicateSelectSelector,
        }
    }
}

/// The shared `selector {subMessage}` loop of plural, selectordinal, and
/// select arguments. Arm order is preserved; duplicates fail immediately.
fn parse_arm_list(
    p: &mut Parser,
    ctx: Context,
    mode: SelectorMode,
    arg_start: Position,
) -> ParseResult<Vec<PluralArm>> {
    let mut arms: Vec<PluralArm> = Vec::new();
    loop {
        if matches!(p.scanner.peek(), Some('}') | None) {
            break;
        }
        let selector_start = p.scanner.position();
        let selector = read_selector(p, mode);
        if selector.is_empty() {
            return Err(p.error(mode.expect_selector(), selector_start));
        }
        if arms.iter().any(|arm| arm.selector == selector) {
            return Err(p.error(mode.duplicate(), selector_start));
        }
        let selector = selector.to_owned();
        p.skip_whitespace();

        match p.scanner.peek() {
            Some('{') => {}
            _ => return Err(p.error(mode.expect_fragment(), selector_start)),
        }
        p.scanner.advance();
        let message = parse_message(
            p,
            Context {
                nesting: ctx.nesting + 1,
                in_argument: true,
                in_plural: mode == SelectorMode::Plural || ctx.in_plural,
                in_tag: false,
            },
        )?;
        match p.scanner.advance() {
            Some('}') => {}
            _ => return Err(p.error(ParseErrorKind::ExpectArgumentClosingBrace, selector_start)),
        }

        arms.push(PluralArm { selector, message });
        p.skip_whitespace();
    }

    if arms.is_empty() {
        return Err(p.error(mode.expect_selector(), arg_start));
    }
    Ok(arms)
}

/// A selector is either an exact match like `=4` or a bare identifier.
fn read_selector<'a>(p: &mut Parser<'a>, mode: SelectorMode) -> &'a str {
    if mode == SelectorMode::Plural && p.scanner.peek() == Some('=') {
        let start = p.scanner.position();
        p.scanner.advance();
        while p.scanner.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            p.scanner.advance();
        }
        let selector = p.scanner.slice_from(&start);
        // a lone `=` is not a selector
        if selector.len() > 1 {
            selector
        } else {
            ""
        }
    } else {
        read_identifier(p)
    }
}

/// Identifiers (argument names, type keywords, selectors) run until
/// whitespace or a character the surrounding grammar owns.
pub(super) fn read_identifier<'a>(p: &mut Parser<'a>) -> &'a str {
    let start = p.scanner.position();
    while let Some(ch) = p.scanner.peek() {
        if ch.is_whitespace() || is_grammar_char(ch) {
            break;
        }
        p.scanner.advance();
    }
    p.scanner.slice_from(&start)
}

fn is_grammar_char(ch: char) -> bool {
    matches!(
        ch,
        '{' | '}' | ',' | '#' | '<' | '>' | '\'' | '\\' | '=' | ':' | '/'
    )
}
