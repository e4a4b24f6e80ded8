use crate::ast::Tag;
use crate::error::{ParseErrorKind, ParseResult};

use super::{parse_message, Context, Parser, MAX_NESTING_DEPTH};

pub(super) enum TagOutcome {
    Tag(Tag),
    /// The construct did not close validly. The cursor stays where the
    /// failure was detected and the consumed span is re-emitted as literal
    /// text by the caller, so markup-like content in ordinary prose passes
    /// through unparsed instead of failing the whole message.
    Degraded,
}

/// Attempt the tag production at `<`. Only names of the form
/// `ident:ident(:ident)*` are recognized as tags; anything else, and any
/// structural failure before a matching close tag, degrades to literal
/// text. Parse errors inside the tag body still propagate, since a
/// malformed argument is a real error wherever it appears.
pub(super) fn parse_tag(p: &mut Parser, ctx: Context) -> ParseResult<TagOutcome> {
    let start = p.scanner.position();
    if ctx.nesting >= MAX_NESTING_DEPTH {
        return Err(p.error(ParseErrorKind::NestingTooDeep, start));
    }
    p.scanner.advance();

    let name = read_tag_name(p);
    if !is_well_formed_tag_name(name) {
        return Ok(TagOutcome::Degraded);
    }
    let name = name.to_owned();
    p.skip_whitespace();

    if p.scanner.matches_literal("/>") {
        p.scanner.advance_literal("/>");
        return Ok(TagOutcome::Tag(Tag {
            name,
            children: Vec::new(),
            location: p.capture(start),
        }));
    }
    if p.scanner.peek() != Some('>') {
        return Ok(TagOutcome::Degraded);
    }
    p.scanner.advance();

    let children = parse_message(
        p,
        Context {
            nesting: ctx.nesting + 1,
            in_tag: true,
            ..ctx
        },
    )?;

    // children stop at `</`, at the end of input, or at a `}` owned by an
    // enclosing argument; only an exact matching close tag completes the
    // element
    let closing = format!("</{}>", name);
    if p.scanner.matches_literal(&closing) {
        p.scanner.advance_literal(&closing);
        return Ok(TagOutcome::Tag(Tag {
            name,
            children,
            location: p.capture(start),
        }));
    }

    // A different-but-well-formed close tag is swallowed into the degraded
    // span; otherwise it would surface as a stray close tag error for
    // input that is merely unbalanced markup.
    if p.scanner.matches_literal("</") {
        consume_close_tag_if_well_formed(p);
    }
    Ok(TagOutcome::Degraded)
}

/// At a `</` that no enclosing tag is waiting for: a well-formed closing
/// tag here is an error, while anything else is ordinary text handled by
/// the caller.
pub(super) fn reject_stray_closing_tag(p: &mut Parser) -> ParseResult<()> {
    let rest = p.scanner.rest();
    let name = leading_tag_name(&rest[2..]);
    if !is_well_formed_tag_name(name) {
        return Ok(());
    }
    let start = p.scanner.position();
    if rest[2 + name.len()..].starts_with('>') {
        p.scanner.advance_bytes(2 + name.len() + 1);
        return Err(p.error(ParseErrorKind::UnmatchedClosingTag, start));
    }
    p.scanner.advance_bytes(2 + name.len());
    Err(p.error(ParseErrorKind::InvalidTag, start))
}

fn consume_close_tag_if_well_formed(p: &mut Parser) {
    let rest = p.scanner.rest();
    let name = leading_tag_name(&rest[2..]);
    if is_well_formed_tag_name(name) && rest[2 + name.len()..].starts_with('>') {
        p.scanner.advance_bytes(2 + name.len() + 1);
    }
}

fn read_tag_name<'a>(p: &mut Parser<'a>) -> &'a str {
    let name = leading_tag_name(p.scanner.rest());
    p.scanner.advance_bytes(name.len());
    name
}

fn leading_tag_name(text: &str) -> &str {
    let len = text
        .bytes()
        .take_while(|&b| is_tag_name_byte(b))
        .count();
    &text[..len]
}

fn is_tag_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b':')
}

/// Tag names are colon-qualified identifiers like `x:link` or
/// `app:profile:name`, each segment starting with a letter. Unqualified
/// names never form tags, which lets plain HTML-looking text flow through
/// as literal content.
fn is_well_formed_tag_name(name: &str) -> bool {
    let mut segments = 0;
    for segment in name.split(':') {
        if !segment.as_bytes().first().is_some_and(u8::is_ascii_alphabetic) {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    pub fn test_tag_name_grammar() {
        assert!(is_well_formed_tag_name("x:link"));
        assert!(is_well_formed_tag_name("app:profile:name"));
        assert!(is_well_formed_tag_name("x:a-b_c"));
        assert!(!is_well_formed_tag_name("h1"));
        assert!(!is_well_formed_tag_name("b"));
        assert!(!is_well_formed_tag_name("x:"));
        assert!(!is_well_formed_tag_name(":x"));
        assert!(!is_well_formed_tag_name("x:1a"));
        assert!(!is_well_formed_tag_name(""));
    }

    #[test]
    pub fn test_leading_tag_name() {
        assert_eq!(leading_tag_name("x:link>rest"), "x:link");
        assert_eq!(leading_tag_name("a b"), "a");
        assert_eq!(leading_tag_name(">"), "");
    }
}
