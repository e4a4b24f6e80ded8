use crate::ast::Position;

use super::{mark_pending, Parser};

/// Characters that can open a quoted run and that the bulk scan must stop
/// on. `#` and `}` are only sometimes grammar, but quoting treats the full
/// set uniformly so authors never have to reason about context.
fn is_quotable(ch: char) -> bool {
    matches!(ch, '{' | '}' | '#' | '<')
}

/// Consume one step of literal content into `pending`: an apostrophe
/// sequence, a backslash escape, or a bulk run of plain text up to the
/// next potentially-significant character.
pub(super) fn consume_literal_chunk(
    p: &mut Parser,
    pending: &mut String,
    pending_start: &mut Option<Position>,
) {
    mark_pending(p, pending_start);
    let Some(ch) = p.scanner.peek() else {
        return;
    };
    match ch {
        '\'' => consume_apostrophe(p, pending),
        '\\' => consume_backslash_escape(p, pending),
        _ => {
            let rest = p.scanner.rest();
            match next_special_byte(rest) {
                // the current character is special but inert in this
                // context (a stray `}`, `#` outside a plural, `<`), so it
                // passes through as text
                Some(0) => {
                    pending.push(ch);
                    p.scanner.advance();
                }
                Some(index) => {
                    pending.push_str(&rest[..index]);
                    p.scanner.advance_bytes(index);
                }
                None => {
                    pending.push_str(rest);
                    p.scanner.advance_bytes(rest.len());
                }
            }
        }
    }
}

/// All grammar characters are ASCII, so a byte search never lands inside
/// a multi-byte codepoint.
fn next_special_byte(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let braces = memchr::memchr3(b'{', b'}', b'#', bytes);
    let quotes = memchr::memchr3(b'<', b'\'', b'\\', bytes);
    match (braces, quotes) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// ICU apostrophe rules: `''` is a literal apostrophe; an apostrophe
/// immediately before a syntax character opens a quoted run in which
/// everything up to the next lone apostrophe is plain text (an
/// unterminated run quotes through the end of input); any other
/// apostrophe is itself plain text.
fn consume_apostrophe(p: &mut Parser, pending: &mut String) {
    match p.scanner.peek_second() {
        Some('\'') => {
            pending.push('\'');
            p.scanner.advance();
            p.scanner.advance();
        }
        Some(next) if is_quotable(next) => {
            p.scanner.advance();
            loop {
                match p.scanner.advance() {
                    Some('\'') => {
                        if p.scanner.peek() == Some('\'') {
                            pending.push('\'');
                            p.scanner.advance();
                        } else {
                            break;
                        }
                    }
                    Some(ch) => pending.push(ch),
                    None => break,
                }
            }
        }
        _ => {
            pending.push('\'');
            p.scanner.advance();
        }
    }
}

/// Backslash escapes for syntax characters and `\uXXXX` / `\U+XXXXXX`
/// codepoint escapes. Anything unrecognized or truncated passes through
/// as written rather than failing, matching long-standing message tooling
/// behavior.
fn consume_backslash_escape(p: &mut Parser, pending: &mut String) {
    p.scanner.advance();
    match p.scanner.peek() {
        Some(ch @ ('{' | '}' | '#' | '\\')) => {
            pending.push(ch);
            p.scanner.advance();
        }
        Some('u') => {
            let rest = p.scanner.rest();
            match parse_hex_escape(rest.get(1..5)) {
                Some(ch) => {
                    pending.push(ch);
                    p.scanner.advance_bytes(5);
                }
                None => pending.push('\\'),
            }
        }
        Some('U') => {
            let rest = p.scanner.rest();
            match rest.strip_prefix("U+") {
                Some(digits) => {
                    let len = digits
                        .bytes()
                        .take(6)
                        .take_while(u8::is_ascii_hexdigit)
                        .count();
                    match parse_hex_escape(digits.get(..len)) {
                        Some(ch) => {
                            pending.push(ch);
                            p.scanner.advance_bytes(2 + len);
                        }
                        None => pending.push('\\'),
                    }
                }
                None => pending.push('\\'),
            }
        }
        _ => pending.push('\\'),
    }
}

fn parse_hex_escape(digits: Option<&str>) -> Option<char> {
    let digits = digits?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    char::from_u32(u32::from_str_radix(digits, 16).ok()?)
}
