use crate::ast::{Location, Message, MessageElement, Position, Pound};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::scanner::Scanner;

mod argument;
mod literal;
mod tag;

macro_rules! trace_event {
    ($($arg:tt)*) => {{
        #[cfg(feature = "debug-tracing")]
        eprintln!($($arg)*);
    }};
}

/// Maximum nesting depth of argument and tag constructs before parsing
/// fails with `NestingTooDeep` instead of exhausting the call stack.
const MAX_NESTING_DEPTH: usize = 128;

#[derive(Clone, Debug)]
pub struct ParserOptions {
    /// Attach source spans to every node of the produced AST. Errors carry
    /// spans regardless of this setting.
    pub capture_location: bool,
    /// Require every plural/select/selectordinal to end with an `other` arm.
    pub requires_other_clause: bool,
    /// Parse number/date/time styles into structured skeletons instead of
    /// keeping the raw style text.
    pub should_parse_skeleton: bool,
    /// Treat `<…>` as plain text rather than attempting tag elements.
    pub ignore_tag: bool,
    /// Recorded for consumers of the AST; the grammar itself is
    /// locale-independent.
    pub locale: Option<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            capture_location: false,
            requires_other_clause: true,
            should_parse_skeleton: false,
            ignore_tag: false,
            locale: None,
        }
    }
}

/// Recursive-descent parser over a single message. Each `parse` call is
/// independent: the parser holds no state beyond its cursor, so values it
/// produces are plain owned trees.
pub(crate) struct Parser<'a> {
    scanner: Scanner<'a>,
    options: &'a ParserOptions,
}

/// Parse context threaded through each recursive production. The meaning
/// of `#`, `}`, and `</` depends on where in the grammar we are; carrying
/// that explicitly keeps the productions free of ambient state.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct Context {
    /// Depth of argument/tag constructs entered so far.
    pub nesting: usize,
    /// Inside `{…}`, an unquoted `}` terminates the current message.
    pub in_argument: bool,
    /// Inside a plural/selectordinal sub-message, `#` is the pound
    /// placeholder of the nearest enclosing plural at any depth.
    pub in_plural: bool,
    /// Inside a tag body, `</` terminates the current message.
    pub in_tag: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, options: &'a ParserOptions) -> Parser<'a> {
        Self {
            scanner: Scanner::new(source),
            options,
        }
    }

    pub fn parse(&mut self) -> ParseResult<Message> {
        trace_event!("parsing message ({} bytes)", self.scanner.rest().len());
        let message = parse_message(self, Context::default())?;
        // the root production only stops at the end of input
        debug_assert!(self.scanner.is_eof());
        Ok(message)
    }

    pub(super) fn skip_whitespace(&mut self) {
        while self.scanner.peek().is_some_and(char::is_whitespace) {
            self.scanner.advance();
        }
    }

    /// The span from `start` to the current cursor position.
    pub(super) fn span_from(&self, start: Position) -> Location {
        Location::new(start, self.scanner.position())
    }

    /// A span for a node, present only when location capture is requested.
    pub(super) fn capture(&self, start: Position) -> Option<Location> {
        self.options
            .capture_location
            .then(|| self.span_from(start))
    }

    pub(super) fn error(&self, kind: ParseErrorKind, start: Position) -> ParseError {
        ParseError::new(kind, self.span_from(start))
    }

    pub(super) fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        self.error(kind, self.scanner.position())
    }
}

pub(super) fn parse_message(p: &mut Parser, ctx: Context) -> ParseResult<Message> {
    let mut elements: Message = Vec::new();
    // Adjacent literal text accumulates here so quoting, escapes, degraded
    // tags, and plain runs all coalesce into a single node.
    let mut pending = String::new();
    let mut pending_start: Option<Position> = None;

    loop {
        let Some(ch) = p.scanner.peek() else {
            break;
        };
        match ch {
            '}' if ctx.in_argument => break,
            '{' => {
                flush_pending(p, &mut elements, &mut pending, &mut pending_start);
                let element = argument::parse_argument(p, ctx)?;
                elements.push(element);
            }
            '#' if ctx.in_plural => {
                flush_pending(p, &mut elements, &mut pending, &mut pending_start);
                let start = p.scanner.position();
                p.scanner.advance();
                elements.push(MessageElement::Pound(Pound {
                    location: p.capture(start),
                }));
            }
            '<' if !p.options.ignore_tag && p.scanner.peek_second() == Some('/') => {
                if ctx.in_tag {
                    break;
                }
                tag::reject_stray_closing_tag(p)?;
                // not a recognizable closing tag; the `<` is ordinary text
                mark_pending(p, &mut pending_start);
                pending.push('<');
                p.scanner.advance();
            }
            '<' if !p.options.ignore_tag
                && p.scanner.peek_second().is_some_and(|c| c.is_ascii_alphabetic()) =>
            {
                let tag_start = p.scanner.position();
                match tag::parse_tag(p, ctx)? {
                    tag::TagOutcome::Tag(parsed) => {
                        flush_pending_to(p, &mut elements, &mut pending, &mut pending_start, tag_start);
                        elements.push(MessageElement::Tag(parsed));
                    }
                    tag::TagOutcome::Degraded => {
                        trace_event!("tag at {} degraded to literal", tag_start);
                        if pending_start.is_none() {
                            pending_start = Some(tag_start);
                        }
                        pending.push_str(p.scanner.slice_from(&tag_start));
                    }
                }
            }
            _ => literal::consume_literal_chunk(p, &mut pending, &mut pending_start),
        }
    }

    flush_pending(p, &mut elements, &mut pending, &mut pending_start);
    Ok(elements)
}

pub(super) fn mark_pending(p: &Parser, pending_start: &mut Option<Position>) {
    if pending_start.is_none() {
        *pending_start = Some(p.scanner.position());
    }
}

fn flush_pending(
    p: &Parser,
    elements: &mut Message,
    pending: &mut String,
    pending_start: &mut Option<Position>,
) {
    let end = p.scanner.position();
    flush_pending_to(p, elements, pending, pending_start, end);
}

fn flush_pending_to(
    p: &Parser,
    elements: &mut Message,
    pending: &mut String,
    pending_start: &mut Option<Position>,
    end: Position,
) {
    if pending.is_empty() {
        *pending_start = None;
        return;
    }
    let location = match (p.options.capture_location, pending_start.take()) {
        (true, Some(start)) => Some(Location::new(start, end)),
        _ => None,
    };
    elements.push(MessageElement::Literal(crate::ast::Literal {
        value: std::mem::take(pending),
        location,
    }));
}
