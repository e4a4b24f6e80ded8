use thiserror::Error;

use crate::ast::Location;

/// Failure produced when a message cannot be parsed. Parsing aborts at the
/// first grammar violation, so a message yields at most one error, and the
/// error always carries the span of the offending source text regardless of
/// whether location capture was requested for the AST.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Location,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Location) -> Self {
        Self { kind, span }
    }

    /// Returns the type name of this error
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("argument must have a name")]
    EmptyArgument,
    #[error("malformed argument")]
    MalformedArgument,
    #[error("expected an argument type after the comma")]
    ExpectArgumentType,
    #[error("unknown argument type")]
    InvalidArgumentType,
    #[error("expected `}}` to close the argument")]
    ExpectArgumentClosingBrace,
    #[error("expected a value after `offset:`")]
    ExpectPluralArgumentOffsetValue,
    #[error("`offset:` must be followed by a whole number")]
    InvalidPluralArgumentOffsetValue,
    #[error("expected a selector in the plural argument")]
    ExpectPluralArgumentSelector,
    #[error("expected a selector in the select argument")]
    ExpectSelectArgumentSelector,
    #[error("plural selector must be followed by a `{{…}}` message")]
    ExpectPluralArgumentSelectorFragment,
    #[error("select selector must be followed by a `{{…}}` message")]
    ExpectSelectArgumentSelectorFragment,
    #[error("plural and select arguments must end with an `other` clause")]
    MissingOtherClause,
    #[error("selector appears more than once in the plural argument")]
    DuplicatePluralSelector,
    #[error("selector appears more than once in the select argument")]
    DuplicateSelectSelector,
    #[error("closing tag has no matching opening tag")]
    UnmatchedClosingTag,
    #[error("closing tag is malformed")]
    InvalidTag,
    #[error("message constructs are nested too deeply")]
    NestingTooDeep,
}

impl ParseErrorKind {
    /// Returns the type name of this error kind
    pub fn name(&self) -> &'static str {
        match self {
            ParseErrorKind::EndOfInput => "EndOfInput",
            ParseErrorKind::EmptyArgument => "EmptyArgument",
            ParseErrorKind::MalformedArgument => "MalformedArgument",
            ParseErrorKind::ExpectArgumentType => "ExpectArgumentType",
            ParseErrorKind::InvalidArgumentType => "InvalidArgumentType",
            ParseErrorKind::ExpectArgumentClosingBrace => "ExpectArgumentClosingBrace",
            ParseErrorKind::ExpectPluralArgumentOffsetValue => "ExpectPluralArgumentOffsetValue",
            ParseErrorKind::InvalidPluralArgumentOffsetValue => "InvalidPluralArgumentOffsetValue",
            ParseErrorKind::ExpectPluralArgumentSelector => "ExpectPluralArgumentSelector",
            ParseErrorKind::ExpectSelectArgumentSelector => "ExpectSelectArgumentSelector",
            ParseErrorKind::ExpectPluralArgumentSelectorFragment => {
                "ExpectPluralArgumentSelectorFragment"
            }
            ParseErrorKind::ExpectSelectArgumentSelectorFragment => {
                "ExpectSelectArgumentSelectorFragment"
            }
            ParseErrorKind::MissingOtherClause => "MissingOtherClause",
            ParseErrorKind::DuplicatePluralSelector => "DuplicatePluralSelector",
            ParseErrorKind::DuplicateSelectSelector => "DuplicateSelectSelector",
            ParseErrorKind::UnmatchedClosingTag => "UnmatchedClosingTag",
            ParseErrorKind::InvalidTag => "InvalidTag",
            ParseErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
