//! A parser and printer for ICU MessageFormat messages.
//!
//! Messages are parsed into a plain, owned AST that callers are free to
//! inspect, serialize, or print back to source form. Parsing and printing
//! are pure functions with no shared state, so they are safely callable
//! from any number of threads at once.

pub use ast::{
    Argument, DateArgument, Literal, Location, Message, MessageElement, NumberArgument,
    PluralArgument, PluralArm, PluralKind, Position, Pound, SelectArgument, Tag, TimeArgument,
};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::ParserOptions;
pub use printer::print_message;
pub use serialize::ElementType;
pub use skeleton::{
    DateTimeStyle, DateTimeWidth, NumberSkeleton, NumberSkeletonToken, NumberStyle,
};

mod ast;
mod error;
mod parser;
mod printer;
mod scanner;
mod serialize;
mod skeleton;

/// Parse an ICU MessageFormat string into its AST, or fail with a
/// structured error describing the first grammar violation.
pub fn parse(message: &str, options: &ParserOptions) -> ParseResult<Message> {
    parser::Parser::new(message, options).parse()
}
