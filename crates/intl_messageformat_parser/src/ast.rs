use std::fmt;

use crate::skeleton::{DateTimeStyle, NumberStyle};

/// A parsed message: an ordered sequence of elements. Sub-messages inside
/// plural arms and tag children use the same representation, so the tree is
/// uniform at every level.
pub type Message = Vec<MessageElement>;

/// A single point in the source text. `offset` is a byte offset into the
/// UTF-8 input; `line` and `column` are 1-based, with columns counted in
/// codepoints so astral-plane characters occupy a single column.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The half-open span of source text a node or error was produced from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageElement {
    Literal(Literal),
    Argument(Argument),
    Number(NumberArgument),
    Date(DateArgument),
    Time(TimeArgument),
    Select(SelectArgument),
    Plural(PluralArgument),
    Pound(Pound),
    Tag(Tag),
}

impl MessageElement {
    pub fn location(&self) -> Option<Location> {
        match self {
            MessageElement::Literal(literal) => literal.location,
            MessageElement::Argument(argument) => argument.location,
            MessageElement::Number(number) => number.location,
            MessageElement::Date(date) => date.location,
            MessageElement::Time(time) => time.location,
            MessageElement::Select(select) => select.location,
            MessageElement::Plural(plural) => plural.location,
            MessageElement::Pound(pound) => pound.location,
            MessageElement::Tag(tag) => tag.location,
        }
    }
}

/// A run of plain text with all quoting and escapes already resolved.
/// Adjacent runs are always coalesced into a single node while parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    pub value: String,
    pub location: Option<Location>,
}

/// A bare `{name}` placeholder. The name is kept exactly as written and is
/// not resolved against any data source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Argument {
    pub name: String,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberArgument {
    pub name: String,
    pub style: Option<NumberStyle>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateArgument {
    pub name: String,
    pub style: Option<DateTimeStyle>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeArgument {
    pub name: String,
    pub style: Option<DateTimeStyle>,
    pub location: Option<Location>,
}

/// Whether a plural argument selects on cardinal (`plural`) or ordinal
/// (`selectordinal`) rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PluralKind {
    Plural,
    SelectOrdinal,
}

/// One `selector {…}` pair of a plural or select argument. Arm order is
/// preserved from the source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PluralArm {
    pub selector: String,
    pub message: Message,
}

/// A `plural` or `selectordinal` argument. `offset` is always 0 for
/// `selectordinal`, which does not accept one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PluralArgument {
    pub name: String,
    pub kind: PluralKind,
    pub offset: u64,
    pub arms: Vec<PluralArm>,
    pub location: Option<Location>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectArgument {
    pub name: String,
    pub arms: Vec<PluralArm>,
    pub location: Option<Location>,
}

/// The `#` placeholder, substituted with the offset-adjusted value of the
/// nearest enclosing plural or selectordinal at formatting time. Only ever
/// appears inside such a subtree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pound {
    pub location: Option<Location>,
}

/// A well-formed tag element like `<x:link>…</x:link>`. Markup that does
/// not close validly never produces this node; it stays literal text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tag {
    pub name: String,
    pub children: Message,
    pub location: Option<Location>,
}
