//! Serialization of an AST back to ICU MessageFormat source. The output is
//! structurally equivalent to the input the tree was parsed from: parsing
//! the printed string yields the same tree again, though incidental
//! spelling like whitespace inside argument syntax or the particular
//! escape used for a character is normalized.

use crate::ast::{
    Argument, DateArgument, Literal, Message, MessageElement, NumberArgument, PluralArgument,
    PluralArm, PluralKind, Pound, SelectArgument, Tag, TimeArgument,
};
use crate::skeleton::{DateTimeStyle, NumberSkeleton, NumberStyle};

/// Print a message AST as ICU MessageFormat source text. Pure and
/// infallible: printing only reads the tree and appends to a string.
pub fn print_message(message: &Message) -> String {
    let mut out = String::new();
    print_elements(&mut out, message, false);
    out
}

/// Printing context: inside a plural body `#` is grammar and literal
/// pound signs need quoting.
fn print_elements(out: &mut String, elements: &[MessageElement], in_plural: bool) {
    for element in elements {
        print_element(out, element, in_plural);
    }
}

fn print_element(out: &mut String, element: &MessageElement, in_plural: bool) {
    match element {
        MessageElement::Literal(literal) => print_literal(out, literal, in_plural),
        MessageElement::Argument(argument) => print_argument(out, argument),
        MessageElement::Number(number) => print_number(out, number),
        MessageElement::Date(date) => print_date(out, date),
        MessageElement::Time(time) => print_time(out, time),
        MessageElement::Select(select) => print_select(out, select, in_plural),
        MessageElement::Plural(plural) => print_plural(out, plural),
        MessageElement::Pound(pound) => print_pound(out, pound),
        MessageElement::Tag(tag) => print_tag(out, tag, in_plural),
    }
}

/// Re-escape literal text. Apostrophes are doubled, and the span from the
/// first to the last syntax character is wrapped in a single quoted run,
/// which parses back to exactly the original value.
fn print_literal(out: &mut String, literal: &Literal, in_plural: bool) {
    let is_syntax =
        |ch: char| matches!(ch, '{' | '}' | '<') || (in_plural && ch == '#');

    let doubled;
    let text = if literal.value.contains('\'') {
        doubled = literal.value.replace('\'', "''");
        doubled.as_str()
    } else {
        literal.value.as_str()
    };

    let first = text.char_indices().find(|(_, ch)| is_syntax(*ch));
    let last = text.char_indices().rev().find(|(_, ch)| is_syntax(*ch));
    match (first, last) {
        (Some((first, _)), Some((last, _))) => {
            out.push_str(&text[..first]);
            out.push('\'');
            out.push_str(&text[first..=last]);
            out.push('\'');
            out.push_str(&text[last + 1..]);
        }
        _ => out.push_str(text),
    }
}

fn print_argument(out: &mut String, argument: &Argument) {
    out.push('{');
    out.push_str(&argument.name);
    out.push('}');
}

fn print_number(out: &mut String, number: &NumberArgument) {
    out.push('{');
    out.push_str(&number.name);
    out.push_str(", number");
    if let Some(style) = &number.style {
        out.push_str(", ");
        print_number_style(out, style);
    }
    out.push('}');
}

fn print_number_style(out: &mut String, style: &NumberStyle) {
    match style {
        NumberStyle::Keyword(keyword) => out.push_str(keyword),
        NumberStyle::Raw(raw) => out.push_str(raw),
        NumberStyle::Skeleton(skeleton) => print_number_skeleton(out, skeleton),
    }
}

/// Skeletons always print with the `::` marker so a single-token skeleton
/// like `::integer` cannot be re-read as the bare keyword style.
fn print_number_skeleton(out: &mut String, skeleton: &NumberSkeleton) {
    out.push_str("::");
    for (index, token) in skeleton.tokens.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        out.push_str(&token.stem);
        for option in &token.options {
            out.push('/');
            out.push_str(option);
        }
    }
}

fn print_date(out: &mut String, date: &DateArgument) {
    print_date_time(out, &date.name, "date", date.style.as_ref());
}

fn print_time(out: &mut String, time: &TimeArgument) {
    print_date_time(out, &time.name, "time", time.style.as_ref());
}

fn print_date_time(out: &mut String, name: &str, keyword: &str, style: Option<&DateTimeStyle>) {
    out.push('{');
    out.push_str(name);
    out.push_str(", ");
    out.push_str(keyword);
    if let Some(style) = style {
        out.push_str(", ");
        match style {
            DateTimeStyle::Predefined(width) => out.push_str(width.as_str()),
            DateTimeStyle::Skeleton(skeleton) => {
                out.push_str("::");
                out.push_str(skeleton);
            }
            DateTimeStyle::Pattern(pattern) => out.push_str(pattern),
            DateTimeStyle::Raw(raw) => out.push_str(raw),
        }
    }
    out.push('}');
}

fn print_plural(out: &mut String, plural: &PluralArgument) {
    debug_assert!(
        plural.kind == PluralKind::Plural || plural.offset == 0,
        "selectordinal arguments cannot carry an offset"
    );
    out.push('{');
    out.push_str(&plural.name);
    out.push_str(match plural.kind {
        PluralKind::Plural => ", plural,",
        PluralKind::SelectOrdinal => ", selectordinal,",
    });
    if plural.offset != 0 {
        out.push_str(" offset:");
        out.push_str(&plural.offset.to_string());
    }
    print_arms(out, &plural.arms, true);
    out.push('}');
}

fn print_select(out: &mut String, select: &SelectArgument, in_plural: bool) {
    out.push('{');
    out.push_str(&select.name);
    out.push_str(", select,");
    print_arms(out, &select.arms, in_plural);
    out.push('}');
}

fn print_arms(out: &mut String, arms: &[PluralArm], in_plural: bool) {
    for arm in arms {
        out.push(' ');
        out.push_str(&arm.selector);
        out.push_str(" {");
        print_elements(out, &arm.message, in_plural);
        out.push('}');
    }
}

fn print_pound(out: &mut String, _pound: &Pound) {
    out.push('#');
}

fn print_tag(out: &mut String, tag: &Tag, in_plural: bool) {
    if tag.children.is_empty() {
        out.push('<');
        out.push_str(&tag.name);
        out.push_str("/>");
        return;
    }
    out.push('<');
    out.push_str(&tag.name);
    out.push('>');
    print_elements(out, &tag.children, in_plural);
    out.push_str("</");
    out.push_str(&tag.name);
    out.push('>');
}
