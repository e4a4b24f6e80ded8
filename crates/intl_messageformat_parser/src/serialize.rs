//! JSON serialization of the AST, compatible with the FormatJS element
//! shape: every node is an object with a numeric `type` discriminant, and
//! plural/select arms serialize as an `options` map in arm order. This is
//! the format message-extraction tooling consumes.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::ast::{
    Argument, DateArgument, Literal, Location, MessageElement, NumberArgument, PluralArgument,
    PluralArm, PluralKind, Position, Pound, SelectArgument, Tag, TimeArgument,
};
use crate::skeleton::{DateTimeStyle, NumberSkeleton, NumberSkeletonToken, NumberStyle};

/// The order of these types matches the order that FormatJS serializes in.
pub(crate) mod fjs_types {
    pub(crate) static TYPE: &str = "type";
    pub(crate) static VALUE: &str = "value";
    pub(crate) static CHILDREN: &str = "children";
    pub(crate) static OPTIONS: &str = "options";
    pub(crate) static STYLE: &str = "style";
    pub(crate) static OFFSET: &str = "offset";
    pub(crate) static PLURAL_TYPE: &str = "pluralType";
    pub(crate) static LOCATION: &str = "location";
}

/// Enum matching a type of element to its FormatJS type number. The order
/// defines the numbering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ElementType {
    Literal = 0,
    Argument,
    Number,
    Date,
    Time,
    Select,
    Plural,
    Pound,
    Tag,
}

impl Serialize for ElementType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl Serialize for PluralKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match self {
            PluralKind::Plural => "cardinal",
            PluralKind::SelectOrdinal => "ordinal",
        })
    }
}

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut position = serializer.serialize_struct("Position", 3)?;
        position.serialize_field("offset", &self.offset)?;
        position.serialize_field("line", &self.line)?;
        position.serialize_field("column", &self.column)?;
        position.end()
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut location = serializer.serialize_struct("Location", 2)?;
        location.serialize_field("start", &self.start)?;
        location.serialize_field("end", &self.end)?;
        location.end()
    }
}

impl Serialize for MessageElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MessageElement::Literal(literal) => literal.serialize(serializer),
            MessageElement::Argument(argument) => argument.serialize(serializer),
            MessageElement::Number(number) => number.serialize(serializer),
            MessageElement::Date(date) => date.serialize(serializer),
            MessageElement::Time(time) => time.serialize(serializer),
            MessageElement::Select(select) => select.serialize(serializer),
            MessageElement::Plural(plural) => plural.serialize(serializer),
            MessageElement::Pound(pound) => pound.serialize(serializer),
            MessageElement::Tag(tag) => tag.serialize(serializer),
        }
    }
}

fn location_len(location: &Option<Location>) -> usize {
    location.is_some() as usize
}

fn serialize_location<S: Serializer>(
    node: &mut S::SerializeStruct,
    location: &Option<Location>,
) -> Result<(), S::Error> {
    if let Some(location) = location {
        node.serialize_field(fjs_types::LOCATION, location)?;
    }
    Ok(())
}

impl Serialize for Literal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut literal = serializer.serialize_struct("Literal", 2 + location_len(&self.location))?;
        literal.serialize_field(fjs_types::TYPE, &ElementType::Literal)?;
        literal.serialize_field(fjs_types::VALUE, &self.value)?;
        serialize_location::<S>(&mut literal, &self.location)?;
        literal.end()
    }
}

impl Serialize for Argument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut argument =
            serializer.serialize_struct("Argument", 2 + location_len(&self.location))?;
        argument.serialize_field(fjs_types::TYPE, &ElementType::Argument)?;
        argument.serialize_field(fjs_types::VALUE, &self.name)?;
        serialize_location::<S>(&mut argument, &self.location)?;
        argument.end()
    }
}

impl Serialize for NumberStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NumberStyle::Keyword(keyword) => serializer.serialize_str(keyword),
            NumberStyle::Raw(raw) => serializer.serialize_str(raw),
            NumberStyle::Skeleton(skeleton) => skeleton.serialize(serializer),
        }
    }
}

impl Serialize for NumberSkeleton {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut skeleton = serializer.serialize_struct("NumberSkeleton", 1)?;
        skeleton.serialize_field("tokens", &self.tokens)?;
        skeleton.end()
    }
}

impl Serialize for NumberSkeletonToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut token = serializer.serialize_struct("NumberSkeletonToken", 2)?;
        token.serialize_field("stem", &self.stem)?;
        token.serialize_field("options", &self.options)?;
        token.end()
    }
}

impl Serialize for DateTimeStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DateTimeStyle::Predefined(width) => serializer.serialize_str(width.as_str()),
            DateTimeStyle::Pattern(pattern) => serializer.serialize_str(pattern),
            DateTimeStyle::Raw(raw) => serializer.serialize_str(raw),
            DateTimeStyle::Skeleton(skeleton) => {
                let mut style = serializer.serialize_struct("DateTimeSkeleton", 1)?;
                style.serialize_field("skeleton", skeleton)?;
                style.end()
            }
        }
    }
}

fn serialize_simple_argument<S: Serializer, T: Serialize>(
    serializer: S,
    ty: ElementType,
    name: &str,
    style: &Option<T>,
    location: &Option<Location>,
) -> Result<S::Ok, S::Error> {
    let len = 2 + style.is_some() as usize + location_len(location);
    let mut argument = serializer.serialize_struct("SimpleArgument", len)?;
    argument.serialize_field(fjs_types::TYPE, &ty)?;
    argument.serialize_field(fjs_types::VALUE, name)?;
    if let Some(style) = style {
        argument.serialize_field(fjs_types::STYLE, style)?;
    }
    serialize_location::<S>(&mut argument, location)?;
    argument.end()
}

impl Serialize for NumberArgument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_simple_argument(
            serializer,
            ElementType::Number,
            &self.name,
            &self.style,
            &self.location,
        )
    }
}

impl Serialize for DateArgument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_simple_argument(
            serializer,
            ElementType::Date,
            &self.name,
            &self.style,
            &self.location,
        )
    }
}

impl Serialize for TimeArgument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_simple_argument(
            serializer,
            ElementType::Time,
            &self.name,
            &self.style,
            &self.location,
        )
    }
}

/// Arms serialize as a map from selector to `{"value": […]}` so the JSON
/// matches the FormatJS `options` shape while preserving arm order.
struct SerializeArms<'a>(&'a Vec<PluralArm>);

impl Serialize for SerializeArms<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut arms = serializer.serialize_map(Some(self.0.len()))?;
        for arm in self.0 {
            arms.serialize_entry(&arm.selector, &SerializeArmValue(arm))?;
        }
        arms.end()
    }
}

struct SerializeArmValue<'a>(&'a PluralArm);

impl Serialize for SerializeArmValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut arm = serializer.serialize_struct("PluralArm", 1)?;
        arm.serialize_field(fjs_types::VALUE, &self.0.message)?;
        arm.end()
    }
}

impl Serialize for SelectArgument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut select =
            serializer.serialize_struct("SelectArgument", 3 + location_len(&self.location))?;
        select.serialize_field(fjs_types::TYPE, &ElementType::Select)?;
        select.serialize_field(fjs_types::VALUE, &self.name)?;
        select.serialize_field(fjs_types::OPTIONS, &SerializeArms(&self.arms))?;
        serialize_location::<S>(&mut select, &self.location)?;
        select.end()
    }
}

impl Serialize for PluralArgument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut plural =
            serializer.serialize_struct("PluralArgument", 5 + location_len(&self.location))?;
        plural.serialize_field(fjs_types::TYPE, &ElementType::Plural)?;
        plural.serialize_field(fjs_types::VALUE, &self.name)?;
        plural.serialize_field(fjs_types::OPTIONS, &SerializeArms(&self.arms))?;
        plural.serialize_field(fjs_types::OFFSET, &self.offset)?;
        plural.serialize_field(fjs_types::PLURAL_TYPE, &self.kind)?;
        serialize_location::<S>(&mut plural, &self.location)?;
        plural.end()
    }
}

impl Serialize for Pound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pound = serializer.serialize_struct("Pound", 1 + location_len(&self.location))?;
        pound.serialize_field(fjs_types::TYPE, &ElementType::Pound)?;
        serialize_location::<S>(&mut pound, &self.location)?;
        pound.end()
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tag = serializer.serialize_struct("Tag", 3 + location_len(&self.location))?;
        tag.serialize_field(fjs_types::TYPE, &ElementType::Tag)?;
        tag.serialize_field(fjs_types::VALUE, &self.name)?;
        tag.serialize_field(fjs_types::CHILDREN, &self.children)?;
        serialize_location::<S>(&mut tag, &self.location)?;
        tag.end()
    }
}
