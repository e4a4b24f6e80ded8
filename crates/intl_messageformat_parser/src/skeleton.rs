//! Parsing for the style portion of `number`, `date`, and `time` arguments.
//!
//! Style parsing is structural, not semantic: the skeleton vocabulary is
//! open-ended, so unrecognized stems are carried through as opaque tokens
//! instead of being rejected, and it is up to the formatting runtime to
//! decide what they mean.

/// The resolved style of a `number` argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NumberStyle {
    /// One of the short named styles: `integer`, `percent`, or `currency`.
    Keyword(String),
    /// A parsed number skeleton, e.g. `::currency/USD .00`.
    Skeleton(NumberSkeleton),
    /// The style substring exactly as written, used when skeleton parsing
    /// is disabled.
    Raw(String),
}

/// A sequence of number skeleton tokens, in source order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberSkeleton {
    pub tokens: Vec<NumberSkeletonToken>,
}

/// A single skeleton token: a stem plus any `/`-separated options, like
/// `currency/USD` or `.00`. Common stems include `percent`, `currency`,
/// `measure-unit`, `compact-short`, `compact-long`, `scale`, `group-off`,
/// and the fraction-digit forms like `.00`, but the set is open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumberSkeletonToken {
    pub stem: String,
    pub options: Vec<String>,
}

/// The resolved style of a `date` or `time` argument.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DateTimeStyle {
    /// One of the predefined widths: `short`, `medium`, `long`, `full`.
    Predefined(DateTimeWidth),
    /// A raw ICU date-time skeleton, written with a leading `::` in the
    /// source and stored here without it.
    Skeleton(String),
    /// A custom date-time pattern, passed through verbatim.
    Pattern(String),
    /// The style substring exactly as written, used when skeleton parsing
    /// is disabled.
    Raw(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DateTimeWidth {
    Short,
    Medium,
    Long,
    Full,
}

impl DateTimeWidth {
    pub fn from_keyword(keyword: &str) -> Option<DateTimeWidth> {
        match keyword {
            "short" => Some(DateTimeWidth::Short),
            "medium" => Some(DateTimeWidth::Medium),
            "long" => Some(DateTimeWidth::Long),
            "full" => Some(DateTimeWidth::Full),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateTimeWidth::Short => "short",
            DateTimeWidth::Medium => "medium",
            DateTimeWidth::Long => "long",
            DateTimeWidth::Full => "full",
        }
    }
}

pub fn parse_number_style(text: &str) -> NumberStyle {
    match text {
        "integer" | "percent" | "currency" => NumberStyle::Keyword(text.into()),
        _ => {
            let body = text.strip_prefix("::").map_or(text, str::trim_start);
            NumberStyle::Skeleton(parse_number_skeleton(body))
        }
    }
}

pub fn parse_number_skeleton(text: &str) -> NumberSkeleton {
    let tokens = text
        .split_ascii_whitespace()
        .map(|token| {
            let mut parts = token.split('/');
            // split always yields at least one part
            let stem = parts.next().unwrap_or_default();
            NumberSkeletonToken {
                stem: stem.into(),
                options: parts.map(String::from).collect(),
            }
        })
        .collect();
    NumberSkeleton { tokens }
}

pub fn parse_date_time_style(text: &str) -> DateTimeStyle {
    if let Some(skeleton) = text.strip_prefix("::") {
        return DateTimeStyle::Skeleton(skeleton.trim_start().into());
    }
    match DateTimeWidth::from_keyword(text) {
        Some(width) => DateTimeStyle::Predefined(width),
        None => DateTimeStyle::Pattern(text.into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn stems(skeleton: &NumberSkeleton) -> Vec<&str> {
        skeleton.tokens.iter().map(|t| t.stem.as_str()).collect()
    }

    #[test]
    pub fn test_number_keywords() {
        assert_eq!(
            parse_number_style("percent"),
            NumberStyle::Keyword("percent".into())
        );
        assert_eq!(
            parse_number_style("integer"),
            NumberStyle::Keyword("integer".into())
        );
    }

    #[test]
    pub fn test_number_skeleton_tokens() {
        let NumberStyle::Skeleton(skeleton) = parse_number_style("::currency/USD .00") else {
            panic!("expected a skeleton style");
        };
        assert_eq!(stems(&skeleton), ["currency", ".00"]);
        assert_eq!(skeleton.tokens[0].options, ["USD"]);
        assert!(skeleton.tokens[1].options.is_empty());
    }

    #[test]
    pub fn test_number_skeleton_without_marker() {
        let NumberStyle::Skeleton(skeleton) = parse_number_style("compact-short currency/CAD")
        else {
            panic!("expected a skeleton style");
        };
        assert_eq!(stems(&skeleton), ["compact-short", "currency"]);
    }

    #[test]
    pub fn test_unknown_stems_are_preserved() {
        let skeleton = parse_number_skeleton("made-up-stem/a/b plain");
        assert_eq!(stems(&skeleton), ["made-up-stem", "plain"]);
        assert_eq!(skeleton.tokens[0].options, ["a", "b"]);
    }

    #[test]
    pub fn test_date_time_widths() {
        assert_eq!(
            parse_date_time_style("short"),
            DateTimeStyle::Predefined(DateTimeWidth::Short)
        );
        assert_eq!(
            parse_date_time_style("full"),
            DateTimeStyle::Predefined(DateTimeWidth::Full)
        );
    }

    #[test]
    pub fn test_date_time_skeleton_passthrough() {
        assert_eq!(
            parse_date_time_style("::hhmmss"),
            DateTimeStyle::Skeleton("hhmmss".into())
        );
    }

    #[test]
    pub fn test_date_time_custom_pattern() {
        assert_eq!(
            parse_date_time_style("dd/MM/yyyy"),
            DateTimeStyle::Pattern("dd/MM/yyyy".into())
        );
    }
}
