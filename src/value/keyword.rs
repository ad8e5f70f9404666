//! Keyword-valued properties
//!
//! Each keyword type owns a static name table. Lenient keywords fall back
//! to their default on unknown input, strict ones reject it.

use std::fmt;

use crate::config::ParserConfig;
use crate::error::ParseError;

/// A property whose values come from a fixed set of names
pub trait Keyword: Copy + Sized + 'static {
    /// Name and value pairs, in the spelling they are written
    const TABLE: &'static [(&'static str, Self)];

    /// Unknown input falls back to the default instead of failing
    const LENIENT: bool;

    fn default_keyword() -> Self;

    fn name(self) -> &'static str;

    fn parse_keyword(raw: &str, config: &ParserConfig) -> Result<Self, ParseError> {
        let text = raw.trim();
        let found = Self::TABLE.iter().find(|(name, _)| {
            if Self::LENIENT {
                name.eq_ignore_ascii_case(text)
            } else {
                *name == text
            }
        });

        match found {
            Some(&(_, value)) => Ok(value),
            None if Self::LENIENT => {
                let fallback = Self::default_keyword();
                if config.log_fallbacks {
                    tracing::debug!(text, fallback = fallback.name(), "unknown keyword, using default");
                }
                Ok(fallback)
            }
            None => Err(ParseError::unknown_enumeration(
                text,
                &Self::TABLE.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl Keyword for FillRule {
    const TABLE: &'static [(&'static str, Self)] =
        &[("nonzero", FillRule::NonZero), ("evenodd", FillRule::EvenOdd)];
    const LENIENT: bool = true;

    fn default_keyword() -> Self {
        Self::default()
    }

    fn name(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientUnits {
    UserSpaceOnUse,
    #[default]
    ObjectBoundingBox,
}

impl Keyword for GradientUnits {
    const TABLE: &'static [(&'static str, Self)] = &[
        ("userSpaceOnUse", GradientUnits::UserSpaceOnUse),
        ("objectBoundingBox", GradientUnits::ObjectBoundingBox),
    ];
    const LENIENT: bool = true;

    fn default_keyword() -> Self {
        Self::default()
    }

    fn name(self) -> &'static str {
        match self {
            GradientUnits::UserSpaceOnUse => "userSpaceOnUse",
            GradientUnits::ObjectBoundingBox => "objectBoundingBox",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl Keyword for LineCap {
    const TABLE: &'static [(&'static str, Self)] = &[
        ("butt", LineCap::Butt),
        ("round", LineCap::Round),
        ("square", LineCap::Square),
    ];
    const LENIENT: bool = false;

    fn default_keyword() -> Self {
        Self::default()
    }

    fn name(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl Keyword for LineJoin {
    const TABLE: &'static [(&'static str, Self)] = &[
        ("miter", LineJoin::Miter),
        ("round", LineJoin::Round),
        ("bevel", LineJoin::Bevel),
    ];
    const LENIENT: bool = false;

    fn default_keyword() -> Self {
        Self::default()
    }

    fn name(self) -> &'static str {
        match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        }
    }
}

macro_rules! keyword_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

keyword_display!(FillRule, GradientUnits, LineCap, LineJoin);

/// Name table for an enumeration known only by its names,
/// e.g. `visibility` or `text-anchor`
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumTable {
    pub property: &'static str,
    pub values: &'static [&'static str],
    pub default: &'static str,
}

impl EnumTable {
    /// Match `raw` against the table, ignoring case; returns the table's spelling.
    ///
    /// A mismatch names the table's property.
    pub fn parse(&'static self, raw: &str) -> Result<&'static str, ParseError> {
        let text = raw.trim();
        self.values
            .iter()
            .copied()
            .find(|name| name.eq_ignore_ascii_case(text))
            .ok_or_else(|| {
                ParseError::unknown_enumeration(text, self.values).for_property(self.property)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VISIBILITY: EnumTable = EnumTable {
        property: "visibility",
        values: &["visible", "hidden", "collapse"],
        default: "visible",
    };

    #[test]
    fn test_fill_rule_case_insensitive() {
        let config = ParserConfig::default();
        assert_eq!(FillRule::parse_keyword("EvenOdd", &config), Ok(FillRule::EvenOdd));
        assert_eq!(FillRule::parse_keyword(" nonzero ", &config), Ok(FillRule::NonZero));
    }

    #[test]
    fn test_lenient_fallback() {
        let config = ParserConfig::default();
        assert_eq!(FillRule::parse_keyword("sideways", &config), Ok(FillRule::NonZero));
        assert_eq!(
            GradientUnits::parse_keyword("bogus", &config),
            Ok(GradientUnits::ObjectBoundingBox)
        );
        assert_eq!(
            GradientUnits::parse_keyword("userspaceonuse", &config),
            Ok(GradientUnits::UserSpaceOnUse)
        );
    }

    #[test]
    fn test_strict_keywords() {
        let config = ParserConfig::default();
        assert_eq!(LineCap::parse_keyword("square", &config), Ok(LineCap::Square));
        assert_eq!(LineJoin::parse_keyword("bevel", &config), Ok(LineJoin::Bevel));
        assert_eq!(
            LineCap::parse_keyword("Round", &config),
            Err(ParseError::unknown_enumeration("Round", &["butt", "round", "square"]))
        );
        assert!(LineJoin::parse_keyword("arcs", &config).is_err());
    }

    #[test]
    fn test_display_uses_table_spelling() {
        assert_eq!(GradientUnits::UserSpaceOnUse.to_string(), "userSpaceOnUse");
        assert_eq!(LineJoin::Miter.to_string(), "miter");
    }

    #[test]
    fn test_enum_table() {
        assert_eq!(VISIBILITY.parse("Hidden"), Ok("hidden"));
        let err = VISIBILITY.parse("gone").unwrap_err();
        assert!(matches!(err, ParseError::Property { ref property, .. } if property == "visibility"));
        assert_eq!(
            err.root(),
            &ParseError::unknown_enumeration("gone", &["visible", "hidden", "collapse"])
        );
    }
}
