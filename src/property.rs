//! Property identifiers
//!
//! A [`Property`] pairs an attribute name with the kind of value it holds,
//! so lookups and parses are checked against one definition. Only common
//! presentation attributes are predefined; documents with other attributes
//! define their own with [`Property::new`].

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::value::{TypedValue, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl Property {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        Self { name, kind }
    }

    /// Parse raw text for this property; errors carry the property name
    pub fn parse(&self, raw: &str) -> Result<TypedValue, ParseError> {
        self.parse_with_config(raw, &ParserConfig::default())
    }

    pub fn parse_with_config(
        &self,
        raw: &str,
        config: &ParserConfig,
    ) -> Result<TypedValue, ParseError> {
        TypedValue::parse_with_config(self.kind, raw, config).map_err(|e| e.for_property(self.name))
    }
}

pub const FILL: Property = Property::new("fill", ValueKind::Paint);
pub const FILL_OPACITY: Property = Property::new("fill-opacity", ValueKind::Number);
pub const FILL_RULE: Property = Property::new("fill-rule", ValueKind::FillRule);
pub const CLIP_RULE: Property = Property::new("clip-rule", ValueKind::FillRule);
pub const STROKE: Property = Property::new("stroke", ValueKind::Paint);
pub const STROKE_WIDTH: Property = Property::new("stroke-width", ValueKind::Length);
pub const STROKE_OPACITY: Property = Property::new("stroke-opacity", ValueKind::Number);
pub const STROKE_DASHARRAY: Property = Property::new("stroke-dasharray", ValueKind::LengthArray);
pub const STROKE_DASHOFFSET: Property = Property::new("stroke-dashoffset", ValueKind::Length);
pub const STROKE_LINECAP: Property = Property::new("stroke-linecap", ValueKind::LineCap);
pub const STROKE_LINEJOIN: Property = Property::new("stroke-linejoin", ValueKind::LineJoin);
pub const STROKE_MITERLIMIT: Property = Property::new("stroke-miterlimit", ValueKind::Number);
pub const OPACITY: Property = Property::new("opacity", ValueKind::Number);
pub const FONT_SIZE: Property = Property::new("font-size", ValueKind::Length);
pub const FONT_FAMILY: Property = Property::new("font-family", ValueKind::String);
pub const TRANSFORM: Property = Property::new("transform", ValueKind::Transform);
pub const GRADIENT_UNITS: Property = Property::new("gradientUnits", ValueKind::GradientUnits);
pub const STYLE: Property = Property::new("style", ValueKind::Style);

/// Properties that may appear inside style declarations
pub const PRESENTATION: &[Property] = &[
    FILL,
    FILL_OPACITY,
    FILL_RULE,
    CLIP_RULE,
    STROKE,
    STROKE_WIDTH,
    STROKE_OPACITY,
    STROKE_DASHARRAY,
    STROKE_DASHOFFSET,
    STROKE_LINECAP,
    STROKE_LINEJOIN,
    STROKE_MITERLIMIT,
    OPACITY,
    FONT_SIZE,
    FONT_FAMILY,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Length, Unit};

    #[test]
    fn test_parse_with_context() {
        let err = STROKE_WIDTH.parse("thick").unwrap_err();
        assert!(err.to_string().starts_with("invalid value for 'stroke-width'"));
    }

    #[test]
    fn test_parse_typed() {
        let value = FONT_SIZE.parse("12pt").expect("Should parse");
        assert_eq!(value.get::<Length>(), Some(&Length::new(12.0, Unit::Pt)));
    }
}
