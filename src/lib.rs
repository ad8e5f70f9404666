//! svg-attrs - typed SVG attribute values
//!
//! This library turns the raw text of SVG presentation attributes and style
//! declarations into typed values: lengths with units, paints, transform
//! lists, keywords, path data with bounding boxes, and declaration blocks.
//! It also resolves the effective value of a property through local
//! attributes, named styles and `inherit`.
//!
//! # Example
//!
//! ```rust
//! use svg_attrs::{parse_attribute, property, Length, Unit};
//!
//! let width = parse_attribute(&property::STROKE_WIDTH, "2.5mm").unwrap();
//! assert_eq!(width.get::<Length>(), Some(&Length::new(2.5, Unit::Mm)));
//! ```

pub mod cascade;
pub mod config;
pub mod css;
pub mod error;
pub mod path;
pub mod property;
pub mod transform;
pub mod value;

pub use cascade::{AttributeHolder, NamedStyle, Scope, StyleLookup, StyleRegistry};
pub use config::{ConfigError, ParserConfig};
pub use css::{DeclarationBlock, StyleRule};
pub use error::ParseError;
pub use path::{BoundingBox, PathData, Point};
pub use property::Property;
pub use transform::{Matrix, TransformFunction, TransformList};
pub use value::{
    Color, FillRule, GradientUnits, Length, LineCap, LineJoin, Paint, Position, TypedValue, Unit,
    Value, ValueKind,
};

/// Parse one attribute's text with the default configuration
///
/// Errors name the property they occurred in.
///
/// # Example
///
/// ```rust
/// use svg_attrs::{parse_attribute, property, Paint};
///
/// let fill = parse_attribute(&property::FILL, "none").unwrap();
/// assert!(fill.is_none());
/// assert_eq!(fill.get::<Paint>(), Some(&Paint::default()));
/// ```
pub fn parse_attribute(property: &Property, raw: &str) -> Result<TypedValue, ParseError> {
    property.parse(raw)
}

/// Parse one attribute's text with a custom configuration
pub fn parse_attribute_with_config(
    property: &Property,
    raw: &str,
    config: &ParserConfig,
) -> Result<TypedValue, ParseError> {
    property.parse_with_config(raw, config)
}

/// Bounding box of path data, as an alias of [`path::bounding_box`]
///
/// # Example
///
/// ```rust
/// use svg_attrs::path_bounding_box;
///
/// let bbox = path_bounding_box("M50,5 h-25").unwrap();
/// assert_eq!((bbox.x, bbox.y, bbox.width, bbox.height), (25.0, 5.0, 25.0, 0.0));
/// ```
pub fn path_bounding_box(d: &str) -> Result<BoundingBox, ParseError> {
    path::bounding_box(d)
}
