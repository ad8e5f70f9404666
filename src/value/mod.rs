//! Typed attribute values
//!
//! A [`TypedValue`] is created for one attribute or declaration, consumes
//! its raw text once and then holds one of three outcomes: a parsed
//! [`Value`], the `inherit` sentinel, or the `none` sentinel. Until then,
//! and after either sentinel, it reports the default of its [`ValueKind`].
//!
//! ```rust
//! use svg_attrs::value::{TypedValue, ValueKind, Unit};
//!
//! let mut width = TypedValue::new(ValueKind::Length);
//! width.consume_text("2.5mm").unwrap();
//! assert_eq!(width.unit(), Some(Unit::Mm));
//! ```

mod color;
mod keyword;
mod length;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use color::{Color, Paint};
pub use keyword::{EnumTable, FillRule, GradientUnits, Keyword, LineCap, LineJoin};
pub use length::{
    parse_length, parse_length_list, parse_number, parse_position, Length, Position, Unit,
};
pub(crate) use length::hash_number;

use crate::config::ParserConfig;
use crate::css::{self, DeclarationBlock};
use crate::error::ParseError;
use crate::transform::{parse_transform, TransformList};

/// Which parser an attribute uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Length,
    Number,
    String,
    Paint,
    Transform,
    FillRule,
    LineCap,
    LineJoin,
    GradientUnits,
    Point,
    LengthArray,
    Enumeration(&'static EnumTable),
    /// Nested declarations, as in a `style` attribute
    Style,
}

impl ValueKind {
    pub fn default_value(self) -> Value {
        match self {
            ValueKind::Length => Value::Length(Length::default()),
            ValueKind::Number => Value::Number(0.0),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Paint => Value::Paint(Paint::default()),
            ValueKind::Transform => Value::Transform(TransformList::default()),
            ValueKind::FillRule => Value::FillRule(FillRule::default_keyword()),
            ValueKind::LineCap => Value::LineCap(LineCap::default_keyword()),
            ValueKind::LineJoin => Value::LineJoin(LineJoin::default_keyword()),
            ValueKind::GradientUnits => Value::GradientUnits(GradientUnits::default_keyword()),
            ValueKind::Point => Value::Point(Position::default()),
            ValueKind::LengthArray => Value::LengthArray(Vec::new()),
            ValueKind::Enumeration(table) => Value::Enumeration(table.default),
            ValueKind::Style => Value::Style(DeclarationBlock::new()),
        }
    }

    /// Parse text that is not a sentinel into a value of this kind
    pub fn parse(self, raw: &str, config: &ParserConfig) -> Result<Value, ParseError> {
        let value = match self {
            ValueKind::Length => Value::Length(parse_length(raw, config)?),
            ValueKind::Number => Value::Number(parse_number(raw, config)?),
            ValueKind::String => Value::String(raw.trim().to_string()),
            ValueKind::Paint => Value::Paint(Paint::parse(raw)?),
            ValueKind::Transform => Value::Transform(parse_transform(raw)?),
            ValueKind::FillRule => Value::FillRule(FillRule::parse_keyword(raw, config)?),
            ValueKind::LineCap => Value::LineCap(LineCap::parse_keyword(raw, config)?),
            ValueKind::LineJoin => Value::LineJoin(LineJoin::parse_keyword(raw, config)?),
            ValueKind::GradientUnits => {
                Value::GradientUnits(GradientUnits::parse_keyword(raw, config)?)
            }
            ValueKind::Point => Value::Point(parse_position(raw, config)?),
            ValueKind::LengthArray => Value::LengthArray(parse_length_list(raw, config)?),
            ValueKind::Enumeration(table) => Value::Enumeration(table.parse(raw)?),
            ValueKind::Style => Value::Style(css::parse_declarations(raw)),
        };
        Ok(value)
    }
}

/// A parsed attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Length(Length),
    Number(f64),
    String(String),
    Paint(Paint),
    Transform(TransformList),
    FillRule(FillRule),
    LineCap(LineCap),
    LineJoin(LineJoin),
    GradientUnits(GradientUnits),
    Point(Position),
    LengthArray(Vec<Length>),
    Enumeration(&'static str),
    Style(DeclarationBlock),
}

impl Value {
    /// Unit of a length value
    pub fn unit(&self) -> Option<Unit> {
        match self {
            Value::Length(length) => Some(length.unit),
            _ => None,
        }
    }

    pub fn as_enumeration(&self) -> Option<&'static str> {
        match self {
            Value::Enumeration(name) => Some(*name),
            _ => None,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Length(v) => v.hash(state),
            Value::Number(v) => length::hash_number(*v, state),
            Value::String(v) => v.hash(state),
            Value::Paint(v) => v.hash(state),
            Value::Transform(v) => v.hash(state),
            Value::FillRule(v) => v.hash(state),
            Value::LineCap(v) => v.hash(state),
            Value::LineJoin(v) => v.hash(state),
            Value::GradientUnits(v) => v.hash(state),
            Value::Point(v) => v.hash(state),
            Value::LengthArray(v) => v.hash(state),
            Value::Enumeration(v) => v.hash(state),
            Value::Style(v) => v.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Length(v) => write!(f, "{}", v),
            Value::Number(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::Paint(v) => write!(f, "{}", v),
            Value::Transform(v) => write!(f, "{}", v),
            Value::FillRule(v) => write!(f, "{}", v),
            Value::LineCap(v) => write!(f, "{}", v),
            Value::LineJoin(v) => write!(f, "{}", v),
            Value::GradientUnits(v) => write!(f, "{}", v),
            Value::Point(p) => write!(f, "{},{}", p.x, p.y),
            Value::LengthArray(v) => {
                let parts: Vec<String> = v.iter().map(|l| l.to_string()).collect();
                f.write_str(&parts.join(","))
            }
            Value::Enumeration(v) => f.write_str(v),
            Value::Style(v) => write!(f, "{}", v),
        }
    }
}

/// Typed access to the payload of a [`Value`]
pub trait FromValue {
    fn from_value(value: &Value) -> Option<&Self>;
}

macro_rules! from_value {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl FromValue for $ty {
            fn from_value(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        })*
    };
}

from_value!(
    Length => Length,
    Number => f64,
    String => String,
    Paint => Paint,
    Transform => TransformList,
    FillRule => FillRule,
    LineCap => LineCap,
    LineJoin => LineJoin,
    GradientUnits => GradientUnits,
    Point => Position,
    LengthArray => Vec<Length>,
    Style => DeclarationBlock,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum State {
    /// No text consumed yet
    Unset,
    Parsed,
    Inherited,
    None,
}

/// One attribute's value together with its sentinel state
#[derive(Debug, Clone, PartialEq, Hash)]
pub struct TypedValue {
    kind: ValueKind,
    value: Value,
    state: State,
}

impl TypedValue {
    /// A value of `kind` holding the kind's default, not yet consumed
    pub fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            value: kind.default_value(),
            state: State::Unset,
        }
    }

    /// Parse `raw` into a new value using the default configuration
    pub fn parse(kind: ValueKind, raw: &str) -> Result<Self, ParseError> {
        Self::parse_with_config(kind, raw, &ParserConfig::default())
    }

    pub fn parse_with_config(
        kind: ValueKind,
        raw: &str,
        config: &ParserConfig,
    ) -> Result<Self, ParseError> {
        let mut value = Self::new(kind);
        value.consume_text_with_config(raw, config)?;
        Ok(value)
    }

    /// A value that was given explicitly, bypassing text parsing
    pub fn with_value(kind: ValueKind, value: Value) -> Self {
        Self {
            kind,
            value,
            state: State::Parsed,
        }
    }

    pub fn consume_text(&mut self, raw: &str) -> Result<(), ParseError> {
        self.consume_text_with_config(raw, &ParserConfig::default())
    }

    /// Consume the attribute text.
    ///
    /// `inherit` and `none` set the matching sentinel and leave the value at
    /// its default. On error nothing changes. A value consumes text only once.
    pub fn consume_text_with_config(
        &mut self,
        raw: &str,
        config: &ParserConfig,
    ) -> Result<(), ParseError> {
        if self.state != State::Unset {
            return Err(ParseError::AlreadyConsumed {
                text: raw.to_string(),
            });
        }

        self.state = match raw.trim() {
            "inherit" => State::Inherited,
            "none" => State::None,
            text => {
                self.value = self.kind.parse(text, config)?;
                State::Parsed
            }
        };
        Ok(())
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The parsed value, or the default for unset and sentinel values
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn default_value(&self) -> Value {
        self.kind.default_value()
    }

    pub fn unit(&self) -> Option<Unit> {
        self.value.unit()
    }

    /// Typed view of the value, e.g. `value.get::<Length>()`
    pub fn get<T: FromValue>(&self) -> Option<&T> {
        T::from_value(&self.value)
    }

    pub fn is_inherited(&self) -> bool {
        self.state == State::Inherited
    }

    pub fn is_none(&self) -> bool {
        self.state == State::None
    }

    /// Text was consumed and parsed into a value
    pub fn is_parsed(&self) -> bool {
        self.state == State::Parsed
    }

    /// Text of any kind was consumed
    pub fn is_set(&self) -> bool {
        self.state != State::Unset
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            State::Inherited => f.write_str("inherit"),
            State::None => f.write_str("none"),
            State::Unset | State::Parsed => write!(f, "{}", self.value),
        }
    }
}
