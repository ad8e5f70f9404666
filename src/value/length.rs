//! Lengths, plain numbers and the values built from them

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::ParserConfig;
use crate::error::ParseError;

/// Measurement unit of a length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// No suffix: user units
    #[default]
    None,
    Em,
    Ex,
    Px,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
    Percent,
}

impl Unit {
    /// Suffixed units in the order suffixes are tried
    pub const SUFFIXED: [Unit; 9] = [
        Unit::Em,
        Unit::Ex,
        Unit::Px,
        Unit::In,
        Unit::Cm,
        Unit::Mm,
        Unit::Pt,
        Unit::Pc,
        Unit::Percent,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Px => "px",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Percent => "%",
        }
    }

    /// Find the unit whose suffix ends `text`
    pub fn from_text(text: &str) -> Unit {
        Unit::SUFFIXED
            .into_iter()
            .find(|unit| text.ends_with(unit.suffix()))
            .unwrap_or(Unit::None)
    }

    /// Size of one unit in user units (px at 96 dpi).
    ///
    /// Font- and viewport-relative units have no fixed size.
    pub fn user_units(self) -> Option<f64> {
        match self {
            Unit::None | Unit::Px => Some(1.0),
            Unit::In => Some(96.0),
            Unit::Cm => Some(96.0 / 2.54),
            Unit::Mm => Some(96.0 / 25.4),
            Unit::Pt => Some(96.0 / 72.0),
            Unit::Pc => Some(16.0),
            Unit::Em | Unit::Ex | Unit::Percent => None,
        }
    }
}

/// A number with a unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub number: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(number: f64, unit: Unit) -> Self {
        Self { number, unit }
    }

    /// A unitless length
    pub fn user(number: f64) -> Self {
        Self::new(number, Unit::None)
    }

    /// The length in user units, when the unit has a fixed size
    pub fn to_user_units(&self) -> Option<f64> {
        self.unit.user_units().map(|scale| self.number * scale)
    }
}

/// Hash a number so that values comparing equal hash alike (`-0.0 == 0.0`)
pub(crate) fn hash_number<H: Hasher>(number: f64, state: &mut H) {
    (number + 0.0).to_bits().hash(state);
}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_number(self.number, state);
        self.unit.hash(state);
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.suffix())
    }
}

/// Two lengths naming a position
#[derive(Debug, Clone, Copy, PartialEq, Default, Hash)]
pub struct Position {
    pub x: Length,
    pub y: Length,
}

/// Parse a plain floating-point number.
///
/// With `decimal_comma` enabled a `,` is read as the decimal separator.
pub fn parse_number(raw: &str, config: &ParserConfig) -> Result<f64, ParseError> {
    let text = raw.trim();
    let normalized = if config.decimal_comma {
        text.replace(',', ".")
    } else {
        text.to_string()
    };

    // Rust also accepts "inf" and "NaN"; markup numbers never spell those out
    if normalized.is_empty()
        || normalized
            .chars()
            .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return Err(ParseError::malformed_number(raw));
    }

    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseError::malformed_number(raw)),
    }
}

/// Parse a number with an optional unit suffix, e.g. `12.5px` or `50%`
pub fn parse_length(raw: &str, config: &ParserConfig) -> Result<Length, ParseError> {
    let text = raw.trim();
    let unit = Unit::from_text(text);
    let numeric = &text[..text.len() - unit.suffix().len()];

    if unit == Unit::None && text.ends_with(|c: char| c.is_ascii_alphabetic()) {
        tracing::debug!(text, "unknown unit suffix, reading as unitless");
    }

    let number = parse_number(numeric, config).map_err(|_| ParseError::malformed_number(raw))?;
    Ok(Length::new(number, unit))
}

/// Parse a list of lengths such as a dash array (`5,3,2` or `5 3 2`).
///
/// Empty input is an empty list. One bad entry fails the whole list.
pub fn parse_length_list(raw: &str, config: &ParserConfig) -> Result<Vec<Length>, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let list_config = config.clone().with_decimal_comma(false);
    text.split(',')
        .flat_map(|segment| {
            let segment = segment.trim();
            // "5,,3" keeps an empty segment so it is rejected below
            if segment.is_empty() {
                vec![segment]
            } else {
                segment.split_whitespace().collect()
            }
        })
        .map(|segment| {
            parse_length(segment, &list_config).map_err(|_| ParseError::malformed_number(text))
        })
        .collect()
}

/// Parse a position made of two lengths split by the configured delimiter
pub fn parse_position(raw: &str, config: &ParserConfig) -> Result<Position, ParseError> {
    let parts: Vec<&str> = raw.split(config.position_delimiter.as_str()).collect();
    if parts.len() != 2 {
        return Err(ParseError::argument_count(raw, "2", parts.len()));
    }

    // The delimiter may itself be a comma, so decimals use dots here
    let part_config = if config.position_delimiter.contains(',') {
        config.clone().with_decimal_comma(false)
    } else {
        config.clone()
    };

    Ok(Position {
        x: parse_length(parts[0], &part_config)?,
        y: parse_length(parts[1], &part_config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn length(raw: &str) -> Result<Length, ParseError> {
        parse_length(raw, &ParserConfig::default())
    }

    #[test]
    fn test_every_unit_suffix() {
        for unit in Unit::SUFFIXED {
            let raw = format!("-12.5{}", unit.suffix());
            assert_eq!(length(&raw), Ok(Length::new(-12.5, unit)), "{}", raw);
        }
    }

    #[test]
    fn test_no_suffix_is_unitless() {
        assert_eq!(length("42"), Ok(Length::user(42.0)));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(length("1,5mm"), Ok(Length::new(1.5, Unit::Mm)));
        assert_eq!(length("  3,25  "), Ok(Length::user(3.25)));
    }

    #[test]
    fn test_decimal_comma_disabled() {
        let config = ParserConfig::default().with_decimal_comma(false);
        assert!(parse_length("1,5", &config).is_err());
    }

    #[test]
    fn test_malformed_lengths() {
        assert_eq!(length("abc"), Err(ParseError::malformed_number("abc")));
        assert_eq!(length("12qq"), Err(ParseError::malformed_number("12qq")));
        assert_eq!(length("px"), Err(ParseError::malformed_number("px")));
        assert_eq!(length(""), Err(ParseError::malformed_number("")));
        assert!(length("inf").is_err());
    }

    #[test]
    fn test_exponent_numbers() {
        let config = ParserConfig::default();
        assert_eq!(parse_number("1e3", &config), Ok(1000.0));
        assert_eq!(length("2.5E-1em"), Ok(Length::new(0.25, Unit::Em)));
    }

    #[test]
    fn test_user_units() {
        assert_eq!(Length::new(1.0, Unit::In).to_user_units(), Some(96.0));
        assert_eq!(Length::new(3.0, Unit::Px).to_user_units(), Some(3.0));
        assert_eq!(Length::new(50.0, Unit::Percent).to_user_units(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::new(12.5, Unit::Percent).to_string(), "12.5%");
        assert_eq!(Length::user(3.0).to_string(), "3");
    }

    #[test]
    fn test_dash_array() {
        let config = ParserConfig::default();
        assert_eq!(
            parse_length_list("5, 3px,2", &config),
            Ok(vec![
                Length::user(5.0),
                Length::new(3.0, Unit::Px),
                Length::user(2.0)
            ])
        );
        assert_eq!(
            parse_length_list("4 2", &config),
            Ok(vec![Length::user(4.0), Length::user(2.0)])
        );
    }

    #[test]
    fn test_dash_array_empty_and_invalid() {
        let config = ParserConfig::default();
        assert_eq!(parse_length_list("", &config), Ok(vec![]));
        assert_eq!(parse_length_list("   ", &config), Ok(vec![]));
        assert!(parse_length_list("5,x,2", &config).is_err());
        assert!(parse_length_list("5,,2", &config).is_err());
    }

    #[test]
    fn test_position() {
        let config = ParserConfig::default();
        assert_eq!(
            parse_position("10px, 20%", &config),
            Ok(Position {
                x: Length::new(10.0, Unit::Px),
                y: Length::new(20.0, Unit::Percent),
            })
        );
    }

    #[test]
    fn test_position_wrong_count() {
        let config = ParserConfig::default();
        assert_eq!(
            parse_position("1,2,3", &config),
            Err(ParseError::argument_count("1,2,3", "2", 3))
        );
        assert_eq!(
            parse_position("7", &config),
            Err(ParseError::argument_count("7", "2", 1))
        );
    }

    #[test]
    fn test_position_custom_delimiter() {
        let config = ParserConfig::default().with_position_delimiter(";");
        let position = parse_position("1,5; 2", &config).expect("Should parse");
        assert_eq!(position.x, Length::user(1.5));
        assert_eq!(position.y, Length::user(2.0));
    }
}
