//! Path data (`d` attribute) parsing and bounding boxes
//!
//! Path data is lexed into command letters and numbers, grouped into
//! [`PathSegment`]s by each command's arity, and walked by a
//! [`BoundsTracker`] to find the extent of the pen.
//!
//! ```rust
//! use svg_attrs::path::{bounding_box, BoundingBox};
//!
//! let bounds = bounding_box("M 10 5 L 30 20").unwrap();
//! assert_eq!(bounds, BoundingBox::new(10.0, 5.0, 20.0, 15.0));
//! ```

mod bounds;
pub mod lexer;
mod segment;

use std::fmt;

pub use bounds::{BoundingBox, BoundsTracker, Point};
pub use segment::{CommandKind, PathCommand, PathSegment};

use crate::error::ParseError;
use lexer::Token;

/// Parsed path data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    pub segments: Vec<PathSegment>,
}

impl PathData {
    /// Convert to SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }

    /// Extent of the pen over all drawing commands
    pub fn bounding_box(&self) -> BoundingBox {
        let mut tracker = BoundsTracker::new();
        for segment in &self.segments {
            tracker.apply(segment);
        }
        tracker.finish()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        f.write_str(&parts.join(" "))
    }
}

/// Parse path data into segments.
///
/// Numbers following a command letter are split into groups of the
/// command's arity; every group repeats the command.
pub fn parse(raw: &str) -> Result<PathData, ParseError> {
    let tokens = lexer::lex(raw)?;
    let mut segments = Vec::new();
    let mut iter = tokens.into_iter().peekable();

    if iter.peek().is_none() {
        return Err(ParseError::EmptyOrMissingCommand {
            text: raw.to_string(),
        });
    }

    while let Some((token, span)) = iter.next() {
        let Token::Command(letter) = token else {
            // Numbers are only consumed right after a command letter
            return Err(ParseError::EmptyOrMissingCommand {
                text: raw.to_string(),
            });
        };
        let kind = CommandKind::from_letter(letter)
            .ok_or(ParseError::UnknownCommand { letter, span: span.clone() })?;
        let relative = letter.is_ascii_lowercase();

        let mut args = Vec::new();
        let mut end = span.end;
        while let Some((Token::Number(n), number_span)) = iter.peek() {
            args.push(*n);
            end = number_span.end;
            iter.next();
        }

        let arity = kind.arity();
        if arity == 0 {
            if !args.is_empty() {
                return Err(ParseError::argument_count(&raw[span.start..end], "0", args.len()));
            }
            segments.push(PathSegment {
                command: PathCommand::Close,
                relative,
            });
            continue;
        }

        if args.is_empty() || args.len() % arity != 0 {
            return Err(ParseError::IncompleteArguments {
                command: letter,
                arity,
                found: args.len(),
                span: span.start..end,
            });
        }

        for group in args.chunks(arity) {
            segments.push(PathSegment {
                command: kind.build(group)?,
                relative,
            });
        }
    }

    tracing::trace!(segments = segments.len(), "parsed path data");
    Ok(PathData { segments })
}

/// Bounding box of the pen positions visited by the path's drawing commands
pub fn bounding_box(raw: &str) -> Result<BoundingBox, ParseError> {
    let data = parse(raw)?;
    if !data
        .segments
        .iter()
        .any(|s| !matches!(s.command, PathCommand::Move(_) | PathCommand::Close))
    {
        tracing::debug!(raw, "path has no drawing commands");
    }
    Ok(data.bounding_box())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_groups_and_case() {
        let data = parse("M10 5 l30 20 h-5 Z").expect("Should parse");
        assert_eq!(
            data.segments,
            vec![
                PathSegment::absolute(PathCommand::Move(Point::new(10.0, 5.0))),
                PathSegment::relative(PathCommand::Line(Point::new(30.0, 20.0))),
                PathSegment::relative(PathCommand::LineHorizontal(-5.0)),
                PathSegment::absolute(PathCommand::Close),
            ]
        );
    }

    #[test]
    fn test_implicit_repetition() {
        let data = parse("L 1 2 3 4 5 6").expect("Should parse");
        assert_eq!(data.segments.len(), 3);
        assert!(data
            .segments
            .iter()
            .all(|s| s.command.kind() == CommandKind::Line));
    }

    #[test]
    fn test_incomplete_arguments() {
        assert_eq!(
            parse("M 0 0 L 1 2 3").unwrap_err(),
            ParseError::IncompleteArguments {
                command: 'L',
                arity: 2,
                found: 3,
                span: 6..13,
            }
        );
        assert!(matches!(
            parse("C 1 2 3 4").unwrap_err(),
            ParseError::IncompleteArguments { found: 4, .. }
        ));
        assert!(matches!(
            parse("M").unwrap_err(),
            ParseError::IncompleteArguments { found: 0, .. }
        ));
    }

    #[test]
    fn test_close_with_arguments() {
        assert_eq!(
            parse("M 0 0 Z 5").unwrap_err(),
            ParseError::argument_count("Z 5", "0", 1)
        );
    }

    #[test]
    fn test_empty_and_missing_command() {
        assert!(matches!(
            parse("").unwrap_err(),
            ParseError::EmptyOrMissingCommand { .. }
        ));
        assert!(matches!(
            parse("  , ").unwrap_err(),
            ParseError::EmptyOrMissingCommand { .. }
        ));
        assert!(matches!(
            parse("10 20 L 5 5").unwrap_err(),
            ParseError::EmptyOrMissingCommand { .. }
        ));
    }

    #[test]
    fn test_to_svg_d() {
        let data = parse("M 10,5 l 30 20 a5 5 0 1 0 10 10 z").expect("Should parse");
        assert_eq!(data.to_svg_d(), "M10 5 l30 20 a5 5 0 1 0 10 10 z");
        assert_eq!(parse(&data.to_svg_d()), Ok(data));
    }

    #[test]
    fn test_bounding_box_of_curves_uses_endpoints() {
        let bounds = bounding_box("M 0 0 C 0 50 50 50 50 0").expect("Should parse");
        assert_eq!(bounds, BoundingBox::new(0.0, 0.0, 50.0, 0.0));
    }

    #[test]
    fn test_bounding_box_without_drawing() {
        assert_eq!(
            bounding_box("M 7 8").expect("Should parse"),
            BoundingBox::new(7.0, 8.0, 0.0, 0.0)
        );
    }
}
