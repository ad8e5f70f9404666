//! Path commands and their `d` attribute form

use std::fmt;

use crate::error::ParseError;
use crate::path::Point;

/// Which command a letter selects, independent of its case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Move,
    Line,
    LineHorizontal,
    LineVertical,
    Close,
    CubicBezier,
    CubicBezierContinue,
    QuadraticBezier,
    QuadraticBezierContinue,
    Arc,
}

impl CommandKind {
    pub fn from_letter(letter: char) -> Option<CommandKind> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::Move,
            'L' => CommandKind::Line,
            'H' => CommandKind::LineHorizontal,
            'V' => CommandKind::LineVertical,
            'Z' => CommandKind::Close,
            'C' => CommandKind::CubicBezier,
            'S' => CommandKind::CubicBezierContinue,
            'Q' => CommandKind::QuadraticBezier,
            'T' => CommandKind::QuadraticBezierContinue,
            'A' => CommandKind::Arc,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case (absolute) letter
    pub fn letter(self) -> char {
        match self {
            CommandKind::Move => 'M',
            CommandKind::Line => 'L',
            CommandKind::LineHorizontal => 'H',
            CommandKind::LineVertical => 'V',
            CommandKind::Close => 'Z',
            CommandKind::CubicBezier => 'C',
            CommandKind::CubicBezierContinue => 'S',
            CommandKind::QuadraticBezier => 'Q',
            CommandKind::QuadraticBezierContinue => 'T',
            CommandKind::Arc => 'A',
        }
    }

    /// Numbers in one argument group
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Close => 0,
            CommandKind::LineHorizontal | CommandKind::LineVertical => 1,
            CommandKind::Move | CommandKind::Line | CommandKind::QuadraticBezierContinue => 2,
            CommandKind::CubicBezierContinue | CommandKind::QuadraticBezier => 4,
            CommandKind::CubicBezier => 6,
            CommandKind::Arc => 7,
        }
    }

    /// Build a command from exactly `arity()` numbers
    pub fn build(self, args: &[f64]) -> Result<PathCommand, ParseError> {
        let point = |i: usize| Point::new(args[i], args[i + 1]);
        if args.len() != self.arity() {
            return Err(ParseError::argument_count(
                self.letter().to_string(),
                self.arity().to_string(),
                args.len(),
            ));
        }

        let command = match self {
            CommandKind::Move => PathCommand::Move(point(0)),
            CommandKind::Line => PathCommand::Line(point(0)),
            CommandKind::LineHorizontal => PathCommand::LineHorizontal(args[0]),
            CommandKind::LineVertical => PathCommand::LineVertical(args[0]),
            CommandKind::Close => PathCommand::Close,
            CommandKind::CubicBezier => PathCommand::CubicBezier {
                control1: point(0),
                control2: point(2),
                end: point(4),
            },
            CommandKind::CubicBezierContinue => PathCommand::CubicBezierContinue {
                control2: point(0),
                end: point(2),
            },
            CommandKind::QuadraticBezier => PathCommand::QuadraticBezier {
                control: point(0),
                end: point(2),
            },
            CommandKind::QuadraticBezierContinue => PathCommand::QuadraticBezierContinue(point(0)),
            CommandKind::Arc => PathCommand::Arc {
                rx: args[0],
                ry: args[1],
                x_axis_rotation: args[2],
                large_arc: args[3] != 0.0,
                sweep: args[4] != 0.0,
                end: point(5),
            },
        };
        Ok(command)
    }
}

/// A drawing command with its arguments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to starting point
    Move(Point),
    /// Straight line to point
    Line(Point),
    LineHorizontal(f64),
    LineVertical(f64),
    /// Close path back to the subpath start
    Close,
    CubicBezier {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Smooth cubic; the first control point is the reflection of the previous one
    CubicBezierContinue { control2: Point, end: Point },
    QuadraticBezier { control: Point, end: Point },
    /// Smooth quadratic; the control point is reflected
    QuadraticBezierContinue(Point),
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
}

impl PathCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            PathCommand::Move(_) => CommandKind::Move,
            PathCommand::Line(_) => CommandKind::Line,
            PathCommand::LineHorizontal(_) => CommandKind::LineHorizontal,
            PathCommand::LineVertical(_) => CommandKind::LineVertical,
            PathCommand::Close => CommandKind::Close,
            PathCommand::CubicBezier { .. } => CommandKind::CubicBezier,
            PathCommand::CubicBezierContinue { .. } => CommandKind::CubicBezierContinue,
            PathCommand::QuadraticBezier { .. } => CommandKind::QuadraticBezier,
            PathCommand::QuadraticBezierContinue(_) => CommandKind::QuadraticBezierContinue,
            PathCommand::Arc { .. } => CommandKind::Arc,
        }
    }

    /// The arguments in the order they are written
    pub fn args(&self) -> Vec<f64> {
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) | PathCommand::QuadraticBezierContinue(p) => {
                vec![p.x, p.y]
            }
            PathCommand::LineHorizontal(v) | PathCommand::LineVertical(v) => vec![v],
            PathCommand::Close => vec![],
            PathCommand::CubicBezier {
                control1,
                control2,
                end,
            } => vec![control1.x, control1.y, control2.x, control2.y, end.x, end.y],
            PathCommand::CubicBezierContinue { control2, end } => {
                vec![control2.x, control2.y, end.x, end.y]
            }
            PathCommand::QuadraticBezier { control, end } => {
                vec![control.x, control.y, end.x, end.y]
            }
            PathCommand::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            } => {
                let flag = |b: bool| if b { 1.0 } else { 0.0 };
                vec![rx, ry, x_axis_rotation, flag(large_arc), flag(sweep), end.x, end.y]
            }
        }
    }
}

/// A command plus whether its coordinates are relative to the pen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    pub command: PathCommand,
    pub relative: bool,
}

impl PathSegment {
    pub fn absolute(command: PathCommand) -> Self {
        Self {
            command,
            relative: false,
        }
    }

    pub fn relative(command: PathCommand) -> Self {
        Self {
            command,
            relative: true,
        }
    }

    /// The letter as written: lower case for relative commands
    pub fn letter(&self) -> char {
        let letter = self.command.kind().letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        let args: Vec<String> = self.command.args().iter().map(|a| a.to_string()).collect();
        f.write_str(&args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_table() {
        let expected = [
            ('M', 2),
            ('L', 2),
            ('H', 1),
            ('V', 1),
            ('Z', 0),
            ('C', 6),
            ('S', 4),
            ('Q', 4),
            ('T', 2),
            ('A', 7),
        ];
        for (letter, arity) in expected {
            let kind = CommandKind::from_letter(letter).expect("known letter");
            assert_eq!(kind.arity(), arity, "{}", letter);
            assert_eq!(kind.letter(), letter);
            assert_eq!(CommandKind::from_letter(letter.to_ascii_lowercase()), Some(kind));
        }
        assert_eq!(CommandKind::from_letter('B'), None);
    }

    #[test]
    fn test_build_arc_flags() {
        let arc = CommandKind::Arc
            .build(&[5.0, 5.0, 0.0, 1.0, 0.0, 10.0, 10.0])
            .expect("Should build");
        assert_eq!(
            arc,
            PathCommand::Arc {
                rx: 5.0,
                ry: 5.0,
                x_axis_rotation: 0.0,
                large_arc: true,
                sweep: false,
                end: Point::new(10.0, 10.0),
            }
        );
    }

    #[test]
    fn test_build_wrong_count() {
        assert!(CommandKind::Line.build(&[1.0]).is_err());
    }

    #[test]
    fn test_display() {
        let seg = PathSegment::relative(PathCommand::CubicBezier {
            control1: Point::new(1.0, 2.0),
            control2: Point::new(3.0, 4.0),
            end: Point::new(5.5, 6.0),
        });
        assert_eq!(seg.to_string(), "c1 2 3 4 5.5 6");
        assert_eq!(PathSegment::absolute(PathCommand::Close).to_string(), "Z");
    }
}
