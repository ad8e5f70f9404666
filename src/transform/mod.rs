//! Transform lists (`transform="translate(10) rotate(45)"`)
//!
//! The text is lexed with logos, parsed with a small chumsky grammar and
//! then validated into [`TransformFunction`]s. A list composes into one
//! affine [`Matrix`].
//!
//! ## Conventions
//!
//! Angles are in degrees, clockwise positive in SVG's y-down coordinates.
//! Functions apply right to left: in `translate(10) scale(2)` a point is
//! scaled first, then translated.

mod grammar;
pub mod lexer;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ParseError;
use crate::path::{BoundingBox, Point};
use crate::value::hash_number;

/// A 2D affine matrix `[a c e; b d f; 0 0 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation about the origin
    pub fn rotate(angle_degrees: f64) -> Self {
        let radians = angle_degrees.to_radians();
        let (sin_a, cos_a) = radians.sin_cos();
        // [cos  -sin]
        // [sin   cos]
        Self::new(cos_a, sin_a, -sin_a, cos_a, 0.0, 0.0)
    }

    pub fn skew_x(angle_degrees: f64) -> Self {
        Self::new(1.0, 0.0, angle_degrees.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    pub fn skew_y(angle_degrees: f64) -> Self {
        Self::new(1.0, angle_degrees.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// `self × other`: `other` is applied to points first
    pub fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn is_identity(&self) -> bool {
        let m = [self.a - 1.0, self.b, self.c, self.d - 1.0, self.e, self.f];
        m.iter().all(|v| v.abs() < f64::EPSILON)
    }

    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: self.a * point.x + self.c * point.y + self.e,
            y: self.b * point.x + self.d * point.y + self.f,
        }
    }

    /// Transform a bounding box using the "loose bounds" algorithm.
    ///
    /// The four corners are transformed and the axis-aligned box around
    /// them is returned, which over-estimates rotated curves.
    pub fn transform_bounds(&self, bounds: &BoundingBox) -> BoundingBox {
        if self.is_identity() {
            return *bounds;
        }

        let corners = [
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.y),
            Point::new(bounds.x, bounds.bottom()),
            Point::new(bounds.right(), bounds.bottom()),
        ];

        let first = self.transform_point(corners[0]);
        corners[1..]
            .iter()
            .map(|p| self.transform_point(*p))
            .fold(BoundingBox::new(first.x, first.y, 0.0, 0.0), |acc, p| {
                acc.expand_to_include(p)
            })
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in [self.a, self.b, self.c, self.d, self.e, self.f] {
            hash_number(v, state);
        }
    }
}

/// One function of a transform list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformFunction {
    Matrix(Matrix),
    Translate { tx: f64, ty: f64 },
    Scale { sx: f64, sy: f64 },
    Rotate { angle: f64, center: Option<Point> },
    SkewX(f64),
    SkewY(f64),
}

impl TransformFunction {
    pub fn name(&self) -> &'static str {
        match self {
            TransformFunction::Matrix(_) => "matrix",
            TransformFunction::Translate { .. } => "translate",
            TransformFunction::Scale { .. } => "scale",
            TransformFunction::Rotate { .. } => "rotate",
            TransformFunction::SkewX(_) => "skewX",
            TransformFunction::SkewY(_) => "skewY",
        }
    }

    /// Build a function from its name and arguments, checking the count
    pub fn from_parts(name: &str, args: &[f64]) -> Result<Option<Self>, ParseError> {
        let count = |expected: &str| {
            ParseError::argument_count(format!("{}({})", name, join_args(args)), expected, args.len())
        };

        let function = match (name, args) {
            ("matrix", &[a, b, c, d, e, f]) => TransformFunction::Matrix(Matrix::new(a, b, c, d, e, f)),
            ("matrix", _) => return Err(count("6")),
            ("translate", &[tx]) => TransformFunction::Translate { tx, ty: 0.0 },
            ("translate", &[tx, ty]) => TransformFunction::Translate { tx, ty },
            ("translate", _) => return Err(count("1 or 2")),
            ("scale", &[s]) => TransformFunction::Scale { sx: s, sy: s },
            ("scale", &[sx, sy]) => TransformFunction::Scale { sx, sy },
            ("scale", _) => return Err(count("1 or 2")),
            ("rotate", &[angle]) => TransformFunction::Rotate { angle, center: None },
            ("rotate", &[angle, cx, cy]) => TransformFunction::Rotate {
                angle,
                center: Some(Point::new(cx, cy)),
            },
            ("rotate", _) => return Err(count("1 or 3")),
            ("skewX", &[angle]) => TransformFunction::SkewX(angle),
            ("skewX", _) => return Err(count("1")),
            ("skewY", &[angle]) => TransformFunction::SkewY(angle),
            ("skewY", _) => return Err(count("1")),
            _ => return Ok(None),
        };
        Ok(Some(function))
    }

    pub fn args(&self) -> Vec<f64> {
        match *self {
            TransformFunction::Matrix(m) => vec![m.a, m.b, m.c, m.d, m.e, m.f],
            TransformFunction::Translate { tx, ty } => vec![tx, ty],
            TransformFunction::Scale { sx, sy } => vec![sx, sy],
            TransformFunction::Rotate { angle, center: None } => vec![angle],
            TransformFunction::Rotate {
                angle,
                center: Some(c),
            } => vec![angle, c.x, c.y],
            TransformFunction::SkewX(a) | TransformFunction::SkewY(a) => vec![a],
        }
    }

    pub fn to_matrix(&self) -> Matrix {
        match *self {
            TransformFunction::Matrix(m) => m,
            TransformFunction::Translate { tx, ty } => Matrix::translate(tx, ty),
            TransformFunction::Scale { sx, sy } => Matrix::scale(sx, sy),
            TransformFunction::Rotate { angle, center: None } => Matrix::rotate(angle),
            TransformFunction::Rotate {
                angle,
                center: Some(c),
            } => Matrix::translate(c.x, c.y)
                .multiply(&Matrix::rotate(angle))
                .multiply(&Matrix::translate(-c.x, -c.y)),
            TransformFunction::SkewX(a) => Matrix::skew_x(a),
            TransformFunction::SkewY(a) => Matrix::skew_y(a),
        }
    }
}

fn join_args(args: &[f64]) -> String {
    args.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), join_args(&self.args()))
    }
}

/// A parsed `transform` attribute
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformList {
    pub functions: Vec<TransformFunction>,
}

impl TransformList {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Compose the list into a single matrix
    pub fn to_matrix(&self) -> Matrix {
        self.functions
            .iter()
            .fold(Matrix::IDENTITY, |acc, function| acc.multiply(&function.to_matrix()))
    }
}

impl Hash for TransformList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for function in &self.functions {
            function.name().hash(state);
            for arg in function.args() {
                hash_number(arg, state);
            }
        }
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.functions.iter().map(|t| t.to_string()).collect();
        f.write_str(&parts.join(" "))
    }
}

/// Parse transform list text. Empty text is the identity list.
pub fn parse_transform(raw: &str) -> Result<TransformList, ParseError> {
    let raw_functions = grammar::parse(raw).map_err(|errs| {
        errs.into_iter()
            .next()
            .unwrap_or(ParseError::EmptyOrMissingInput)
    })?;

    let functions = raw_functions
        .into_iter()
        .map(|raw_fn| {
            TransformFunction::from_parts(&raw_fn.name, &raw_fn.args)?.ok_or(
                ParseError::UnknownTransformFunction {
                    name: raw_fn.name,
                    span: raw_fn.span,
                },
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TransformList { functions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_point(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_parse_each_function() {
        let list = parse_transform(
            "matrix(1 0 0 1 5 6) translate(3) scale(2,4) rotate(90 1 1) skewX(10) skewY(20)",
        )
        .expect("Should parse");
        assert_eq!(
            list.functions,
            vec![
                TransformFunction::Matrix(Matrix::new(1.0, 0.0, 0.0, 1.0, 5.0, 6.0)),
                TransformFunction::Translate { tx: 3.0, ty: 0.0 },
                TransformFunction::Scale { sx: 2.0, sy: 4.0 },
                TransformFunction::Rotate {
                    angle: 90.0,
                    center: Some(Point::new(1.0, 1.0))
                },
                TransformFunction::SkewX(10.0),
                TransformFunction::SkewY(20.0),
            ]
        );
    }

    #[test]
    fn test_uniform_scale() {
        let list = parse_transform("scale(3)").expect("Should parse");
        assert_eq!(list.functions, vec![TransformFunction::Scale { sx: 3.0, sy: 3.0 }]);
    }

    #[test]
    fn test_unknown_function() {
        let err = parse_transform("translate(1) wobble(3)").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownTransformFunction {
                name: "wobble".to_string(),
                span: 13..19,
            }
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        let err = parse_transform("rotate(1 2)").unwrap_err();
        assert_eq!(err, ParseError::argument_count("rotate(1 2)", "1 or 3", 2));
        assert!(parse_transform("matrix(1 2 3)").is_err());
        assert!(parse_transform("skewX()").is_err());
    }

    #[test]
    fn test_empty_is_identity() {
        let list = parse_transform("").expect("Should parse");
        assert!(list.is_empty());
        assert!(list.to_matrix().is_identity());
    }

    #[test]
    fn test_composition_order() {
        // scale applies first, then translate
        let list = parse_transform("translate(10 0) scale(2)").expect("Should parse");
        let p = list.to_matrix().transform_point(Point::new(1.0, 1.0));
        assert!(approx_point(p, Point::new(12.0, 2.0)));
    }

    #[test]
    fn test_rotate_about_center() {
        let list = parse_transform("rotate(90, 10, 10)").expect("Should parse");
        let p = list.to_matrix().transform_point(Point::new(20.0, 10.0));
        assert!(approx_point(p, Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_transform_bounds_rotated_square() {
        let bounds = BoundingBox::new(-1.0, -1.0, 2.0, 2.0);
        let rotated = Matrix::rotate(45.0).transform_bounds(&bounds);
        let half_diagonal = 2f64.sqrt();
        assert!((rotated.x + half_diagonal).abs() < 1e-9);
        assert!((rotated.width - 2.0 * half_diagonal).abs() < 1e-9);
    }

    #[test]
    fn test_display_round_trip() {
        let list = parse_transform("translate(10,20) rotate(45)").expect("Should parse");
        assert_eq!(list.to_string(), "translate(10 20) rotate(45)");
        assert_eq!(parse_transform(&list.to_string()), Ok(list));
    }
}
