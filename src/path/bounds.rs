//! Geometry types and bounding box tracking for path data

use std::hash::{Hash, Hasher};

use crate::path::segment::{PathCommand, PathSegment};
use crate::value::hash_number;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point taken as an offset from `origin`
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(origin.x + self.x, origin.y + self.y)
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_number(self.x, state);
        hash_number(self.y, state);
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Expand this bounding box to include a point
    pub fn expand_to_include(&self, point: Point) -> BoundingBox {
        let x = self.x.min(point.x);
        let y = self.y.min(point.y);
        let right = self.right().max(point.x);
        let bottom = self.bottom().max(point.y);
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

/// Running state while walking a path: pen, subpath start and extent.
///
/// Only pen positions are tracked. Curve control points and the true
/// extrema of curves and arcs are not included, so curved paths can
/// bulge outside the reported box.
#[derive(Debug, Clone, Default)]
pub struct BoundsTracker {
    extent: Option<BoundingBox>,
    pen: Point,
    subpath_start: Point,
}

impl BoundsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pen(&self) -> Point {
        self.pen
    }

    /// The box so far, `None` until a drawing command ran
    pub fn extent(&self) -> Option<BoundingBox> {
        self.extent
    }

    fn include(&mut self, point: Point) {
        self.extent = Some(match self.extent {
            Some(bounds) => bounds.expand_to_include(point),
            None => BoundingBox::new(point.x, point.y, 0.0, 0.0),
        });
    }

    fn target(&self, point: Point, relative: bool) -> Point {
        if relative {
            point.offset_from(self.pen)
        } else {
            point
        }
    }

    /// Where the pen ends up after `segment`, without moving it
    pub fn end_point(&self, segment: &PathSegment) -> Point {
        let relative = segment.relative;
        match segment.command {
            PathCommand::Move(p)
            | PathCommand::Line(p)
            | PathCommand::QuadraticBezierContinue(p)
            | PathCommand::CubicBezier { end: p, .. }
            | PathCommand::CubicBezierContinue { end: p, .. }
            | PathCommand::QuadraticBezier { end: p, .. }
            | PathCommand::Arc { end: p, .. } => self.target(p, relative),
            PathCommand::LineHorizontal(x) => {
                let x = if relative { self.pen.x + x } else { x };
                Point::new(x, self.pen.y)
            }
            PathCommand::LineVertical(y) => {
                let y = if relative { self.pen.y + y } else { y };
                Point::new(self.pen.x, y)
            }
            PathCommand::Close => self.subpath_start,
        }
    }

    /// Advance the pen over one segment, growing the box for drawing commands
    pub fn apply(&mut self, segment: &PathSegment) {
        let end = self.end_point(segment);
        match segment.command {
            PathCommand::Move(_) => {
                self.subpath_start = end;
            }
            PathCommand::Close => {}
            _ => {
                self.include(self.pen);
                self.include(end);
            }
        }
        self.pen = end;
    }

    /// The final box. Without any drawing command this is an empty box at the pen.
    pub fn finish(self) -> BoundingBox {
        self.extent
            .unwrap_or(BoundingBox::new(self.pen.x, self.pen.y, 0.0, 0.0))
    }
}
