//! Cubic lane curves between a node and the hub.

use orbitkit_core::Point;
use serde::Serialize;

/// Which pair of box edges a lane connects.
///
/// `Horizontal` lanes leave the node's left or right edge and enter the hub's
/// opposite edge; `Vertical` lanes use the top/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LaneAxis {
    Horizontal,
    Vertical,
}

/// A cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicCurve {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicCurve {
    /// Evaluates the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let a = u * u * u;
        let b = 3.0 * u * u * t;
        let c = 3.0 * u * t * t;
        let d = t * t * t;
        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }

    /// SVG path data (`M ... C ...`) with two decimals.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {:.2} {:.2} C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// Builds an S-shaped lane between two anchors.
///
/// Horizontal lanes put both control points on the vertical line through the
/// horizontal midpoint, each at its own anchor's height. Vertical lanes are the
/// same construction with the axes swapped.
pub fn build_curve(start: Point, end: Point, axis: LaneAxis) -> CubicCurve {
    let (control1, control2) = match axis {
        LaneAxis::Horizontal => {
            let mid_x = (start.x + end.x) / 2.0;
            (Point::new(mid_x, start.y), Point::new(mid_x, end.y))
        }
        LaneAxis::Vertical => {
            let mid_y = (start.y + end.y) / 2.0;
            (Point::new(start.x, mid_y), Point::new(end.x, mid_y))
        }
    };
    CubicCurve {
        start,
        control1,
        control2,
        end,
    }
}
