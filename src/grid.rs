//! Ruled grid for the board background.
//!
//! The grid is a square of `size` meters centered on the world origin, split
//! into `divisions` cells per axis. Lines are produced in screen coordinates
//! so a renderer can draw them directly.

use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::types::Point;

/// Orientation of a grid line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOrientation {
    /// Constant world X
    Vertical,
    /// Constant world Y
    Horizontal,
}

/// Axis lines (world coordinate 0) are major, everything else is minor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Major,
    Minor,
}

impl LineKind {
    /// Stroke width in pixels
    pub fn stroke_width(&self) -> f64 {
        match self {
            LineKind::Major => 2.0,
            LineKind::Minor => 1.0,
        }
    }

    /// Stroke color as hex string
    pub fn color(&self) -> &'static str {
        match self {
            LineKind::Major => "#666666",
            LineKind::Minor => "#dddddd",
        }
    }
}

/// A grid line segment in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub start: Point,
    pub end: Point,
    pub orientation: LineOrientation,
    /// World coordinate the line sits on (X for vertical, Y for horizontal)
    pub world: f64,
    pub kind: LineKind,
}

/// Generate `divisions + 1` vertical lines followed by `divisions + 1`
/// horizontal lines, each group in increasing world coordinate.
///
/// Returns no lines when `divisions` is zero.
pub fn generate_grid_lines(size: f64, divisions: u32, ctx: &CoordinateContext) -> Vec<GridLine> {
    if divisions == 0 {
        return Vec::new();
    }

    let half = size / 2.0;
    let step = size / f64::from(divisions);
    let mut lines = Vec::with_capacity(2 * (divisions as usize + 1));

    // Index-based positions avoid accumulated float drift; the axis line is
    // detected by index so it is exact even when `step` is not representable.
    let coord = |i: u32| -> f64 {
        if i == divisions { half } else { -half + f64::from(i) * step }
    };
    let kind = |i: u32| -> LineKind {
        if 2 * u64::from(i) == u64::from(divisions) { LineKind::Major } else { LineKind::Minor }
    };

    for i in 0..=divisions {
        let x = if kind(i) == LineKind::Major { 0.0 } else { coord(i) };
        lines.push(GridLine {
            start: CoordinateConverter::world_to_screen(Point::new(x, -half), ctx),
            end: CoordinateConverter::world_to_screen(Point::new(x, half), ctx),
            orientation: LineOrientation::Vertical,
            world: x,
            kind: kind(i),
        });
    }

    for i in 0..=divisions {
        let y = if kind(i) == LineKind::Major { 0.0 } else { coord(i) };
        lines.push(GridLine {
            start: CoordinateConverter::world_to_screen(Point::new(-half, y), ctx),
            end: CoordinateConverter::world_to_screen(Point::new(half, y), ctx),
            orientation: LineOrientation::Horizontal,
            world: y,
            kind: kind(i),
        });
    }

    lines
}
