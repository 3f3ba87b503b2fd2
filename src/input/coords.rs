//! Coordinate conversion between world space (meters) and screen space (pixels).
//!
//! World Y points up, screen Y points down, so the Y axis is flipped on the way
//! through. Zoom is never zero: `ViewState` clamps it to the supported range.

use crate::types::{Point, ViewState, ViewportGeometry};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub zoom: f64,
    pub pan: Point,
    pub center: Point,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(zoom: f64, pan: Point, center: Point) -> Self {
        Self { zoom, pan, center }
    }

    /// Context for the current view on a viewport of the given size
    #[inline]
    pub fn from_view(view: &ViewState, viewport: &ViewportGeometry) -> Self {
        Self::new(view.zoom(), view.pan, viewport.center())
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert world position to screen position
    #[inline]
    pub fn world_to_screen(world: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            world.x * ctx.zoom + ctx.center.x + ctx.pan.x,
            -world.y * ctx.zoom + ctx.center.y + ctx.pan.y,
        )
    }

    /// Convert screen position to world position
    #[inline]
    pub fn screen_to_world(screen: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            (screen.x - ctx.center.x - ctx.pan.x) / ctx.zoom,
            -((screen.y - ctx.center.y - ctx.pan.y) / ctx.zoom),
        )
    }

    /// Convert a screen length (pixels) to a world length (meters)
    #[inline]
    pub fn length_screen_to_world(length: f64, zoom: f64) -> f64 {
        length / zoom
    }
}
