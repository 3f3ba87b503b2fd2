//! Core types for the microphone board.
//!
//! This module defines the value types shared by the transform, the input
//! state machine, the point set and the exporters.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIC_ID_PREFIX, MIN_ZOOM, ZOOM_STEP};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D position or delta.
///
/// Used both for world coordinates (meters) and screen coordinates (pixels);
/// the meaning comes from the context it is passed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Component-wise difference `self - other`
    #[inline]
    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel size of the rendering surface.
///
/// Passed explicitly to every transform instead of reading the window size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportGeometry {
    pub width: f64,
    pub height: f64,
}

impl ViewportGeometry {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center of the surface relative to its top-left corner
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

// ============================================================================
// Microphones
// ============================================================================

/// Identifier of a microphone, rendered as `mic-<n>`.
///
/// Ids come from a monotonic counter owned by the point set and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MicId(u64);

impl MicId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MIC_ID_PREFIX, self.0)
    }
}

impl FromStr for MicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(MIC_ID_PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
            .map(MicId)
            .ok_or_else(|| format!("invalid microphone id: {s}"))
    }
}

impl Serialize for MicId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MicId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A named point in world space (meters).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Microphone {
    /// Unique within the collection, fixed at creation
    pub id: MicId,
    pub x: f64,
    pub y: f64,
}

impl Microphone {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ============================================================================
// View
// ============================================================================

/// Zoom and pan of the viewport. Transient, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViewState {
    /// Pixels per world meter, always within [`MIN_ZOOM`, `MAX_ZOOM`]
    zoom: f64,
    /// Pixel offset applied after scaling
    pub pan: Point,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Point::default(),
        }
    }
}

impl ViewState {
    pub fn new(zoom: f64, pan: Point) -> Self {
        let mut view = Self { zoom: DEFAULT_ZOOM, pan };
        view.set_zoom(zoom);
        view
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom, clamped to the supported range. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn pan_by(&mut self, delta: Point) {
        self.pan = self.pan.offset(delta.x, delta.y);
    }

    pub fn reset(&mut self, zoom: f64) {
        self.pan = Point::default();
        self.set_zoom(zoom);
    }
}

// ============================================================================
// Modes
// ============================================================================

/// Interpretation applied to click gestures on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Pan,
    #[default]
    Add,
    Edit,
    Delete,
}

/// Pointer cursor a host should show for a mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Grab,
    Crosshair,
    NotAllowed,
    Pointer,
}

impl Mode {
    /// Keyboard shortcut: digits 1-4 select pan, add, edit, delete
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Mode::Pan),
            '2' => Some(Mode::Add),
            '3' => Some(Mode::Edit),
            '4' => Some(Mode::Delete),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Mode::Pan => "pan",
            Mode::Add => "add",
            Mode::Edit => "edit",
            Mode::Delete => "delete",
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        match self {
            Mode::Pan => CursorStyle::Grab,
            Mode::Add => CursorStyle::Crosshair,
            Mode::Delete => CursorStyle::NotAllowed,
            Mode::Edit => CursorStyle::Pointer,
        }
    }

    pub fn all() -> &'static [Mode] {
        &[Mode::Pan, Mode::Add, Mode::Edit, Mode::Delete]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::all()
            .iter()
            .copied()
            .find(|mode| mode.token() == s)
            .ok_or_else(|| format!("unknown mode: {s}"))
    }
}
