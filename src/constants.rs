//! Application-wide constants.
//!
//! Centralizes magic numbers for the viewport, the grid and pointer handling.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level in pixels per meter
pub const MIN_ZOOM: f64 = 20.0;

/// Maximum zoom level in pixels per meter
pub const MAX_ZOOM: f64 = 200.0;

/// Default zoom level in pixels per meter
pub const DEFAULT_ZOOM: f64 = 50.0;

/// Multiplicative step applied by the zoom in / zoom out controls
pub const ZOOM_STEP: f64 = 1.2;

// ============================================================================
// Grid
// ============================================================================

/// Side length of the ruled grid in meters (10x10 m)
pub const DEFAULT_GRID_SIZE: f64 = 10.0;

/// Number of cells along each axis (lines every 0.5 m)
pub const DEFAULT_GRID_DIVISIONS: u32 = 20;

// ============================================================================
// Input Handling
// ============================================================================

/// Maximum pointer displacement (per axis, in pixels) for a gesture to count as a click
pub const CLICK_TOLERANCE: f64 = 5.0;

/// Radius of a rendered microphone marker in pixels
pub const MARKER_RADIUS: f64 = 6.0;

/// Tooltip offset from the hovered marker, in pixels
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -30.0);

// ============================================================================
// Export
// ============================================================================

/// Decimal places used for exported and displayed coordinates
pub const EXPORT_PRECISION: usize = 4;

/// Prefix of generated microphone ids
pub const MIC_ID_PREFIX: &str = "mic-";
