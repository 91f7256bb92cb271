//! Canvas defaults and math constants.

use std::f64::consts;

// Mathematical constants
/// pi / 4.0
pub const M_PI_4: f64 = consts::FRAC_PI_4;
/// pi / 2.0
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2.0 * PI
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 900.0;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 450.0;

/// Latitudes are clamped to `[-MAX, MAX]` before projecting; the Mercator
/// `y` diverges at the poles.
pub const MAX_MERCATOR_LATITUDE_DEG: f64 = 85.0;

/// Padding added on every side of a region's bounding box.
pub const DEFAULT_VIEWBOX_PADDING: f64 = 20.0;

/// Lower bound for viewBox width and height.
pub const MIN_VIEWBOX_EXTENT: f64 = 1.0;

/// Decimal digits used when formatting path and viewBox numbers.
pub const PATH_PRECISION: usize = 2;
/// `10^PATH_PRECISION`, the grid numbers are snapped to before formatting.
pub const PATH_SCALE: f64 = 100.0;

/// Radius of a project marker circle, in canvas pixels.
pub const MARKER_RADIUS: f64 = 5.0;
