// src/projection.rs

//! Longitude/latitude to canvas projection (simplified spherical Mercator).

use crate::constants::{M_180_PI, M_PI_180, M_PI_2, M_PI_4, MAX_MERCATOR_LATITUDE_DEG};
use crate::types::{Canvas, GeoCoordinate, PlanarPoint};

/// Converts degrees to radians.
#[inline]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

/// Converts radians to degrees.
#[inline]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

/// Clamps a latitude in degrees to the Mercator band `[-85, 85]`.
///
/// `f64::clamp` passes NaN through unchanged.
#[inline]
#[must_use]
pub fn clamp_latitude(latitude: f64) -> f64 {
  latitude.clamp(-MAX_MERCATOR_LATITUDE_DEG, MAX_MERCATOR_LATITUDE_DEG)
}

/// Projects a longitude/latitude pair (degrees) onto `canvas`.
///
/// * `x = (lng + 180) / 360 * W`
/// * `y = H/2 - W/(2*pi) * ln(tan(pi/4 + lat/2))`
///
/// North is up: `y` decreases as latitude increases. Non-finite input yields
/// non-finite output.
#[must_use]
pub fn project(longitude: f64, latitude: f64, canvas: &Canvas) -> PlanarPoint {
  let lat_rad = degs_to_rads(clamp_latitude(latitude));
  let x = (longitude + 180.0) / 360.0 * canvas.width;
  let y = canvas.height / 2.0 - canvas.scale() * (M_PI_4 + lat_rad / 2.0).tan().ln();
  PlanarPoint { x, y }
}

/// [`project`] for a [`GeoCoordinate`].
#[inline]
#[must_use]
pub fn project_coordinate(coord: &GeoCoordinate, canvas: &Canvas) -> PlanarPoint {
  project(coord.longitude, coord.latitude, canvas)
}

/// Projects every coordinate, preserving order.
pub fn project_all(coords: &[GeoCoordinate], canvas: &Canvas) -> Vec<PlanarPoint> {
  coords.iter().map(|c| project_coordinate(c, canvas)).collect()
}

/// Inverse of [`project`].
///
/// Points beyond the projected `[-85, 85]` band are clamped back onto it.
#[must_use]
pub fn unproject(point: &PlanarPoint, canvas: &Canvas) -> GeoCoordinate {
  let longitude = point.x / canvas.width * 360.0 - 180.0;
  let merc_y = (canvas.height / 2.0 - point.y) / canvas.scale();
  let lat_rad = 2.0 * merc_y.exp().atan() - M_PI_2;
  GeoCoordinate {
    longitude,
    latitude: clamp_latitude(rads_to_degs(lat_rad)),
  }
}
