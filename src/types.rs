//! Core data structures shared by the projection, path and matching stages.

use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, M_2PI, PATH_PRECISION, PATH_SCALE};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::str::FromStr;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
  /// Longitude in degrees, `[-180, 180]`.
  pub longitude: f64,
  /// Latitude in degrees, `[-90, 90]`.
  pub latitude: f64,
}

impl GeoCoordinate {
  #[inline]
  pub const fn new(longitude: f64, latitude: f64) -> Self {
    Self { longitude, latitude }
  }
}

/// A point in canvas pixel space. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanarPoint {
  pub x: f64,
  pub y: f64,
}

impl PlanarPoint {
  #[inline]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Fixed-size drawing surface the projection maps onto.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Canvas {
  pub width: f64,
  pub height: f64,
}

impl Canvas {
  #[inline]
  pub const fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }

  /// Mercator scale factor: pixels per radian of longitude.
  #[inline]
  pub fn scale(&self) -> f64 {
    self.width / M_2PI
  }

  /// The viewBox covering the whole canvas.
  #[inline]
  pub fn full_view_box(&self) -> ViewBox {
    ViewBox {
      min_x: 0.0,
      min_y: 0.0,
      width: self.width,
      height: self.height,
    }
  }
}

impl Default for Canvas {
  fn default() -> Self {
    Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
  }
}

/// An SVG `viewBox` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewBox {
  pub min_x: f64,
  pub min_y: f64,
  pub width: f64,
  pub height: f64,
}

impl ViewBox {
  #[inline]
  pub fn max_x(&self) -> f64 {
    self.min_x + self.width
  }

  #[inline]
  pub fn max_y(&self) -> f64 {
    self.min_y + self.height
  }

  /// Whether `point` lies inside the box (edges included).
  #[inline]
  pub fn contains(&self, point: &PlanarPoint) -> bool {
    (self.min_x..=self.max_x()).contains(&point.x) && (self.min_y..=self.max_y()).contains(&point.y)
  }
}

// Adding `0.0` turns a `-0.0` result into `0.0` so it never prints as "-0.00".

/// Rounds to the nearest multiple of `1 / PATH_SCALE`.
#[inline]
pub(crate) fn round_to_grid(v: f64) -> f64 {
  (v * PATH_SCALE).round() / PATH_SCALE + 0.0
}

/// Largest grid value not above `v`.
#[inline]
fn floor_to_grid(v: f64) -> f64 {
  let f = (v * PATH_SCALE).floor() / PATH_SCALE;
  if f > v {
    f - 1.0 / PATH_SCALE + 0.0
  } else {
    f + 0.0
  }
}

/// Smallest grid value not below `v`.
#[inline]
fn ceil_to_grid(v: f64) -> f64 {
  let c = (v * PATH_SCALE).ceil() / PATH_SCALE;
  if c < v {
    c + 1.0 / PATH_SCALE + 0.0
  } else {
    c + 0.0
  }
}

/// Grid extent from `min` (already on the grid) reaching at least `max` once
/// the printed numbers are added back together.
#[inline]
fn extent_on_grid(min: f64, max: f64) -> f64 {
  let extent = round_to_grid(ceil_to_grid(max) - min);
  if min + extent < max {
    round_to_grid(extent + 1.0 / PATH_SCALE)
  } else {
    extent
  }
}

impl fmt::Display for ViewBox {
  /// Writes `"min_x min_y width height"` on the 2-decimal grid. The minimum
  /// corner is rounded down and the maximum corner up, so the written box
  /// always encloses `self`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let min_x = floor_to_grid(self.min_x);
    let min_y = floor_to_grid(self.min_y);
    let width = extent_on_grid(min_x, self.max_x());
    let height = extent_on_grid(min_y, self.max_y());
    write!(f, "{min_x:.p$} {min_y:.p$} {width:.p$} {height:.p$}", p = PATH_PRECISION)
  }
}

impl FromStr for ViewBox {
  type Err = MapError;

  /// Parses `"min_x min_y width height"`; commas are accepted as separators.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.replace(',', " ");
    let parts: Vec<f64> = normalized
      .split_whitespace()
      .map(str::parse::<f64>)
      .collect::<Result<_, _>>()
      .map_err(|_| MapError::ViewBoxParse)?;

    match parts.as_slice() {
      [min_x, min_y, width, height] => Ok(Self {
        min_x: *min_x,
        min_y: *min_y,
        width: *width,
        height: *height,
      }),
      _ => Err(MapError::ViewBoxParse),
    }
  }
}

/// A named polygon approximating a geographic area.
///
/// The outline is an open ring: closure back to the first vertex is implied.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionShape {
  pub id: String,
  pub label: String,
  pub description: String,
  pub outline: Vec<GeoCoordinate>,
}

/// A portfolio project as supplied by the hosting application.
///
/// Only `name` and `location` take part in location matching; the other
/// fields are carried through for tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectRecord {
  pub name: String,
  pub value: String,
  pub role: String,
  pub company: String,
  pub client: Option<String>,
  pub location: Option<String>,
  pub achievement: Option<String>,
  pub contribution: Option<String>,
  pub scope: Option<String>,
}

impl ProjectRecord {
  /// Minimal record with just a name, handy for tests and demos.
  pub fn named(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn with_location(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }
}

/// One row of the keyword location table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectLocationEntry {
  /// Lowercase substrings tested against the project search text.
  pub keywords: Vec<String>,
  pub coordinate: GeoCoordinate,
  pub region_id: String,
  pub label: String,
}

impl ProjectLocationEntry {
  /// Builds an entry, lowercasing every keyword.
  pub fn new<K, S>(keywords: K, coordinate: GeoCoordinate, region_id: &str, label: &str) -> Self
  where
    K: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self {
      keywords: keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect(),
      coordinate,
      region_id: region_id.to_owned(),
      label: label.to_owned(),
    }
  }
}

/// A project placed on the canvas for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMarker<'a> {
  pub project: &'a ProjectRecord,
  pub region_id: &'a str,
  pub coordinate: GeoCoordinate,
  pub point: PlanarPoint,
  pub label: &'a str,
}

/// Errors surfaced by the fallible edges of the crate (parsing and table
/// validation). Projection and path rendering are total and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum MapError {
  /// A viewBox string did not contain exactly four numbers.
  ViewBoxParse = 1,
  /// A configuration document could not be decoded.
  ConfigParse = 2,
  /// A location entry references a region id that is not declared.
  UnknownRegion = 3,
  /// A location table has no entries.
  EmptyTable = 4,
}

impl fmt::Display for MapError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      MapError::ViewBoxParse => "viewBox must contain four numbers",
      MapError::ConfigParse => "map configuration could not be parsed",
      MapError::UnknownRegion => "location entry references an unknown region",
      MapError::EmptyTable => "location table is empty",
    };
    f.write_str(msg)
  }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_canvas_default_and_scale() {
    let canvas = Canvas::default();
    assert_eq!(canvas.width, 900.0);
    assert_eq!(canvas.height, 450.0);
    assert!((canvas.scale() - 900.0 / (2.0 * std::f64::consts::PI)).abs() < 1e-12);
  }

  #[test]
  fn test_view_box_display() {
    let vb = ViewBox {
      min_x: -1.5,
      min_y: 2.0,
      width: 10.126,
      height: 3.0,
    };
    assert_eq!(vb.to_string(), "-1.50 2.00 10.13 3.00");
  }

  #[test]
  fn test_view_box_display_encloses_unrounded_box() {
    let vb = ViewBox {
      min_x: 0.004,
      min_y: -0.006,
      width: 1.004,
      height: 0.502,
    };
    // max corner is (1.008, 0.496)
    assert_eq!(vb.to_string(), "0.00 -0.01 1.01 0.51");
  }

  #[test]
  fn test_view_box_display_no_negative_zero() {
    let vb = ViewBox {
      min_x: -0.0,
      min_y: 0.0,
      width: 2.0,
      height: 2.0,
    };
    assert_eq!(vb.to_string(), "0.00 0.00 2.00 2.00");
    assert_eq!(round_to_grid(-0.004).to_string(), "0");
  }

  #[test]
  fn test_view_box_parse() {
    let vb: ViewBox = "273.4,-265.06 4160.6,3501.06".parse().unwrap();
    assert_eq!(vb.min_x, 273.4);
    assert_eq!(vb.min_y, -265.06);
    assert_eq!(vb.width, 4160.6);
    assert_eq!(vb.height, 3501.06);

    assert_eq!("0 0 10".parse::<ViewBox>(), Err(MapError::ViewBoxParse));
    assert_eq!("0 0 ten 10".parse::<ViewBox>(), Err(MapError::ViewBoxParse));
    assert_eq!("".parse::<ViewBox>(), Err(MapError::ViewBoxParse));
  }

  #[test]
  fn test_view_box_contains_edges() {
    let vb = ViewBox {
      min_x: 0.0,
      min_y: 0.0,
      width: 10.0,
      height: 5.0,
    };
    assert!(vb.contains(&PlanarPoint::new(0.0, 0.0)));
    assert!(vb.contains(&PlanarPoint::new(10.0, 5.0)));
    assert!(!vb.contains(&PlanarPoint::new(10.01, 5.0)));
  }

  #[test]
  fn test_location_entry_lowercases_keywords() {
    let entry = ProjectLocationEntry::new(["I-69", "Texas"], GeoCoordinate::new(-95.0, 30.0), "north-america", "TX");
    assert_eq!(entry.keywords, vec!["i-69".to_string(), "texas".to_string()]);
  }

  #[test]
  fn test_error_display() {
    assert_eq!(MapError::EmptyTable.to_string(), "location table is empty");
    assert_eq!(MapError::UnknownRegion as u32, 3);
  }
}
