// src/bbox.rs

//! Axis-aligned bounding boxes in canvas space.

use crate::constants::MIN_VIEWBOX_EXTENT;
use crate::types::{PlanarPoint, ViewBox};

/// Axis-aligned bounding box of a set of planar points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanarBBox {
  pub min_x: f64,
  pub min_y: f64,
  pub max_x: f64,
  pub max_y: f64,
}

impl PlanarBBox {
  /// Bounding box of `points`, or `None` for an empty slice.
  pub fn from_points(points: &[PlanarPoint]) -> Option<Self> {
    let (first, rest) = points.split_first()?;
    let mut bbox = PlanarBBox {
      min_x: first.x,
      min_y: first.y,
      max_x: first.x,
      max_y: first.y,
    };
    for p in rest {
      bbox.min_x = bbox.min_x.min(p.x);
      bbox.min_y = bbox.min_y.min(p.y);
      bbox.max_x = bbox.max_x.max(p.x);
      bbox.max_y = bbox.max_y.max(p.y);
    }
    Some(bbox)
  }

  #[inline]
  pub fn width(&self) -> f64 {
    self.max_x - self.min_x
  }

  #[inline]
  pub fn height(&self) -> f64 {
    self.max_y - self.min_y
  }

  #[inline]
  pub fn center(&self) -> PlanarPoint {
    PlanarPoint {
      x: (self.min_x + self.max_x) * 0.5,
      y: (self.min_y + self.max_y) * 0.5,
    }
  }

  /// Grows the box by `padding` on every side.
  #[inline]
  #[must_use]
  pub fn expand(&self, padding: f64) -> Self {
    PlanarBBox {
      min_x: self.min_x - padding,
      min_y: self.min_y - padding,
      max_x: self.max_x + padding,
      max_y: self.max_y + padding,
    }
  }

  /// Whether `point` lies inside the box (edges included).
  #[inline]
  #[must_use]
  pub fn contains(&self, point: &PlanarPoint) -> bool {
    (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
  }

  /// Converts to a viewBox, flooring width and height at [`MIN_VIEWBOX_EXTENT`].
  pub fn to_view_box(&self) -> ViewBox {
    ViewBox {
      min_x: self.min_x,
      min_y: self.min_y,
      width: self.width().max(MIN_VIEWBOX_EXTENT),
      height: self.height().max(MIN_VIEWBOX_EXTENT),
    }
  }
}
