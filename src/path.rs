// src/path.rs

//! Planar polygons to SVG path and viewBox descriptors.

use crate::bbox::PlanarBBox;
use crate::constants::PATH_PRECISION;
use crate::projection::project_all;
use crate::types::{round_to_grid, Canvas, PlanarPoint, RegionShape, ViewBox};

/// Builds a closed SVG path (`M x,y L x,y ... Z`) through `points`.
///
/// An empty slice yields an empty string. A single point yields `"M{x},{y} Z"`.
pub fn to_path(points: &[PlanarPoint]) -> String {
  let Some((first, rest)) = points.split_first() else {
    return String::new();
  };

  let mut out = String::with_capacity(16 * points.len() + 2);
  out.push('M');
  out.push_str(&format_point(first));
  for pt in rest {
    out.push_str(" L");
    out.push_str(&format_point(pt));
  }
  out.push_str(" Z");
  out
}

/// `"x,y"` with both numbers snapped to the path grid (no `-0.00`).
pub(crate) fn format_point(pt: &PlanarPoint) -> String {
  format!(
    "{:.p$},{:.p$}",
    round_to_grid(pt.x),
    round_to_grid(pt.y),
    p = PATH_PRECISION
  )
}

/// Formats `points` as an SVG `points` attribute (`"x1,y1 x2,y2 ..."`).
pub fn to_polyline_points(points: &[PlanarPoint]) -> String {
  points
    .iter()
    .map(format_point)
    .collect::<Vec<_>>()
    .join(" ")
}

/// ViewBox framing `points` with `padding` on every side.
///
/// An empty slice falls back to the full `canvas`. Width and height never
/// drop below 1.
pub fn to_view_box(points: &[PlanarPoint], padding: f64, canvas: &Canvas) -> ViewBox {
  match PlanarBBox::from_points(points) {
    Some(bbox) => bbox.expand(padding).to_view_box(),
    None => canvas.full_view_box(),
  }
}

/// Projects a region outline and renders it as a closed path.
pub fn region_path(region: &RegionShape, canvas: &Canvas) -> String {
  to_path(&project_all(&region.outline, canvas))
}

/// Projects a region outline and frames it with `padding`.
pub fn region_view_box(region: &RegionShape, padding: f64, canvas: &Canvas) -> ViewBox {
  to_view_box(&project_all(&region.outline, canvas), padding, canvas)
}

/// Even-odd point-in-polygon test over an implicitly closed ring.
///
/// Points exactly on an edge may fall either side; hover hit-testing does not
/// care about the boundary.
pub fn point_in_polygon(point: &PlanarPoint, ring: &[PlanarPoint]) -> bool {
  let Some(bbox) = PlanarBBox::from_points(ring) else {
    return false;
  };
  // Fail fast if we're outside the bounding box.
  if !bbox.contains(point) {
    return false;
  }

  let mut inside = false;
  // Start with the closing edge (last -> first).
  let mut b = ring[ring.len() - 1];
  for &a in ring {
    // Edge straddles the horizontal ray through `point`
    if (a.y > point.y) != (b.y > point.y) {
      let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
      if point.x < x_cross {
        inside = !inside;
      }
    }
    b = a;
  }
  inside
}
