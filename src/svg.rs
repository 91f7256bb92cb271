// src/svg.rs

//! Assembles region paths and project markers into a standalone SVG document.

use crate::config::MapConfig;
use crate::constants::{MARKER_RADIUS, PATH_PRECISION};
use crate::path::region_path;
use crate::types::{round_to_grid, ProjectMarker, RegionShape};
use log::trace;

/// Escapes the five XML special characters.
pub fn escape_xml(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      _ => out.push(c),
    }
  }
  out
}

/// Renders `regions` and `markers` onto the full canvas of `config`.
///
/// Regions become `<path class="region">` elements and markers become
/// `<circle class="marker">` elements, each carrying a `<title>` tooltip.
pub fn render_map(config: &MapConfig, regions: &[RegionShape], markers: &[ProjectMarker<'_>]) -> String {
  let canvas = &config.canvas;
  let mut out = String::new();

  out.push_str(&format!(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" width=\"{}\" height=\"{}\" role=\"img\">\n",
    canvas.full_view_box(),
    canvas.width,
    canvas.height
  ));
  out.push_str(&format!("  <title>{}</title>\n", escape_xml(config.language.title())));

  out.push_str("  <g class=\"regions\">\n");
  for region in regions {
    let d = region_path(region, canvas);
    if d.is_empty() {
      trace!("region {:?} has no outline, skipped", region.id);
      continue;
    }
    out.push_str(&format!(
      "    <path class=\"region\" id=\"{}\" d=\"{}\"><title>{}</title></path>\n",
      escape_xml(&region.id),
      d,
      escape_xml(&region.label)
    ));
  }
  out.push_str("  </g>\n");

  out.push_str("  <g class=\"markers\">\n");
  for marker in markers {
    out.push_str(&format!(
      "    <circle class=\"marker\" data-region=\"{}\" cx=\"{:.p$}\" cy=\"{:.p$}\" r=\"{}\"><title>{} ({})</title></circle>\n",
      escape_xml(marker.region_id),
      round_to_grid(marker.point.x),
      round_to_grid(marker.point.y),
      MARKER_RADIUS,
      escape_xml(&marker.project.name),
      escape_xml(marker.label),
      p = PATH_PRECISION
    ));
  }
  out.push_str("  </g>\n");
  out.push_str("</svg>\n");
  out
}
