#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)] // Common in coordinate math (min_x / max_x)

//! `xs-folio-map` turns portfolio project records into decorative SVG maps.
//!
//! The crate is a pure function pipeline:
//!
//! * static region outlines → [`project`] → [`to_path`] / [`to_view_box`]
//! * project records → [`LocationTable::match_project`] → [`project`] → marker point
//!
//! All lookup data is passed in explicitly (see [`data`] for the authored
//! tables), so every operation can be tested in isolation.

pub mod bbox;
pub mod config;
pub mod constants;
pub mod data;
pub mod markers;
pub mod matching;
pub mod path;
pub mod projection;
pub mod svg;
pub mod types;

pub use bbox::PlanarBBox;
pub use config::{CoastlineResolution, Language, MapConfig};
pub use constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_VIEWBOX_PADDING, MAX_MERCATOR_LATITUDE_DEG};
pub use markers::{build_markers, group_by_region};
pub use matching::{search_text, LocationTable};
pub use path::{point_in_polygon, region_path, region_view_box, to_path, to_polyline_points, to_view_box};
pub use projection::{
  clamp_latitude, degs_to_rads, project, project_all, project_coordinate, rads_to_degs, unproject,
};
pub use svg::render_map;
pub use types::{
  Canvas, GeoCoordinate, MapError, PlanarPoint, ProjectLocationEntry, ProjectMarker, ProjectRecord, RegionShape,
  ViewBox,
};
