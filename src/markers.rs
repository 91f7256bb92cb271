// src/markers.rs

//! Per-render marker derivation.

use crate::matching::LocationTable;
use crate::projection::project_coordinate;
use crate::types::{Canvas, ProjectMarker, ProjectRecord};
use log::debug;

/// Places every project that matches `table` on `canvas`, in input order.
///
/// Projects without a keyword match are skipped.
pub fn build_markers<'a>(
  projects: &'a [ProjectRecord],
  table: &'a LocationTable,
  canvas: &Canvas,
) -> Vec<ProjectMarker<'a>> {
  let mut markers = Vec::with_capacity(projects.len());
  for project in projects {
    let Some(entry) = table.match_project(project) else {
      debug!("no location for project {:?}, marker omitted", project.name);
      continue;
    };
    markers.push(ProjectMarker {
      project,
      region_id: &entry.region_id,
      coordinate: entry.coordinate,
      point: project_coordinate(&entry.coordinate, canvas),
      label: &entry.label,
    });
  }
  debug!("placed {} of {} projects", markers.len(), projects.len());
  markers
}

/// Groups markers by region, regions ordered by first appearance.
pub fn group_by_region<'m, 'a>(markers: &'m [ProjectMarker<'a>]) -> Vec<(&'a str, Vec<&'m ProjectMarker<'a>>)> {
  let mut groups: Vec<(&'a str, Vec<&'m ProjectMarker<'a>>)> = Vec::new();
  for marker in markers {
    match groups.iter_mut().find(|(id, _)| *id == marker.region_id) {
      Some((_, members)) => members.push(marker),
      None => groups.push((marker.region_id, vec![marker])),
    }
  }
  groups
}
