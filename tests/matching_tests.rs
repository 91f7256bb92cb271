// tests/matching_tests.rs

use xs_folio_map::data::{default_location_table, world_regions, NORTH_AMERICA};
use xs_folio_map::*;

fn entry(keywords: &[&str], label: &str) -> ProjectLocationEntry {
  ProjectLocationEntry::new(keywords.iter().copied(), GeoCoordinate::new(0.0, 0.0), NORTH_AMERICA, label)
}

#[test]
fn test_i69_matches_keyword() {
  let table = LocationTable::new(vec![entry(&["i-69"], "I-69")]);
  let hit = table.match_project(&ProjectRecord::named("I-69 Widening"));
  assert_eq!(hit.map(|e| e.label.as_str()), Some("I-69"));
}

#[test]
fn test_no_overlap_no_entry() {
  let table = LocationTable::new(vec![entry(&["i-69"], "I-69")]);
  assert!(table.match_project(&ProjectRecord::named("Golden Gate Retrofit")).is_none());
}

#[test]
fn test_first_declared_entry_wins_over_longer_keyword() {
  let table = LocationTable::new(vec![entry(&["bridge"], "first"), entry(&["harbour bridge"], "second")]);
  let hit = table.match_project(&ProjectRecord::named("Harbour Bridge Rehab")).unwrap();
  assert_eq!(hit.label, "first");
}

#[test]
fn test_location_field_is_searched_case_insensitively() {
  let table = LocationTable::new(vec![entry(&["barcelona"], "BCN")]);
  let project = ProjectRecord::named("Ronda Litoral").with_location("BARCELONA, Spain");
  assert_eq!(table.match_project(&project).unwrap().label, "BCN");
}

#[test]
fn test_build_markers_with_default_tables() {
  let config = MapConfig::default();
  let table = default_location_table();
  let projects = vec![
    ProjectRecord::named("I-69 Widening"),
    ProjectRecord::named("Confidential Study"),
    ProjectRecord::named("Line 9 Extension").with_location("Barcelona"),
    ProjectRecord::named("Beltway Express Lanes").with_location("Washington, D.C."),
  ];
  let markers = build_markers(&projects, &table, &config.canvas);
  let labels: Vec<&str> = markers.iter().map(|m| m.label).collect();
  assert_eq!(labels, ["I-69 Corridor, Texas", "Barcelona", "Washington, DC"]);

  let groups = group_by_region(&markers);
  assert_eq!(groups.len(), 2);
  assert_eq!(groups[0].0, "north-america");
  assert_eq!(groups[0].1.len(), 2);
}

#[test]
fn test_markers_fall_inside_their_region_outline() {
  let config = MapConfig {
    resolution: CoastlineResolution::Fine,
    ..MapConfig::default()
  };
  let regions = world_regions(config.resolution);
  let table = default_location_table();
  let projects = vec![
    ProjectRecord::named("Madrid Metro"),
    ProjectRecord::named("Dallas Interchange"),
    ProjectRecord::named("Lima Expressway"),
  ];
  for marker in build_markers(&projects, &table, &config.canvas) {
    let region = regions.iter().find(|r| r.id == marker.region_id).unwrap();
    let ring = project_all(&region.outline, &config.canvas);
    assert!(point_in_polygon(&marker.point, &ring), "{} outside {}", marker.label, region.id);
  }
}

#[test]
fn test_render_full_map() {
  let config = MapConfig::default();
  let regions = world_regions(config.resolution);
  let table = default_location_table();
  let projects = vec![ProjectRecord::named("I-69 Widening"), ProjectRecord::named("Sydney Metro")];
  let markers = build_markers(&projects, &table, &config.canvas);
  let svg = render_map(&config, &regions, &markers);
  assert_eq!(svg.matches("<path class=\"region\"").count(), 6);
  assert_eq!(svg.matches("<circle class=\"marker\"").count(), 2);
}
