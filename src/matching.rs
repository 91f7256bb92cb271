// src/matching.rs

//! Keyword lookup of project locations.

use crate::types::{MapError, ProjectLocationEntry, ProjectRecord, RegionShape};
use log::trace;

/// Lowercased text a project is matched against: its name, followed by the
/// free-text location when present.
pub fn search_text(project: &ProjectRecord) -> String {
  match project.location.as_deref() {
    Some(location) => format!("{} {}", project.name, location).to_lowercase(),
    None => project.name.to_lowercase(),
  }
}

/// Read-only keyword table. Declaration order decides ties.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationTable {
  entries: Vec<ProjectLocationEntry>,
}

impl LocationTable {
  pub fn new(entries: Vec<ProjectLocationEntry>) -> Self {
    Self { entries }
  }

  pub fn entries(&self) -> &[ProjectLocationEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// First entry, in declaration order, with a keyword contained in the
  /// project's [`search_text`].
  ///
  /// No scoring is applied: an earlier entry wins even if a later one has a
  /// longer or more specific keyword. Empty keywords never match.
  pub fn match_project(&self, project: &ProjectRecord) -> Option<&ProjectLocationEntry> {
    self.first_match(&search_text(project))
  }

  /// [`LocationTable::match_project`] against arbitrary text; matching is
  /// case-insensitive.
  pub fn match_text(&self, text: &str) -> Option<&ProjectLocationEntry> {
    self.first_match(&text.to_lowercase())
  }

  fn first_match(&self, haystack: &str) -> Option<&ProjectLocationEntry> {
    let found = self
      .entries
      .iter()
      .find(|entry| entry.keywords.iter().any(|k| !k.is_empty() && haystack.contains(k.as_str())));
    trace!("match {:?} -> {:?}", haystack, found.map(|e| e.label.as_str()));
    found
  }

  /// Entries placed in `region_id`, in declaration order.
  pub fn entries_for_region<'a>(&'a self, region_id: &'a str) -> impl Iterator<Item = &'a ProjectLocationEntry> + 'a {
    self.entries.iter().filter(move |e| e.region_id == region_id)
  }

  /// Checks that the table is non-empty and that every entry points at one of
  /// `regions`.
  pub fn validate(&self, regions: &[RegionShape]) -> Result<(), MapError> {
    if self.entries.is_empty() {
      return Err(MapError::EmptyTable);
    }
    for entry in &self.entries {
      if !regions.iter().any(|r| r.id == entry.region_id) {
        log::warn!("location {:?} references unknown region {:?}", entry.label, entry.region_id);
        return Err(MapError::UnknownRegion);
      }
    }
    Ok(())
  }
}

impl From<Vec<ProjectLocationEntry>> for LocationTable {
  fn from(entries: Vec<ProjectLocationEntry>) -> Self {
    Self::new(entries)
  }
}

impl FromIterator<ProjectLocationEntry> for LocationTable {
  fn from_iter<I: IntoIterator<Item = ProjectLocationEntry>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::GeoCoordinate;

  fn table() -> LocationTable {
    LocationTable::new(vec![
      ProjectLocationEntry::new(["i-69", "texas"], GeoCoordinate::new(-95.4, 29.8), "north-america", "Texas"),
      ProjectLocationEntry::new(["washington", "dc"], GeoCoordinate::new(-77.04, 38.91), "north-america", "DC"),
      ProjectLocationEntry::new(["madrid"], GeoCoordinate::new(-3.70, 40.42), "europe", "Madrid"),
    ])
  }

  #[test]
  fn test_search_text() {
    assert_eq!(search_text(&ProjectRecord::named("I-69 Widening")), "i-69 widening");
    assert_eq!(
      search_text(&ProjectRecord::named("Metro Line").with_location("Madrid, ES")),
      "metro line madrid, es"
    );
  }

  #[test]
  fn test_match_by_name() {
    let t = table();
    let hit = t.match_project(&ProjectRecord::named("I-69 Widening")).unwrap();
    assert_eq!(hit.label, "Texas");
  }

  #[test]
  fn test_match_by_location_field() {
    let t = table();
    let project = ProjectRecord::named("Metro Line 12").with_location("Madrid");
    assert_eq!(t.match_project(&project).unwrap().label, "Madrid");
  }

  #[test]
  fn test_match_text_ignores_case() {
    let t = table();
    assert_eq!(t.match_text("I-69 Widening").unwrap().label, "Texas");
    assert_eq!(t.match_text("METRO LINE, MADRID").unwrap().label, "Madrid");
    assert!(t.match_text("Harbour Bridge").is_none());
  }

  #[test]
  fn test_no_match() {
    let t = table();
    assert!(t.match_project(&ProjectRecord::named("Harbour Bridge")).is_none());
  }

  #[test]
  fn test_first_declared_wins() {
    let t = table();
    // Both "texas" and "washington" appear; Texas is declared first.
    let project = ProjectRecord::named("Washington Ave Bridge").with_location("Texas");
    assert_eq!(t.match_project(&project).unwrap().label, "Texas");
  }

  #[test]
  fn test_empty_keyword_never_matches() {
    let t = LocationTable::new(vec![ProjectLocationEntry::new(
      [""],
      GeoCoordinate::default(),
      "nowhere",
      "Nowhere",
    )]);
    assert!(t.match_project(&ProjectRecord::named("anything")).is_none());
  }

  #[test]
  fn test_entries_for_region() {
    let t = table();
    let labels: Vec<&str> = t.entries_for_region("north-america").map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["Texas", "DC"]);
    assert_eq!(t.entries_for_region("asia").count(), 0);
  }

  #[test]
  fn test_validate() {
    let region = |id: &str| RegionShape {
      id: id.to_string(),
      ..RegionShape::default()
    };
    let t = table();
    assert_eq!(t.validate(&[region("north-america"), region("europe")]), Ok(()));
    assert_eq!(t.validate(&[region("north-america")]), Err(MapError::UnknownRegion));
    assert_eq!(LocationTable::default().validate(&[]), Err(MapError::EmptyTable));
  }
}
