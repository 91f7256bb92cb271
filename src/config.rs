// src/config.rs

//! Widget configuration: canvas, copy language and coastline detail.

use crate::constants::DEFAULT_VIEWBOX_PADDING;
use crate::types::Canvas;
#[cfg(feature = "serde")]
use crate::types::MapError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Language of the user-facing widget copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
  #[default]
  English,
  Spanish,
}

impl Language {
  pub fn title(self) -> &'static str {
    match self {
      Language::English => "Project Locations",
      Language::Spanish => "Ubicación de Proyectos",
    }
  }

  /// Heading above the per-region project list.
  pub fn projects_label(self) -> &'static str {
    match self {
      Language::English => "Projects",
      Language::Spanish => "Proyectos",
    }
  }

  pub fn no_location_label(self) -> &'static str {
    match self {
      Language::English => "Location not mapped",
      Language::Spanish => "Ubicación no disponible",
    }
  }
}

/// Level of detail of the authored region outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoastlineResolution {
  #[default]
  Coarse,
  Fine,
}

/// Everything that distinguishes one map widget from another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
  pub canvas: Canvas,
  pub language: Language,
  pub resolution: CoastlineResolution,
  /// Padding used when framing a single region.
  pub padding: f64,
}

impl Default for MapConfig {
  fn default() -> Self {
    Self {
      canvas: Canvas::default(),
      language: Language::default(),
      resolution: CoastlineResolution::default(),
      padding: DEFAULT_VIEWBOX_PADDING,
    }
  }
}

#[cfg(feature = "serde")]
impl MapConfig {
  /// Decodes a JSON configuration. Missing fields take their defaults.
  pub fn from_json_str(json: &str) -> Result<Self, MapError> {
    serde_json::from_str(json).map_err(|e| {
      log::warn!("invalid map configuration: {e}");
      MapError::ConfigParse
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let cfg = MapConfig::default();
    assert_eq!(cfg.canvas, Canvas::new(900.0, 450.0));
    assert_eq!(cfg.language, Language::English);
    assert_eq!(cfg.resolution, CoastlineResolution::Coarse);
    assert_eq!(cfg.padding, 20.0);
  }

  #[test]
  fn test_language_copy() {
    assert_eq!(Language::English.projects_label(), "Projects");
    assert_eq!(Language::Spanish.projects_label(), "Proyectos");
    assert_ne!(Language::English.title(), Language::Spanish.title());
  }

  #[cfg(feature = "serde")]
  #[test]
  fn test_from_json_partial() {
    let cfg = MapConfig::from_json_str(r#"{"language":"spanish","resolution":"fine"}"#).unwrap();
    assert_eq!(cfg.language, Language::Spanish);
    assert_eq!(cfg.resolution, CoastlineResolution::Fine);
    assert_eq!(cfg.canvas, Canvas::default());
  }

  #[cfg(feature = "serde")]
  #[test]
  fn test_from_json_malformed() {
    assert_eq!(MapConfig::from_json_str("{not json"), Err(MapError::ConfigParse));
    assert_eq!(MapConfig::from_json_str(r#"{"language":"klingon"}"#), Err(MapError::ConfigParse));
  }
}
