//! Renders the default world map with a handful of sample projects to stdout.
//!
//! `cargo run --example render_world_map -- fine > map.svg`

use log::{info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use xs_folio_map::data::{default_location_table, world_regions};
use xs_folio_map::{build_markers, group_by_region, render_map, CoastlineResolution, MapConfig, ProjectRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  SimpleLogger::init(LevelFilter::Info, Config::default())?;

  let resolution = match std::env::args().nth(1).as_deref() {
    Some("fine") => CoastlineResolution::Fine,
    _ => CoastlineResolution::Coarse,
  };
  let config = MapConfig {
    resolution,
    ..MapConfig::default()
  };

  let regions = world_regions(config.resolution);
  let table = default_location_table();
  table.validate(&regions)?;

  let projects = vec![
    ProjectRecord::named("I-69 Widening"),
    ProjectRecord::named("Dallas Horseshoe Interchange"),
    ProjectRecord::named("Beltway Express Lanes").with_location("Washington, D.C."),
    ProjectRecord::named("Line 9 Extension").with_location("Barcelona"),
    ProjectRecord::named("Internal Tooling Refresh"),
  ];

  let markers = build_markers(&projects, &table, &config.canvas);
  info!("{} of {} projects placed", markers.len(), projects.len());
  for (region_id, members) in group_by_region(&markers) {
    info!("{region_id}: {} {}", members.len(), config.language.projects_label());
  }

  print!("{}", render_map(&config, &regions, &markers));
  Ok(())
}
