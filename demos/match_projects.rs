//! Reads a JSON array of project records and prints where each one lands.
//!
//! `cargo run --features serde --example match_projects -- projects.json [config.json]`

use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use xs_folio_map::data::default_location_table;
use xs_folio_map::{project_coordinate, MapConfig, ProjectRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  SimpleLogger::init(LevelFilter::Debug, Config::default())?;

  let mut args = std::env::args().skip(1);
  let Some(projects_path) = args.next() else {
    error!("usage: match_projects <projects.json> [config.json]");
    return Ok(());
  };

  let config = match args.next() {
    Some(path) => MapConfig::from_json_str(&std::fs::read_to_string(path)?)?,
    None => MapConfig::default(),
  };

  info!("Reading projects from {projects_path}");
  let projects: Vec<ProjectRecord> = serde_json::from_str(&std::fs::read_to_string(&projects_path)?)?;
  let table = default_location_table();

  for project in &projects {
    match table.match_project(project) {
      Some(entry) => {
        let p = project_coordinate(&entry.coordinate, &config.canvas);
        println!("{:<40} {:<24} ({:.2}, {:.2})", project.name, entry.label, p.x, p.y);
      }
      None => println!("{:<40} {}", project.name, config.language.no_location_label()),
    }
  }
  Ok(())
}
