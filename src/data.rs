// src/data.rs

//! Authored literal tables: continent outlines and project locations.
//!
//! Outlines are decorative approximations in `(longitude, latitude)` degrees,
//! not survey data.

use crate::config::CoastlineResolution;
use crate::matching::LocationTable;
use crate::types::{GeoCoordinate, ProjectLocationEntry, RegionShape};

pub const NORTH_AMERICA: &str = "north-america";
pub const SOUTH_AMERICA: &str = "south-america";
pub const EUROPE: &str = "europe";
pub const AFRICA: &str = "africa";
pub const ASIA: &str = "asia";
pub const OCEANIA: &str = "oceania";

// (id, label, description)
const REGION_INFO: [(&str, &str, &str); 6] = [
  (NORTH_AMERICA, "North America", "Highway and rail corridors across the United States and Mexico"),
  (SOUTH_AMERICA, "South America", "Transport studies and concession reviews"),
  (EUROPE, "Europe", "Motorway and metro projects on the Iberian peninsula"),
  (AFRICA, "Africa", "Port access and road rehabilitation programmes"),
  (ASIA, "Asia", "Rail feasibility and toll road advisory"),
  (OCEANIA, "Oceania", "Infrastructure advisory in Australia"),
];

const NORTH_AMERICA_COARSE: [[f64; 2]; 11] = [
  [-168.0, 65.0],
  [-140.0, 70.0],
  [-95.0, 72.0],
  [-60.0, 60.0],
  [-55.0, 47.0],
  [-80.0, 25.0],
  [-97.0, 18.0],
  [-80.0, 8.0],
  [-105.0, 20.0],
  [-125.0, 40.0],
  [-150.0, 58.0],
];

const SOUTH_AMERICA_COARSE: [[f64; 2]; 8] = [
  [-80.0, 10.0],
  [-60.0, 10.0],
  [-35.0, -5.0],
  [-40.0, -22.0],
  [-58.0, -38.0],
  [-68.0, -55.0],
  [-75.0, -45.0],
  [-81.0, -5.0],
];

const EUROPE_COARSE: [[f64; 2]; 9] = [
  [-10.0, 36.0],
  [-9.0, 44.0],
  [-5.0, 58.0],
  [10.0, 71.0],
  [40.0, 68.0],
  [40.0, 45.0],
  [28.0, 41.0],
  [15.0, 38.0],
  [0.0, 38.0],
];

const AFRICA_COARSE: [[f64; 2]; 9] = [
  [-17.0, 21.0],
  [-6.0, 36.0],
  [10.0, 37.0],
  [32.0, 31.0],
  [51.0, 12.0],
  [40.0, -15.0],
  [20.0, -35.0],
  [12.0, -5.0],
  [-8.0, 4.0],
];

const ASIA_COARSE: [[f64; 2]; 10] = [
  [40.0, 45.0],
  [40.0, 68.0],
  [100.0, 78.0],
  [180.0, 68.0],
  [140.0, 45.0],
  [120.0, 22.0],
  [105.0, 8.0],
  [80.0, 8.0],
  [57.0, 24.0],
  [35.0, 32.0],
];

const OCEANIA_COARSE: [[f64; 2]; 7] = [
  [114.0, -22.0],
  [130.0, -12.0],
  [142.0, -11.0],
  [153.0, -25.0],
  [147.0, -39.0],
  [132.0, -32.0],
  [115.0, -34.0],
];

const NORTH_AMERICA_FINE: [[f64; 2]; 22] = [
  [-168.0, 65.5],
  [-162.0, 70.0],
  [-141.0, 69.6],
  [-125.0, 70.0],
  [-95.0, 72.0],
  [-80.0, 63.0],
  [-64.0, 60.0],
  [-56.0, 52.0],
  [-60.0, 46.0],
  [-70.0, 43.0],
  [-76.0, 35.0],
  [-81.0, 31.0],
  [-80.0, 25.0],
  [-83.0, 29.0],
  [-90.0, 29.0],
  [-97.0, 27.0],
  [-97.0, 18.0],
  [-83.0, 8.5],
  [-92.0, 14.5],
  [-105.0, 20.0],
  [-117.0, 32.5],
  [-124.5, 42.0],
];

const SOUTH_AMERICA_FINE: [[f64; 2]; 14] = [
  [-77.5, 8.5],
  [-71.5, 12.0],
  [-61.0, 10.5],
  [-51.0, 4.0],
  [-35.0, -5.5],
  [-39.0, -13.0],
  [-41.0, -22.5],
  [-48.5, -26.0],
  [-57.5, -35.0],
  [-65.0, -41.0],
  [-68.5, -55.0],
  [-74.0, -50.0],
  [-71.5, -30.0],
  [-81.0, -5.0],
];

const EUROPE_FINE: [[f64; 2]; 18] = [
  [-9.5, 37.0],
  [-9.0, 43.0],
  [-1.5, 43.5],
  [-4.5, 48.5],
  [2.0, 51.0],
  [8.5, 54.0],
  [5.0, 60.0],
  [15.0, 68.5],
  [28.0, 71.0],
  [40.0, 67.5],
  [40.0, 45.0],
  [29.0, 41.0],
  [23.0, 36.5],
  [19.5, 40.0],
  [12.5, 44.5],
  [16.0, 38.0],
  [3.0, 42.5],
  [-5.5, 36.0],
];

const AFRICA_FINE: [[f64; 2]; 16] = [
  [-17.5, 14.7],
  [-16.0, 24.0],
  [-9.5, 31.5],
  [-5.9, 35.8],
  [10.0, 37.2],
  [20.0, 31.0],
  [32.3, 31.2],
  [38.0, 18.0],
  [43.3, 11.5],
  [51.2, 11.8],
  [40.0, -10.5],
  [32.5, -28.5],
  [20.0, -34.8],
  [12.0, -6.0],
  [9.5, 4.0],
  [-7.5, 4.4],
];

const ASIA_FINE: [[f64; 2]; 18] = [
  [40.0, 45.0],
  [40.0, 67.5],
  [70.0, 73.0],
  [105.0, 77.5],
  [140.0, 72.5],
  [180.0, 68.0],
  [160.0, 59.0],
  [142.0, 52.0],
  [129.0, 35.0],
  [122.0, 31.0],
  [117.0, 23.0],
  [108.0, 21.5],
  [103.5, 1.5],
  [98.0, 16.0],
  [80.0, 7.0],
  [72.5, 21.0],
  [57.0, 25.0],
  [48.0, 30.0],
];

const OCEANIA_FINE: [[f64; 2]; 13] = [
  [113.5, -22.0],
  [122.0, -17.0],
  [130.0, -12.0],
  [136.5, -12.0],
  [142.0, -10.7],
  [146.0, -19.0],
  [153.5, -28.0],
  [150.0, -37.5],
  [144.0, -38.5],
  [138.0, -35.5],
  [131.0, -31.5],
  [118.0, -35.0],
  [115.0, -31.0],
];

fn outline(raw: &[[f64; 2]]) -> Vec<GeoCoordinate> {
  raw.iter().map(|p| GeoCoordinate::new(p[0], p[1])).collect()
}

/// Continent outlines at the requested detail.
pub fn world_regions(resolution: CoastlineResolution) -> Vec<RegionShape> {
  let outlines: [&[[f64; 2]]; 6] = match resolution {
    CoastlineResolution::Coarse => [
      &NORTH_AMERICA_COARSE[..],
      &SOUTH_AMERICA_COARSE[..],
      &EUROPE_COARSE[..],
      &AFRICA_COARSE[..],
      &ASIA_COARSE[..],
      &OCEANIA_COARSE[..],
    ],
    CoastlineResolution::Fine => [
      &NORTH_AMERICA_FINE[..],
      &SOUTH_AMERICA_FINE[..],
      &EUROPE_FINE[..],
      &AFRICA_FINE[..],
      &ASIA_FINE[..],
      &OCEANIA_FINE[..],
    ],
  };

  REGION_INFO
    .iter()
    .zip(outlines)
    .map(|(&(id, label, description), raw)| RegionShape {
      id: id.to_owned(),
      label: label.to_owned(),
      description: description.to_owned(),
      outline: outline(raw),
    })
    .collect()
}

fn entry(keywords: &[&str], (lng, lat): (f64, f64), region_id: &str, label: &str) -> ProjectLocationEntry {
  ProjectLocationEntry::new(keywords.iter().copied(), GeoCoordinate::new(lng, lat), region_id, label)
}

/// The portfolio's keyword table. Specific corridors are declared before the
/// cities they pass through, since the first match wins.
pub fn default_location_table() -> LocationTable {
  LocationTable::new(vec![
    entry(&["i-69", "interstate 69"], (-95.3698, 29.7604), NORTH_AMERICA, "I-69 Corridor, Texas"),
    entry(&["i-35"], (-97.7431, 30.2672), NORTH_AMERICA, "I-35 Corridor, Texas"),
    entry(&["high-speed rail", "texas central"], (-96.7970, 32.7767), NORTH_AMERICA, "Dallas–Houston HSR"),
    entry(&["houston"], (-95.3698, 29.7604), NORTH_AMERICA, "Houston, TX"),
    entry(&["dallas"], (-96.7970, 32.7767), NORTH_AMERICA, "Dallas, TX"),
    entry(&["austin"], (-97.7431, 30.2672), NORTH_AMERICA, "Austin, TX"),
    entry(&["washington", "d.c."], (-77.0369, 38.9072), NORTH_AMERICA, "Washington, DC"),
    entry(&["florida", "miami"], (-80.1918, 25.7617), NORTH_AMERICA, "Miami, FL"),
    entry(&["mexico", "méxico"], (-99.1332, 19.4326), NORTH_AMERICA, "Mexico City"),
    entry(&["panama", "panamá"], (-79.5199, 8.9824), NORTH_AMERICA, "Panama City"),
    entry(&["colombia", "bogotá", "bogota"], (-74.0721, 4.7110), SOUTH_AMERICA, "Bogotá"),
    entry(&["peru", "perú", "lima"], (-77.0428, -12.0464), SOUTH_AMERICA, "Lima"),
    entry(&["chile", "santiago"], (-70.6693, -33.4489), SOUTH_AMERICA, "Santiago"),
    entry(&["madrid"], (-3.7038, 40.4168), EUROPE, "Madrid"),
    entry(&["barcelona"], (2.1734, 41.3851), EUROPE, "Barcelona"),
    entry(&["spain", "españa"], (-3.7038, 40.4168), EUROPE, "Spain"),
    entry(&["portugal", "lisbon", "lisboa"], (-9.1393, 38.7223), EUROPE, "Lisbon"),
    entry(&["london", "united kingdom"], (-0.1276, 51.5072), EUROPE, "London"),
    entry(&["morocco", "marruecos"], (-6.8498, 33.9716), AFRICA, "Rabat"),
    entry(&["saudi", "riyadh"], (46.6753, 24.7136), ASIA, "Riyadh"),
    entry(&["delhi", "indian railways"], (77.2090, 28.6139), ASIA, "New Delhi"),
    entry(&["australia", "sydney"], (151.2093, -33.8688), OCEANIA, "Sydney"),
  ])
}
