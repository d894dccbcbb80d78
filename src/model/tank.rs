use serde::{Deserialize, Serialize};

/// Storage tank as written in the [TANKS] section. Values are kept in the
/// file's own units, the quality model only needs them for reference.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Tank {
  pub id: Box<str>,
  pub elevation: f64,        // elevation of the tank bottom
  pub initial_level: f64,    // initial water level above the bottom
  pub min_level: f64,        // minimum level
  pub max_level: f64,        // maximum level
  pub diameter: f64,         // nominal diameter
  pub min_volume: f64,       // minimum volume
  pub volume_curve: Option<Box<str>>, // id of the volume curve
  pub overflow: bool,                 // whether the tank can overflow
}
