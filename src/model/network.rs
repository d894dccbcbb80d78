use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use simplelog::debug;

use crate::constants::RELATIVE_DEFAULT;
use crate::error::{InputError, InputErrorKind};
use crate::model::junction::Junction;
use crate::model::options::SimulationOptions;
use crate::model::pipe::Pipe;
use crate::model::pump::Pump;
use crate::model::reactions::Reactions;
use crate::model::reservoir::Reservoir;
use crate::model::tank::Tank;
use crate::model::times::Times;
use crate::model::units::{FlowUnits, UnitConversion};
use crate::model::valve::Valve;

/// Options as read from the file, before the flow units are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct RawOptions {
  pub relative_viscosity: f64,
  pub relative_diffusivity: f64,
  pub flow_units: Option<Box<str>>,
  pub quality_tag: Box<str>,
  pub quality_unit: Box<str>,
}

impl Default for RawOptions {
  fn default() -> Self {
    Self {
      relative_viscosity: RELATIVE_DEFAULT,
      relative_diffusivity: RELATIVE_DEFAULT,
      flow_units: None,
      quality_tag: "".into(),
      quality_unit: "".into(),
    }
  }
}

/// Network in the units of the input file, the first phase of loading
#[derive(Debug, Default)]
pub struct RawNetwork {
  pub pipes: Vec<Pipe>,
  pub junctions: Vec<Junction>,
  pub tanks: Vec<Tank>,
  pub reservoirs: Vec<Reservoir>,
  pub pumps: Vec<Pump>,
  pub valves: Vec<Valve>,
  /// IDs of junctions with negative demand, in file order
  pub sources: Vec<Box<str>>,

  pub options: RawOptions,
  pub times: Times,
  pub reactions: Reactions,

  pub pipe_map: HashMap<Box<str>, usize>,
  pub junction_map: HashMap<Box<str>, usize>,
}

/// RawNetwork methods to add pipes and junctions
impl RawNetwork {
  pub fn add_pipe(&mut self, pipe: Pipe) -> Result<(), InputError> {
    if self.pipe_map.contains_key(&pipe.id) {
      return Err(InputError::malformed(format!("Pipe {} already exists", pipe.id)));
    }
    self.pipe_map.insert(pipe.id.clone(), self.pipes.len());
    self.pipes.push(pipe);
    Ok(())
  }
  pub fn add_junction(&mut self, junction: Junction) -> Result<(), InputError> {
    if self.junction_map.contains_key(&junction.id) {
      return Err(InputError::malformed(format!("Junction {} already exists", junction.id)));
    }
    if junction.is_source() {
      self.sources.push(junction.id.clone());
    }
    self.junction_map.insert(junction.id.clone(), self.junctions.len());
    self.junctions.push(junction);
    Ok(())
  }
}

/// Fully resolved network: SI geometry, per-second reaction rates
#[derive(Debug, Deserialize, Serialize)]
pub struct Network {
  pub options: SimulationOptions,
  pub times: Times,
  pub reactions: Reactions,

  pub pipes: Vec<Pipe>,
  pub junctions: Vec<Junction>,
  pub tanks: Vec<Tank>,
  pub reservoirs: Vec<Reservoir>,
  pub pumps: Vec<Pump>,
  pub valves: Vec<Valve>,
  pub sources: Vec<Box<str>>,

  #[serde(skip)]
  pub pipe_map: HashMap<Box<str>, usize>,
  #[serde(skip)]
  pub junction_map: HashMap<Box<str>, usize>,
}

impl Network {
  /// Resolve the unit system of a raw network and convert pipes and reactions.
  pub fn resolve(raw: RawNetwork) -> Result<Network, InputError> {
    let options = raw.options;
    let token = options.flow_units.ok_or_else(|| {
      InputError::new(InputErrorKind::UnknownFlowUnits, "No UNITS option, flow units are undefined")
    })?;
    let flow_units = token.parse::<FlowUnits>()?;
    let unit_system = flow_units.unit_system();
    debug!("Flow units {:?} resolve to the {:?} unit system", flow_units, unit_system);

    let options = SimulationOptions {
      relative_viscosity: options.relative_viscosity,
      relative_diffusivity: options.relative_diffusivity,
      flow_units,
      quality_tag: options.quality_tag,
      quality_unit: options.quality_unit,
      flow_unit_conversion: flow_units.to_cms(),
      unit_system,
    };

    Ok(Network {
      options,
      times: raw.times,
      reactions: raw.reactions.convert_units(unit_system),
      pipes: raw.pipes.convert_units(unit_system),
      junctions: raw.junctions,
      tanks: raw.tanks,
      reservoirs: raw.reservoirs,
      pumps: raw.pumps,
      valves: raw.valves,
      sources: raw.sources,
      pipe_map: raw.pipe_map,
      junction_map: raw.junction_map,
    })
  }

  pub fn pipe(&self, id: &str) -> Option<&Pipe> {
    self.pipe_map.get(id).map(|&i| &self.pipes[i])
  }

  pub fn junction(&self, id: &str) -> Option<&Junction> {
    self.junction_map.get(id).map(|&i| &self.junctions[i])
  }

  /// Rebuild the id lookup maps, needed after deserializing a saved network
  pub fn rebuild_maps(&mut self) {
    self.pipe_map = self.pipes.iter().enumerate().map(|(i, p)| (p.id.clone(), i)).collect();
    self.junction_map = self.junctions.iter().enumerate().map(|(i, j)| (j.id.clone(), i)).collect();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn junction(id: &str, demand: f64) -> Junction {
    Junction { id: id.into(), elevation: 0.0, demand }
  }

  #[test]
  fn negative_demand_marks_source() {
    let mut raw = RawNetwork::default();
    raw.add_junction(junction("J1", -1.5)).unwrap();
    raw.add_junction(junction("J2", 2.0)).unwrap();
    raw.add_junction(junction("J3", 0.0)).unwrap();
    assert_eq!(raw.sources, vec![Box::<str>::from("J1")]);
  }

  #[test]
  fn duplicate_junction_rejected() {
    let mut raw = RawNetwork::default();
    raw.add_junction(junction("J1", 1.0)).unwrap();
    let err = raw.add_junction(junction("J1", 1.0)).unwrap_err();
    assert_eq!(err.kind, InputErrorKind::MalformedRecord);
    assert_eq!(raw.junctions.len(), 1);
  }

  #[test]
  fn resolve_requires_flow_units() {
    let mut raw = RawNetwork::default();
    raw.options = RawOptions { quality_tag: "Chlorine".into(), quality_unit: "mg/L".into(), ..RawOptions::default() };
    let err = Network::resolve(raw).unwrap_err();
    assert_eq!(err.kind, InputErrorKind::UnknownFlowUnits);
  }
}
