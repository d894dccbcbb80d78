use crate::error::{InputError, OptionExt, ParseExt};
use crate::input::keywords::fields;
use crate::model::junction::Junction;
use crate::model::pipe::Pipe;
use crate::model::pump::Pump;
use crate::model::reservoir::Reservoir;
use crate::model::tank::Tank;
use crate::model::valve::Valve;

/// Read a pipe: id, start node, end node, length, diameter. Roughness,
/// minor loss and status are not used.
pub fn read_pipe(line: &str) -> Result<Pipe, InputError> {
  let mut parts = fields(line);

  let id = parts.next().ok_or_missing("pipe id")?.into();
  // read the start node
  let node_1 = parts.next().ok_or_missing("start node")?.into();
  // read the end node
  let node_2 = parts.next().ok_or_missing("end node")?.into();
  // read the length
  let length = parts.next().ok_or_missing("length")?.parse_field::<f64>("length")?;
  // read the diameter
  let diameter = parts.next().ok_or_missing("diameter")?.parse_field::<f64>("diameter")?;

  Ok(Pipe { id, node_1, node_2, length, diameter })
}

/// Read a junction: id, elevation, demand
pub fn read_junction(line: &str) -> Result<Junction, InputError> {
  let mut parts = fields(line);

  let id = parts.next().ok_or_missing("junction id")?.into();
  let elevation = parts.next().ok_or_missing("elevation")?.parse_field::<f64>("elevation")?;
  let demand = parts.next().ok_or_missing("demand")?.parse_field::<f64>("demand")?;

  Ok(Junction { id, elevation, demand })
}

const TANK_LEVELS: [&str; 6] = ["elevation", "initial level", "minimum level", "maximum level", "diameter", "minimum volume"];

/// Read a tank. Everything after the id is optional and read while present.
pub fn read_tank(line: &str) -> Result<Tank, InputError> {
  let mut parts = fields(line);

  let mut tank = Tank { id: parts.next().ok_or_missing("tank id")?.into(), ..Tank::default() };

  let mut values = [0.0; 6];
  for (slot, field) in values.iter_mut().zip(TANK_LEVELS) {
    let Some(value) = parts.next() else { break };
    *slot = value.parse_field::<f64>(field)?;
  }
  let [elevation, initial_level, min_level, max_level, diameter, min_volume] = values;
  tank.elevation = elevation;
  tank.initial_level = initial_level;
  tank.min_level = min_level;
  tank.max_level = max_level;
  tank.diameter = diameter;
  tank.min_volume = min_volume;

  // "*" stands for "no volume curve"
  tank.volume_curve = parts.next().filter(|c| *c != "*").map(|c| c.into());
  tank.overflow = parts.next().is_some_and(|o| o.eq_ignore_ascii_case("YES"));

  Ok(tank)
}

/// Read a reservoir: id, head and an optional head pattern
pub fn read_reservoir(line: &str) -> Result<Reservoir, InputError> {
  let mut parts = fields(line);

  let id = parts.next().ok_or_missing("reservoir id")?.into();
  let head = match parts.next() {
    Some(head) => head.parse_field::<f64>("head")?,
    None => 0.0,
  };
  let head_pattern = parts.next().map(|p| p.into());

  Ok(Reservoir { id, head, head_pattern })
}

/// Read a pump, the curve and setting keywords are skipped
pub fn read_pump(line: &str) -> Result<Pump, InputError> {
  let mut parts = fields(line);

  let id = parts.next().ok_or_missing("pump id")?.into();
  let start = parts.next().ok_or_missing("start node")?.into();
  let end = parts.next().ok_or_missing("end node")?.into();

  Ok(Pump { id, start, end })
}

/// Read a valve, the type and setting are skipped
pub fn read_valve(line: &str) -> Result<Valve, InputError> {
  let mut parts = fields(line);

  let id = parts.next().ok_or_missing("valve id")?.into();
  let start = parts.next().ok_or_missing("start node")?.into();
  let end = parts.next().ok_or_missing("end node")?.into();

  Ok(Valve { id, start, end })
}
