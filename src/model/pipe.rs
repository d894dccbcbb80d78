use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::model::units::{UnitConversion, UnitSystem};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pipe {
  pub id: Box<str>,
  /// Start node ID
  pub node_1: Box<str>,
  /// End node ID
  pub node_2: Box<str>,
  /// Length (ft or m as read, m after conversion)
  pub length: f64,
  /// Diameter (in or mm as read, m after conversion)
  pub diameter: f64,
}

impl UnitConversion for Pipe {
  fn convert_units(self, system: UnitSystem) -> Self {
    let (length, diameter) = match system {
      UnitSystem::US => (self.length * M_PER_FT, self.diameter * M_PER_IN), // ft -> m, in -> m
      UnitSystem::SI => (self.length, self.diameter * M_PER_MM),            // m -> m, mm -> m
    };
    Pipe { length, diameter, ..self }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pipe(length: f64, diameter: f64) -> Pipe {
    Pipe { id: "P1".into(), node_1: "J1".into(), node_2: "J2".into(), length, diameter }
  }

  #[test]
  fn us_pipe_converts_feet_and_inches() {
    let p = pipe(100.0, 12.0).convert_units(UnitSystem::US);
    assert!((p.length - 30.48).abs() < 1e-9);
    assert!((p.diameter - 0.3048).abs() < 1e-9);
    assert_eq!(&*p.node_1, "J1");
  }

  #[test]
  fn si_pipe_keeps_length_and_converts_millimeters() {
    let p = pipe(100.0, 150.0).convert_units(UnitSystem::SI);
    assert_eq!(p.length, 100.0);
    assert!((p.diameter - 0.15).abs() < 1e-12);
  }
}
