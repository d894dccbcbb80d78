use serde::{Deserialize, Serialize};

use crate::model::units::{FlowUnits, UnitSystem};

/// Quality and unit options resolved from the [OPTIONS] section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationOptions {
  /// Kinematic viscosity relative to water at 20 C
  pub relative_viscosity: f64,
  /// Molecular diffusivity relative to chlorine at 20 C
  pub relative_diffusivity: f64,
  pub flow_units: FlowUnits,
  /// Name of the chemical being modelled
  pub quality_tag: Box<str>,
  /// Concentration unit of the chemical (e.g. mg/L)
  pub quality_unit: Box<str>,
  /// Factor converting flow units to m3/s
  pub flow_unit_conversion: f64,
  pub unit_system: UnitSystem,
}
