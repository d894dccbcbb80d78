use serde::{Deserialize, Serialize};
use simplelog::warn;

use crate::constants::*;
use crate::model::units::{UnitConversion, UnitSystem};

/// Global reaction parameters from the [REACTIONS] section
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Reactions {
  /// Bulk reaction coefficient (1/day as read, 1/s after conversion)
  pub bulk_coeff: f64,
  /// Wall reaction coefficient (length/day or 1/area/day as read, per second after conversion)
  pub wall_coeff: f64,
  pub bulk_order: f64,
  /// Wall reaction order, only 0 and 1 are meaningful
  pub wall_order: f64,
  pub limiting_potential: f64,
}

impl UnitConversion for Reactions {
  fn convert_units(self, system: UnitSystem) -> Self {
    let bulk_coeff = self.bulk_coeff / SEC_PER_DAY; // 1/day -> 1/s

    let wall_coeff = match system {
      // ft/day -> m/s
      UnitSystem::US if self.wall_order == 1.0 => self.wall_coeff * M_PER_FT / SEC_PER_DAY,
      // 1/ft2/day -> 1/m2/s
      UnitSystem::US if self.wall_order == 0.0 => self.wall_coeff / (M_PER_FT.powi(2) * SEC_PER_DAY),
      UnitSystem::US => {
        warn!("No unit conversion defined for wall reaction order {}, coefficient kept as read", self.wall_order);
        self.wall_coeff
      }
      // m/day -> m/s and 1/m2/day -> 1/m2/s
      UnitSystem::SI => self.wall_coeff / SEC_PER_DAY,
    };

    Reactions { bulk_coeff, wall_coeff, ..self }
  }
}
