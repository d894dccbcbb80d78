use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Junction {
  pub id: Box<str>,
  pub elevation: f64,
  /// Base demand, a negative demand marks the junction as a quality source
  pub demand: f64,
}

impl Junction {
  pub fn is_source(&self) -> bool {
    self.demand < 0.0
  }
}
