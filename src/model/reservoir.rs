use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reservoir {
  pub id: Box<str>,
  /// Total head of the reservoir
  pub head: f64,
  /// Optional head pattern ID
  pub head_pattern: Option<Box<str>>,
}
