use serde::{Deserialize, Serialize};

/// Pump link. Head curve and speed settings are not needed by the quality model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pump {
  pub id: Box<str>,
  pub start: Box<str>,
  pub end: Box<str>,
}
