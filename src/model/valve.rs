use serde::{Deserialize, Serialize};

/// Valve link. Type, setting and minor loss are not needed by the quality model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Valve {
  pub id: Box<str>,
  pub start: Box<str>,
  pub end: Box<str>,
}
