use serde::{Deserialize, Serialize};

use crate::constants::MIN_PER_HOUR;

/// An hours/minutes pair as written in the [TIMES] section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct TimeSpan {
  pub hours: i64,
  pub minutes: i64,
}

impl TimeSpan {
  pub fn new(hours: i64, minutes: i64) -> Self {
    Self { hours, minutes }
  }

  pub fn from_minutes(total: i64) -> Self {
    Self { hours: total / MIN_PER_HOUR, minutes: total % MIN_PER_HOUR }
  }

  pub fn total_minutes(&self) -> i64 {
    self.hours * MIN_PER_HOUR + self.minutes
  }

  pub fn is_zero(&self) -> bool {
    self.total_minutes() == 0
  }
}

impl std::fmt::Display for TimeSpan {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}:{:02}", self.hours, self.minutes)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Times {
  pub duration: TimeSpan,
  pub hydraulic_step: TimeSpan,
  pub quality_step: TimeSpan,
  pub report_step: TimeSpan,
  pub report_start: TimeSpan,
  /// Number of reporting periods between report start and the end of the run
  pub n_steps: usize,
}
