use simplelog::debug;

use crate::constants::{MIN_PER_DAY, MIN_PER_HOUR};
use crate::error::{InputError, InputErrorKind, OptionExt, ParseExt};
use crate::input::keywords::{first_match, values, Rule};
use crate::model::times::{TimeSpan, Times};

#[derive(Debug, Clone, Copy)]
enum TimeField {
  Duration,
  HydraulicStep,
  QualityStep,
  ReportStep,
  ReportStart,
}

static TIME_RULES: [Rule<TimeField>; 5] = [
  Rule::new("Duration", 1, TimeField::Duration),
  Rule::new("Hydraulic Timestep", 2, TimeField::HydraulicStep),
  Rule::new("Quality Timestep", 2, TimeField::QualityStep),
  Rule::new("Report Timestep", 2, TimeField::ReportStep),
  Rule::new("Report Start", 2, TimeField::ReportStart),
];

/// Parse a time value: `h:mm`, `h:mm:ss` (seconds dropped), or a number
/// with an optional SEC / MIN / HOURS / DAYS unit (hours by default).
pub fn parse_time<'a>(mut parts: impl Iterator<Item = &'a str>, field: &str) -> Result<TimeSpan, InputError> {
  let value = parts.next().ok_or_missing(field)?;

  if value.contains(':') {
    let mut clock = value.split(':');
    let hours = clock.next().unwrap_or("0").parse_field::<i64>(field)?;
    let minutes = match clock.next() {
      Some("") | None => 0,
      Some(minutes) => minutes.parse_field::<i64>(field)?,
    };
    hours
      .checked_mul(MIN_PER_HOUR)
      .and_then(|total| total.checked_add(minutes))
      .ok_or_else(|| out_of_range(field, value))?;
    return Ok(TimeSpan::new(hours, minutes));
  }

  let amount = value.parse_field::<f64>(field)?;
  let unit = parts.next().map(|u| u.to_uppercase()).unwrap_or_default();
  let minutes = if unit.starts_with("SEC") {
    amount / 60.0
  } else if unit.starts_with("MIN") {
    amount
  } else if unit.starts_with("DAY") {
    amount * MIN_PER_DAY as f64
  } else {
    amount * MIN_PER_HOUR as f64
  };
  let minutes = minutes.floor();
  if !(i64::MIN as f64..i64::MAX as f64).contains(&minutes) {
    return Err(out_of_range(field, value));
  }
  Ok(TimeSpan::from_minutes(minutes as i64))
}

fn out_of_range(field: &str, value: &str) -> InputError {
  InputError::malformed(format!("{} out of range: '{}'", field, value))
}

/// Read the [TIMES] lines and derive the quality step and report step count.
pub fn read_times(lines: &[&str]) -> Result<Times, InputError> {
  let mut times = Times::default();

  for line in lines {
    // a line sets at most one time value
    let Some(rule) = first_match(&TIME_RULES, line) else { continue };
    let value = parse_time(values(rule, line), rule.keyword)?;

    match rule.field {
      TimeField::Duration => times.duration = value,
      TimeField::HydraulicStep => times.hydraulic_step = value,
      TimeField::QualityStep => times.quality_step = value,
      TimeField::ReportStep => times.report_step = value,
      TimeField::ReportStart => times.report_start = value,
    }
  }

  if times.duration.is_zero() {
    return Err(InputError::new(
      InputErrorKind::ZeroDurationAnalysis,
      "Single period snapshot analysis is not supported, Duration must be nonzero",
    ));
  }

  if times.quality_step.is_zero() {
    times.quality_step = TimeSpan::new(0, times.hydraulic_step.total_minutes() / 10);
    debug!("Quality timestep defaults to {} minutes", times.quality_step.minutes);
  }

  let report_step = times.report_step.total_minutes();
  if report_step <= 0 {
    return Err(InputError::new(
      InputErrorKind::NonPositiveReportStepCount,
      format!("Report Timestep must be positive, found {}", times.report_step),
    ));
  }

  let n_steps = times
    .duration
    .total_minutes()
    .checked_sub(times.report_start.total_minutes())
    .and_then(|span| span.div_euclid(report_step).checked_add(1))
    .ok_or_else(|| InputError::malformed(format!("Report Start {} is out of range", times.report_start)))?;
  if n_steps <= 0 {
    return Err(InputError::new(
      InputErrorKind::NonPositiveReportStepCount,
      format!("Report Start {} lies after the end of the simulation {}", times.report_start, times.duration),
    ));
  }
  times.n_steps = n_steps as usize;

  Ok(times)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn time_formats() {
    let t = |s: &str| parse_time(s.split_whitespace(), "time").unwrap();
    assert_eq!(t("48:00"), TimeSpan::new(48, 0));
    assert_eq!(t("1:30:45"), TimeSpan::new(1, 30));
    assert_eq!(t("24"), TimeSpan::new(24, 0));
    assert_eq!(t("5 min"), TimeSpan::new(0, 5));
    assert_eq!(t("1.5 HOURS"), TimeSpan::new(1, 30));
    assert_eq!(t("2 days"), TimeSpan::new(48, 0));
    assert_eq!(t("300 SEC"), TimeSpan::new(0, 5));
    assert!(parse_time("x:00".split_whitespace(), "time").is_err());
  }

  #[test]
  fn oversized_time_values_are_malformed() {
    for value in ["999999999999999999:00", "1e300 days", "inf"] {
      let err = parse_time(value.split_whitespace(), "Duration").unwrap_err();
      assert_eq!(err.kind, InputErrorKind::MalformedRecord, "{}", value);
    }
    let err = read_times(&["Duration 153722867280912929:00", "Report Timestep 0:01", "Report Start -2:00"]).unwrap_err();
    assert_eq!(err.kind, InputErrorKind::MalformedRecord);
  }

  #[test]
  fn first_matching_keyword_wins() {
    let times = read_times(&[
      "Duration 48:00",
      "Hydraulic Timestep 1:00",
      "Quality Timestep 0:05",
      "Report Timestep 2:00",
      "Report Start 0:00",
    ])
    .unwrap();
    assert_eq!(times.duration, TimeSpan::new(48, 0));
    assert_eq!(times.quality_step, TimeSpan::new(0, 5));
    assert_eq!(times.n_steps, 25);
  }

  #[test]
  fn quality_step_defaults_to_tenth_of_hydraulic_step() {
    let times = read_times(&["Duration 24:00", "Hydraulic Timestep 1:00", "Report Timestep 1:00"]).unwrap();
    assert_eq!(times.quality_step, TimeSpan::new(0, 6));
    assert_eq!(times.n_steps, 25);
  }

  #[test]
  fn snapshot_rejected() {
    let err = read_times(&["Duration 0:00", "Report Timestep 1:00"]).unwrap_err();
    assert_eq!(err.kind, InputErrorKind::ZeroDurationAnalysis);
  }

  #[test]
  fn report_start_after_duration_rejected() {
    let err = read_times(&["Duration 2:00", "Report Timestep 1:00", "Report Start 6:00"]).unwrap_err();
    assert_eq!(err.kind, InputErrorKind::NonPositiveReportStepCount);
    let err = read_times(&["Duration 2:00"]).unwrap_err();
    assert_eq!(err.kind, InputErrorKind::NonPositiveReportStepCount);
  }
}
