use simplelog::debug;

use crate::constants::RELATIVE_DEFAULT;
use crate::error::{InputError, InputErrorKind, OptionExt, ParseExt};
use crate::input::keywords::{first_match, values, Rule};
use crate::model::network::RawOptions;

#[derive(Debug, Clone, Copy)]
enum OptionField {
  Viscosity,
  Diffusivity,
  Units,
  Quality,
}

static OPTION_RULES: [Rule<OptionField>; 4] = [
  Rule::new("Viscosity", 1, OptionField::Viscosity),
  Rule::new("Diffusivity", 1, OptionField::Diffusivity),
  Rule::new("UNITS", 1, OptionField::Units),
  Rule::new("QUALITY", 1, OptionField::Quality),
];

/// Quality analysis modes the dead-end model cannot run
const UNSUPPORTED_QUALITY: [&str; 3] = ["NONE", "AGE", "TRACE"];

fn assign<T: std::fmt::Debug>(slot: &mut Option<T>, value: T, keyword: &str) {
  if let Some(previous) = slot.replace(value) {
    debug!("Option {} given more than once, {:?} is overridden", keyword, previous);
  }
}

/// Read the [OPTIONS] lines. Each line sets at most one option, a repeated
/// option keeps its last value. Only chemical quality analysis is accepted.
pub fn read_options(lines: &[&str]) -> Result<RawOptions, InputError> {
  let mut viscosity = None;
  let mut diffusivity = None;
  let mut units: Option<Box<str>> = None;
  let mut quality: Option<(Box<str>, Box<str>)> = None;

  for line in lines {
    let Some(rule) = first_match(&OPTION_RULES, line) else { continue };
    let mut parts = values(rule, line);

    match rule.field {
      OptionField::Viscosity => {
        let value = parts.next().ok_or_missing("viscosity")?.parse_field::<f64>("viscosity")?;
        assign(&mut viscosity, value, rule.keyword);
      }
      OptionField::Diffusivity => {
        let value = parts.next().ok_or_missing("diffusivity")?.parse_field::<f64>("diffusivity")?;
        assign(&mut diffusivity, value, rule.keyword);
      }
      OptionField::Units => {
        let value = parts.next().ok_or_missing("flow units")?;
        assign(&mut units, value.into(), rule.keyword);
      }
      OptionField::Quality => {
        let tag = parts.next().ok_or_missing("quality parameter")?;
        let unit = parts.next().unwrap_or("");
        assign(&mut quality, (tag.into(), unit.into()), rule.keyword);
      }
    }
  }

  let (quality_tag, quality_unit) = quality.unwrap_or_else(|| ("NONE".into(), "".into()));
  if UNSUPPORTED_QUALITY.iter().any(|mode| quality_tag.eq_ignore_ascii_case(mode)) {
    return Err(InputError::new(
      InputErrorKind::UnsupportedQualityMode,
      format!("Only chemical water quality analysis is supported, found QUALITY {}", quality_tag),
    ));
  }

  Ok(RawOptions {
    relative_viscosity: viscosity.unwrap_or(RELATIVE_DEFAULT),
    relative_diffusivity: diffusivity.unwrap_or(RELATIVE_DEFAULT),
    flow_units: units,
    quality_tag,
    quality_unit,
  })
}
