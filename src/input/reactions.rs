use crate::error::{InputError, OptionExt, ParseExt};
use crate::input::keywords::{all_matches, values, Rule};
use crate::model::reactions::Reactions;

#[derive(Debug, Clone, Copy)]
enum ReactionField {
  BulkCoeff,
  WallCoeff,
  BulkOrder,
  WallOrder,
  LimitingPotential,
}

static REACTION_RULES: [Rule<ReactionField>; 5] = [
  Rule::new("Global Bulk", 2, ReactionField::BulkCoeff),
  Rule::new("Global Wall", 2, ReactionField::WallCoeff),
  Rule::new("Order Bulk", 2, ReactionField::BulkOrder),
  Rule::new("Order Wall", 2, ReactionField::WallOrder),
  Rule::new("Limiting Potential", 2, ReactionField::LimitingPotential),
];

/// Read the global reaction parameters. Fields without a line stay 0.
pub fn read_reactions(lines: &[&str]) -> Result<Reactions, InputError> {
  let mut reactions = Reactions::default();

  for line in lines {
    for rule in all_matches(&REACTION_RULES, line) {
      let value = values(rule, line).next().ok_or_missing(rule.keyword)?.parse_field::<f64>(rule.keyword)?;

      match rule.field {
        ReactionField::BulkCoeff => reactions.bulk_coeff = value,
        ReactionField::WallCoeff => reactions.wall_coeff = value,
        ReactionField::BulkOrder => reactions.bulk_order = value,
        ReactionField::WallOrder => reactions.wall_order = value,
        ReactionField::LimitingPotential => reactions.limiting_potential = value,
      }
    }
  }

  Ok(reactions)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_global_reactions() {
    let reactions = read_reactions(&[
      " Order Bulk            \t1",
      " Order Tank            \t1",
      " Order Wall            \t0",
      " Global Bulk           \t-.5",
      " Global Wall           \t-1",
      " Limiting Potential    \t0",
      " Roughness Correlation \t0",
      " Bulk  P1  -0.3",
    ])
    .unwrap();
    assert_eq!(reactions.bulk_coeff, -0.5);
    assert_eq!(reactions.wall_coeff, -1.0);
    assert_eq!(reactions.bulk_order, 1.0);
    assert_eq!(reactions.wall_order, 0.0);
  }

  #[test]
  fn line_can_set_several_fields() {
    let reactions = read_reactions(&["Global Bulk -0.5 ; Order Wall"]).unwrap();
    assert_eq!(reactions.bulk_coeff, -0.5);
    assert_eq!(reactions.wall_order, -0.5);
    assert_eq!(reactions.wall_coeff, 0.0);
  }

  #[test]
  fn absent_keywords_stay_zero() {
    let reactions = read_reactions(&["Global Bulk -0.3"]).unwrap();
    assert_eq!(reactions, Reactions { bulk_coeff: -0.3, ..Reactions::default() });
  }

  #[test]
  fn missing_value_is_malformed() {
    assert!(read_reactions(&["Global Wall"]).is_err());
  }
}
