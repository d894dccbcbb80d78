/// A keyword rule for the configuration sections: lines containing `keyword`
/// assign `field` from the tokens that follow the `labels` leading words.
pub struct Rule<F> {
  pub keyword: &'static str,
  pub labels: usize,
  pub field: F,
}

impl<F: Copy> Rule<F> {
  pub const fn new(keyword: &'static str, labels: usize, field: F) -> Self {
    Self { keyword, labels, field }
  }

  /// Case-insensitive substring test
  pub fn matches(&self, line: &str) -> bool {
    line.to_uppercase().contains(&self.keyword.to_uppercase())
  }
}

/// The first rule matching the line, in table order
pub fn first_match<'r, F: Copy>(rules: &'r [Rule<F>], line: &str) -> Option<&'r Rule<F>> {
  rules.iter().find(|rule| rule.matches(line))
}

/// Every rule matching the line, in table order
pub fn all_matches<'r, F: Copy>(rules: &'r [Rule<F>], line: &'r str) -> impl Iterator<Item = &'r Rule<F>> + 'r {
  rules.iter().filter(move |rule| rule.matches(line))
}

/// Whitespace separated tokens of a record, up to an inline `;` comment
pub fn fields(line: &str) -> std::str::SplitWhitespace<'_> {
  line.split_once(';').map_or(line, |(data, _)| data).split_whitespace()
}

/// Tokens of a keyword line after its label words
pub fn values<'l, F: Copy>(rule: &Rule<F>, line: &'l str) -> std::iter::Skip<std::str::SplitWhitespace<'l>> {
  fields(line).skip(rule.labels)
}

#[cfg(test)]
mod tests {
  use super::*;

  static RULES: [Rule<u8>; 2] = [Rule::new("Report Timestep", 2, 0), Rule::new("Report", 1, 1)];

  #[test]
  fn first_match_respects_table_order() {
    assert_eq!(first_match(&RULES, " REPORT TIMESTEP 1:00").map(|r| r.field), Some(0));
    assert_eq!(first_match(&RULES, "Report Start 0:00").map(|r| r.field), Some(1));
    assert!(first_match(&RULES, "Duration 24:00").is_none());
    assert_eq!(all_matches(&RULES, "Report Timestep 1:00").count(), 2);
  }

  #[test]
  fn inline_comments_end_the_record() {
    let tokens: Vec<&str> = fields("T1 850 120 ;tank comment").collect();
    assert_eq!(tokens, vec!["T1", "850", "120"]);
    let rule = &RULES[0];
    assert_eq!(values(rule, "Report Timestep 2:00").collect::<Vec<_>>(), vec!["2:00"]);
  }
}
