/// Recognized INP section headers, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
  Title,
  Junctions,
  Reservoirs,
  Tanks,
  Pipes,
  Pumps,
  Valves,
  Emitters,
  Curves,
  Patterns,
  Energy,
  Status,
  Controls,
  Rules,
  Demands,
  Quality,
  Reactions,
  Sources,
  Mixing,
  Options,
  Times,
  Report,
  Coordinates,
  Vertices,
  Labels,
  Backdrop,
  Tags,
  End,
}

impl Section {
  pub const ALL: [Section; 28] = [
    Section::Title, Section::Junctions, Section::Reservoirs, Section::Tanks, Section::Pipes,
    Section::Pumps, Section::Valves, Section::Emitters, Section::Curves, Section::Patterns,
    Section::Energy, Section::Status, Section::Controls, Section::Rules, Section::Demands,
    Section::Quality, Section::Reactions, Section::Sources, Section::Mixing, Section::Options,
    Section::Times, Section::Report, Section::Coordinates, Section::Vertices, Section::Labels,
    Section::Backdrop, Section::Tags, Section::End,
  ];

  pub fn header(&self) -> &'static str {
    match self {
      Section::Title => "[TITLE]",
      Section::Junctions => "[JUNCTIONS]",
      Section::Reservoirs => "[RESERVOIRS]",
      Section::Tanks => "[TANKS]",
      Section::Pipes => "[PIPES]",
      Section::Pumps => "[PUMPS]",
      Section::Valves => "[VALVES]",
      Section::Emitters => "[EMITTERS]",
      Section::Curves => "[CURVES]",
      Section::Patterns => "[PATTERNS]",
      Section::Energy => "[ENERGY]",
      Section::Status => "[STATUS]",
      Section::Controls => "[CONTROLS]",
      Section::Rules => "[RULES]",
      Section::Demands => "[DEMANDS]",
      Section::Quality => "[QUALITY]",
      Section::Reactions => "[REACTIONS]",
      Section::Sources => "[SOURCES]",
      Section::Mixing => "[MIXING]",
      Section::Options => "[OPTIONS]",
      Section::Times => "[TIMES]",
      Section::Report => "[REPORT]",
      Section::Coordinates => "[COORDINATES]",
      Section::Vertices => "[VERTICES]",
      Section::Labels => "[LABELS]",
      Section::Backdrop => "[BACKDROP]",
      Section::Tags => "[TAGS]",
      Section::End => "[END]",
    }
  }
}

/// A data line of a section with its 1-based line number in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
  pub number: usize,
  pub text: &'a str,
}

/// Positions of every section header in a file.
///
/// Boundaries are collected for all headers up front so that the body of a
/// section ends at the next header of any kind.
pub struct SectionIndex<'a> {
  lines: &'a [String],
  boundaries: Vec<usize>,
}

impl<'a> SectionIndex<'a> {
  pub fn new(lines: &'a [String]) -> Self {
    let upper: Vec<String> = lines.iter().map(|l| l.to_uppercase()).collect();

    let mut boundaries = Vec::new();
    for section in Section::ALL {
      for (i, line) in upper.iter().enumerate() {
        if line.contains(section.header()) {
          boundaries.push(i);
        }
      }
    }
    // a line holding two header literals is still one boundary
    boundaries.sort_unstable();
    boundaries.dedup();

    Self { lines, boundaries }
  }

  /// Sorted line indices of all header occurrences
  pub fn boundaries(&self) -> &[usize] {
    &self.boundaries
  }

  /// Index of the first line containing the section header
  pub fn position(&self, section: Section) -> Option<usize> {
    self.boundaries.iter().copied().find(|&i| self.lines[i].to_uppercase().contains(section.header()))
  }

  /// Data lines of a section with their line numbers. Blank and comment lines
  /// are skipped. Only the first occurrence of a header has a body; a repeated
  /// header just ends the section before it.
  pub fn extract_numbered(&self, section: Section) -> Vec<DataLine<'a>> {
    let lines: &'a [String] = self.lines;
    let Some(start) = self.position(section) else { return Vec::new() };
    let end = self.boundaries.iter().copied().find(|&b| b > start).unwrap_or(lines.len());

    lines[start + 1..end]
      .iter()
      .enumerate()
      .map(|(offset, text)| DataLine { number: start + offset + 2, text: text.trim() })
      .filter(|line| !line.text.is_empty() && !line.text.starts_with(';'))
      .collect()
  }

  /// Data lines of a section, empty when the section is absent
  pub fn extract(&self, section: Section) -> Vec<&'a str> {
    self.extract_numbered(section).into_iter().map(|line| line.text).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(text: &str) -> Vec<String> {
    text.lines().map(|l| l.to_string()).collect()
  }

  #[test]
  fn boundaries_cover_every_header_sorted() {
    let input = lines("[TITLE]\nnet\n[PIPES]\nP1 J1 J2 1 1\n[JUNCTIONS]\nJ1 0 0\n[END]");
    let index = SectionIndex::new(&input);
    assert_eq!(index.boundaries(), &[0, 2, 4, 6]);
  }

  #[test]
  fn extraction_stops_at_next_header_of_any_kind() {
    let input = lines("[PIPES]\n;ID Node1 Node2\nP1 J1 J2 1 1\n\nP2 J2 J3 1 1\n[COORDINATES]\nJ1 0 0");
    let index = SectionIndex::new(&input);
    assert_eq!(index.extract(Section::Pipes), vec!["P1 J1 J2 1 1", "P2 J2 J3 1 1"]);
    let numbered = index.extract_numbered(Section::Pipes);
    assert_eq!(numbered[1].number, 5);
  }

  #[test]
  fn absent_section_is_empty() {
    let input = lines("[PIPES]\nP1 J1 J2 1 1");
    let index = SectionIndex::new(&input);
    assert!(index.extract(Section::Junctions).is_empty());
    assert_eq!(index.position(Section::Junctions), None);
  }

  #[test]
  fn only_first_occurrence_of_a_header_is_read() {
    let input = lines("[REACTIONS]\nGlobal Bulk -.5\n[TIMES]\nDuration 24:00\n[REACTIONS]\nGlobal Bulk -1.0\n[END]");
    let index = SectionIndex::new(&input);
    assert_eq!(index.extract(Section::Reactions), vec!["Global Bulk -.5"]);
    assert_eq!(index.position(Section::Reactions), Some(0));

    // a repeated header is still a boundary
    let input = lines("[PIPES]\nP1 J1 J2 1 1\n[PIPES]\nP2 J2 J3 1 1");
    let index = SectionIndex::new(&input);
    assert_eq!(index.extract(Section::Pipes), vec!["P1 J1 J2 1 1"]);
    assert_eq!(index.boundaries(), &[0, 2]);
  }

  #[test]
  fn last_section_runs_to_end_of_file() {
    let input = lines("[OPTIONS]\nUNITS LPS\n[times]\nDuration 24:00");
    let index = SectionIndex::new(&input);
    assert_eq!(index.extract(Section::Times), vec!["Duration 24:00"]);
    assert_eq!(index.extract(Section::Options), vec!["UNITS LPS"]);
  }
}
