//! Loading of EPANET INP files into a [`Network`].
//!
//! Loading runs in two phases. The sections are indexed and read into a
//! [`RawNetwork`] in the units of the file, then [`Network::resolve`] works out
//! the unit system from the flow units and converts pipes and reactions.

pub mod keywords;
pub mod lines;
pub mod options;
pub mod reactions;
pub mod records;
pub mod sections;
pub mod times;

use std::path::Path;

use simplelog::{debug, info};

use crate::error::{InputError, InputErrorKind};
use crate::input::lines::{InpFile, LineSource};
use crate::input::options::read_options;
use crate::input::reactions::read_reactions;
use crate::input::records::*;
use crate::input::sections::{DataLine, Section, SectionIndex};
use crate::input::times::read_times;
use crate::model::network::{Network, RawNetwork};

/// Attach the position and text of a data line to a record error
fn at(line: DataLine<'_>) -> impl FnOnce(InputError) -> InputError + '_ {
  move |e| e.with_line(line.number).with_context(line.text)
}

/// Data lines of a section that must be present and non-empty
fn required<'a>(index: &SectionIndex<'a>, section: Section) -> Result<Vec<DataLine<'a>>, InputError> {
  let lines = index.extract_numbered(section);
  if lines.is_empty() {
    return Err(InputError::new(
      InputErrorKind::MissingRequiredSection,
      format!("Section {} is missing or empty", section.header()),
    ));
  }
  Ok(lines)
}

/// Read the sections of an INP file into a network in file units.
pub fn read_raw(lines: &[String]) -> Result<RawNetwork, InputError> {
  if lines.iter().all(|l| l.trim().is_empty()) {
    return Err(InputError::new(InputErrorKind::EmptyOrUnreadableInput, "Input is empty"));
  }

  let index = SectionIndex::new(lines);
  debug!("Found {} section headers", index.boundaries().len());

  let mut network = RawNetwork::default();

  for line in required(&index, Section::Pipes)? {
    let pipe = read_pipe(line.text).map_err(at(line))?;
    network.add_pipe(pipe).map_err(at(line))?;
  }

  for line in required(&index, Section::Junctions)? {
    let junction = read_junction(line.text).map_err(at(line))?;
    network.add_junction(junction).map_err(at(line))?;
  }

  for line in index.extract_numbered(Section::Tanks) {
    network.tanks.push(read_tank(line.text).map_err(at(line))?);
  }
  for line in index.extract_numbered(Section::Reservoirs) {
    network.reservoirs.push(read_reservoir(line.text).map_err(at(line))?);
  }
  for line in index.extract_numbered(Section::Pumps) {
    network.pumps.push(read_pump(line.text).map_err(at(line))?);
  }
  for line in index.extract_numbered(Section::Valves) {
    network.valves.push(read_valve(line.text).map_err(at(line))?);
  }

  network.options = read_options(&index.extract(Section::Options))?;
  network.times = read_times(&index.extract(Section::Times))?;
  network.reactions = read_reactions(&index.extract(Section::Reactions))?;

  Ok(network)
}

impl Network {
  /// Read a network from an INP file.
  pub fn read_inp(path: impl AsRef<Path>) -> Result<Network, InputError> {
    let path = path.as_ref();
    let network = Network::from_source(&InpFile::new(path))?;
    info!("Read {} pipes and {} junctions from {}", network.pipes.len(), network.junctions.len(), path.display());
    Ok(network)
  }

  /// Read a network from any line source, e.g. the text of an INP file.
  pub fn from_source<S: LineSource + ?Sized>(source: &S) -> Result<Network, InputError> {
    let lines = source.lines()?;
    Network::from_lines(&lines)
  }

  pub fn from_lines(lines: &[String]) -> Result<Network, InputError> {
    let raw = read_raw(lines)?;
    Network::resolve(raw)
  }
}
