use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{InputError, InputErrorKind};

/// Supplies the ordered, trimmed lines of a network description.
pub trait LineSource {
  fn lines(&self) -> Result<Vec<String>, InputError>;
}

/// An INP file on disk
pub struct InpFile {
  path: PathBuf,
}

impl InpFile {
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self { path: path.as_ref().to_path_buf() }
  }
}

impl LineSource for InpFile {
  fn lines(&self) -> Result<Vec<String>, InputError> {
    let file = File::open(&self.path).map_err(|e| {
      InputError::new(
        InputErrorKind::EmptyOrUnreadableInput,
        format!("Failed to open file: {}: {}", self.path.display(), e),
      )
    })?;

    let mut reader = BufReader::new(file);
    let mut line_buffer = Vec::with_capacity(512);
    let mut lines = Vec::new();

    // INP files written by older tools are not always valid UTF-8
    while reader.read_until(b'\n', &mut line_buffer)? > 0 {
      lines.push(String::from_utf8_lossy(&line_buffer).trim().to_string());
      line_buffer.clear();
    }
    Ok(lines)
  }
}

impl LineSource for str {
  fn lines(&self) -> Result<Vec<String>, InputError> {
    Ok(str::lines(self).map(|l| l.trim().to_string()).collect())
  }
}

impl LineSource for [String] {
  fn lines(&self) -> Result<Vec<String>, InputError> {
    Ok(self.iter().map(|l| l.trim().to_string()).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_lines_are_trimmed_in_order() {
    let lines = LineSource::lines(" [PIPES] \n\tP1 J1 J2 100 12\n").unwrap();
    assert_eq!(lines, vec!["[PIPES]".to_string(), "P1 J1 J2 100 12".to_string()]);
  }

  #[test]
  fn missing_file_is_unreadable() {
    let err = InpFile::new("does/not/exist.inp").lines().unwrap_err();
    assert_eq!(err.kind, InputErrorKind::EmptyOrUnreadableInput);
  }
}
