use std::str::FromStr;

/// Failure categories of the loader. Every kind maps to the same exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
  EmptyOrUnreadableInput,
  MissingRequiredSection,
  MalformedRecord,
  UnsupportedQualityMode,
  UnknownFlowUnits,
  ZeroDurationAnalysis,
  NonPositiveReportStepCount,
}

#[derive(Debug)]
pub struct InputError {
  pub kind: InputErrorKind,
  pub message: String,
  pub line: Option<usize>,
  pub context: Option<String>,
}

impl InputError {
  pub fn new(kind: InputErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into(), line: None, context: None }
  }

  /// Shorthand for the most common failure, a record that cannot be read
  pub fn malformed(message: impl Into<String>) -> Self {
    Self::new(InputErrorKind::MalformedRecord, message)
  }

  pub fn with_line(mut self, line: usize) -> Self {
    self.line = Some(line);
    self
  }

  pub fn with_context(mut self, context: impl Into<String>) -> Self {
    self.context = Some(context.into());
    self
  }

  /// Uniform failure status handed to callers (0 is reserved for success)
  pub fn status(&self) -> i32 {
    1
  }
}

impl std::fmt::Display for InputError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message)?;
    if let Some(line) = self.line {
      write!(f, " (line {})", line)?;
    }
    if let Some(ctx) = &self.context {
      write!(f, " [{}]", ctx)?;
    }
    Ok(())
  }
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
  fn from(err: std::io::Error) -> Self {
    InputError::new(InputErrorKind::EmptyOrUnreadableInput, format!("IO error: {}", err))
  }
}

/// Status code of a load attempt: 0 on success, 1 on any failure
pub fn load_status<T>(result: &Result<T, InputError>) -> i32 {
  match result {
    Ok(_) => 0,
    Err(e) => e.status(),
  }
}

/// Helper trait for converting Option to Result with error context
pub trait OptionExt<T> {
  fn ok_or_missing(self, field: &str) -> Result<T, InputError>;
}

impl<T> OptionExt<T> for Option<T> {
  fn ok_or_missing(self, field: &str) -> Result<T, InputError> {
    self.ok_or_else(|| InputError::malformed(format!("Missing required field: {}", field)))
  }
}

/// Helper trait for parsing with better error messages
pub trait ParseExt {
  fn parse_field<T: FromStr>(&self, field: &str) -> Result<T, InputError>;
}

impl ParseExt for &str {
  fn parse_field<T: FromStr>(&self, field: &str) -> Result<T, InputError> {
    self.parse::<T>().map_err(|_| InputError::malformed(format!("Invalid {}: '{}'", field, self)))
  }
}
