use super::constants;

#[derive(Debug, Clone, PartialEq)]
pub enum IdentifierViolation {
  Empty,
  TooShort,
  TooLong,
  InvalidCharacter(char),
  InvalidEdge,
}

impl std::fmt::Display for IdentifierViolation {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      IdentifierViolation::Empty => write!(formatter, "{}", constants::EMPTY_IDENTIFIER_ERROR),
      IdentifierViolation::TooShort => write!(formatter, "{}", constants::SHORT_IDENTIFIER_ERROR),
      IdentifierViolation::TooLong => write!(formatter, "{}", constants::LONG_IDENTIFIER_ERROR),
      IdentifierViolation::InvalidCharacter(c) => {
        write!(formatter, "{} ({:?})", constants::IDENTIFIER_CHARACTER_ERROR, c)
      }
      IdentifierViolation::InvalidEdge => write!(formatter, "{}", constants::IDENTIFIER_EDGE_ERROR),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigViolation {
  Identifier {
    field: String,
    value: String,
    violation: IdentifierViolation,
  },
  Segments {
    field: String,
    value: String,
    expected: usize,
  },
  SameTable {
    first: &'static str,
    second: &'static str,
    table: String,
  },
  Invalid {
    field: String,
    value: String,
  },
}

impl std::fmt::Display for ConfigViolation {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      ConfigViolation::Identifier {
        field,
        value,
        violation,
      } => write!(formatter, "invalid '{}' value '{}' - {}", field, value, violation),
      ConfigViolation::Segments { field, value, expected } => write!(
        formatter,
        "invalid '{}' value '{}' - expected {} dot-separated parts",
        field, value, expected
      ),
      ConfigViolation::SameTable { first, second, table } => {
        write!(formatter, "{} and {} both refer to '{}'", first, second, table)
      }
      ConfigViolation::Invalid { field, value } => write!(formatter, "invalid '{}' value '{}'", field, value),
    }
  }
}

/// Failure categories of a warehouse client call. `Other` is reserved for anything the client could not
/// classify and is logged separately by callers.
#[derive(Debug, Clone, PartialEq)]
pub enum WarehouseError {
  Auth(String),
  Transport(String),
  Api { status: u16, message: String },
  Decode(String),
  Other(String),
}

impl WarehouseError {
  pub fn is_unexpected(&self) -> bool {
    matches!(self, WarehouseError::Other(_))
  }
}

impl std::fmt::Display for WarehouseError {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      WarehouseError::Auth(message) => write!(formatter, "unable to authenticate - {}", message),
      WarehouseError::Transport(message) => write!(formatter, "unable to reach warehouse - {}", message),
      WarehouseError::Api { status, message } => write!(formatter, "{} {}", status, message),
      WarehouseError::Decode(message) => write!(formatter, "invalid warehouse response - {}", message),
      WarehouseError::Other(message) => write!(formatter, "{}", message),
    }
  }
}
