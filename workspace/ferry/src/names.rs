use bqwire::{DatasetReference, TableReference};

use crate::constants;
use crate::errors::{ConfigViolation, IdentifierViolation};

fn first_invalid<F>(value: &str, allowed: F) -> Option<char>
where
  F: Fn(char) -> bool,
{
  value.chars().find(|c| !allowed(*c))
}

fn validate_project_name(value: &str) -> Result<(), IdentifierViolation> {
  if value.is_empty() {
    return Err(IdentifierViolation::Empty);
  }

  let length = value.chars().count();

  if length < constants::MIN_PROJECT_ID_LEN {
    return Err(IdentifierViolation::TooShort);
  }

  if length > constants::MAX_PROJECT_ID_LEN {
    return Err(IdentifierViolation::TooLong);
  }

  if let Some(c) = first_invalid(value, |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
    return Err(IdentifierViolation::InvalidCharacter(c));
  }

  let starts = value.chars().next().map(|c| c.is_ascii_lowercase()).unwrap_or(false);

  match (starts, value.ends_with('-')) {
    (true, false) => Ok(()),
    _ => Err(IdentifierViolation::InvalidEdge),
  }
}

/// Project ids are either plain (`my-project`) or domain scoped (`example.com:my-project`).
pub fn validate_project(value: &str) -> Result<(), IdentifierViolation> {
  match value.split_once(':') {
    None => validate_project_name(value),
    Some((domain, name)) => {
      if domain.is_empty() {
        return Err(IdentifierViolation::InvalidEdge);
      }

      if let Some(c) = first_invalid(domain, |c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.') {
        return Err(IdentifierViolation::InvalidCharacter(c));
      }

      validate_project_name(name)
    }
  }
}

pub fn validate_dataset(value: &str) -> Result<(), IdentifierViolation> {
  if value.is_empty() {
    return Err(IdentifierViolation::Empty);
  }

  if value.len() > constants::MAX_DATASET_ID_LEN {
    return Err(IdentifierViolation::TooLong);
  }

  match first_invalid(value, |c| c.is_ascii_alphanumeric() || c == '_') {
    Some(c) => Err(IdentifierViolation::InvalidCharacter(c)),
    None => Ok(()),
  }
}

pub fn validate_table(value: &str) -> Result<(), IdentifierViolation> {
  if value.is_empty() {
    return Err(IdentifierViolation::Empty);
  }

  if value.len() > constants::MAX_TABLE_ID_LEN {
    return Err(IdentifierViolation::TooLong);
  }

  // Spaces are legal inside quoted table ids; line breaks are not.
  let forbidden = |c: char| c == '`' || c == '.' || c.is_control() || c == '\u{2028}' || c == '\u{2029}';

  match first_invalid(value, |c| !forbidden(c)) {
    Some(c) => Err(IdentifierViolation::InvalidCharacter(c)),
    None => Ok(()),
  }
}

fn wrap<F>(field: &str, value: &str, check: F) -> Result<(), ConfigViolation>
where
  F: Fn(&str) -> Result<(), IdentifierViolation>,
{
  check(value).map_err(|violation| ConfigViolation::Identifier {
    field: field.to_string(),
    value: value.to_string(),
    violation,
  })
}

pub fn check_dataset(field: &str, dataset: &DatasetReference) -> Result<(), ConfigViolation> {
  wrap(field, &dataset.project_id, validate_project)?;
  wrap(field, &dataset.dataset_id, validate_dataset)
}

pub fn check_table(field: &str, table: &TableReference) -> Result<(), ConfigViolation> {
  check_dataset(field, &table.dataset())?;
  wrap(field, &table.table_id, validate_table)
}

fn segments<'a>(field: &str, value: &'a str, expected: usize) -> Result<Vec<&'a str>, ConfigViolation> {
  let trimmed = value.trim().trim_matches('`');

  // Split from the right; domain scoped project ids may contain dots.
  let mut parts = trimmed.rsplitn(expected, '.').collect::<Vec<&str>>();
  parts.reverse();

  if parts.len() != expected || parts.iter().any(|part| part.is_empty()) {
    return Err(ConfigViolation::Segments {
      field: field.to_string(),
      value: value.to_string(),
      expected,
    });
  }

  Ok(parts)
}

/// Parses a fully qualified `project.dataset.table` name.
pub fn parse_table(field: &str, value: &str) -> Result<TableReference, ConfigViolation> {
  let parts = segments(field, value, 3)?;
  let table = TableReference::new(parts[0], parts[1], parts[2]);
  check_table(field, &table)?;
  Ok(table)
}

/// Parses a `project.dataset` name.
pub fn parse_dataset(field: &str, value: &str) -> Result<DatasetReference, ConfigViolation> {
  let parts = segments(field, value, 2)?;
  let dataset = DatasetReference::new(parts[0], parts[1]);
  check_dataset(field, &dataset)?;
  Ok(dataset)
}
