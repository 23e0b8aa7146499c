use bqwire::{DatasetReference, TableReference, WriteDisposition};

use crate::errors::ConfigViolation;
use crate::names;
use crate::sql;

fn distinct(
  first: &'static str,
  second: &'static str,
  a: &TableReference,
  b: &TableReference,
) -> Result<(), ConfigViolation> {
  if a == b {
    return Err(ConfigViolation::SameTable {
      first,
      second,
      table: a.to_string(),
    });
  }

  Ok(())
}

/// A server side copy of one table over another.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPlan {
  pub source: TableReference,
  pub destination: TableReference,
  pub disposition: WriteDisposition,
}

impl CopyPlan {
  pub fn new(source: TableReference, destination: TableReference) -> Result<Self, ConfigViolation> {
    names::check_table("copy source", &source)?;
    names::check_table("copy destination", &destination)?;
    distinct("copy source", "copy destination", &source, &destination)?;

    Ok(CopyPlan {
      source,
      destination,
      disposition: WriteDisposition::WriteTruncate,
    })
  }
}

/// Materializes `view` into `staging`, then rebuilds `destination` from `staging`. Both tables share one name
/// in their respective datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializePlan {
  pub view: TableReference,
  pub staging: TableReference,
  pub destination: TableReference,
  pub staging_location: Option<String>,
  pub cleanup: bool,
}

impl MaterializePlan {
  pub fn new(
    view: TableReference,
    staging: &DatasetReference,
    destination: &DatasetReference,
    table: &str,
  ) -> Result<Self, ConfigViolation> {
    let staging = staging.table(table);
    let destination = destination.table(table);

    names::check_table("source view", &view)?;
    names::check_table("staging table", &staging)?;
    names::check_table("destination table", &destination)?;
    distinct("staging table", "source view", &staging, &view)?;
    distinct("staging table", "destination table", &staging, &destination)?;

    Ok(MaterializePlan {
      view,
      staging,
      destination,
      staging_location: None,
      cleanup: false,
    })
  }

  pub fn located(self, staging_location: Option<String>) -> Self {
    MaterializePlan {
      staging_location,
      ..self
    }
  }

  pub fn with_cleanup(self, cleanup: bool) -> Self {
    MaterializePlan { cleanup, ..self }
  }

  pub fn staging_statement(&self) -> String {
    sql::create_or_replace(&self.staging, &self.view)
  }

  pub fn destination_statement(&self) -> String {
    sql::create_or_replace(&self.destination, &self.staging)
  }

  pub fn cleanup_statement(&self) -> String {
    sql::drop_table(&self.staging)
  }
}
