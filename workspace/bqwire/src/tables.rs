use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
  pub project_id: String,
  pub dataset_id: String,
}

impl DatasetReference {
  pub fn new<P, D>(project: P, dataset: D) -> Self
  where
    P: Into<String>,
    D: Into<String>,
  {
    DatasetReference {
      project_id: project.into(),
      dataset_id: dataset.into(),
    }
  }

  pub fn table<T>(&self, table: T) -> TableReference
  where
    T: Into<String>,
  {
    TableReference {
      project_id: self.project_id.clone(),
      dataset_id: self.dataset_id.clone(),
      table_id: table.into(),
    }
  }
}

impl std::fmt::Display for DatasetReference {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "{}.{}", self.project_id, self.dataset_id)
  }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
  pub project_id: String,
  pub dataset_id: String,
  pub table_id: String,
}

impl TableReference {
  pub fn new<P, D, T>(project: P, dataset: D, table: T) -> Self
  where
    P: Into<String>,
    D: Into<String>,
    T: Into<String>,
  {
    DatasetReference::new(project, dataset).table(table)
  }

  pub fn dataset(&self) -> DatasetReference {
    DatasetReference::new(self.project_id.as_str(), self.dataset_id.as_str())
  }

  /// REST resource path, e.g. `/projects/p/datasets/d/tables/t`.
  pub fn path(&self) -> String {
    format!(
      "/projects/{}/datasets/{}/tables/{}",
      self.project_id, self.dataset_id, self.table_id
    )
  }

  /// Backtick-quoted identifier usable inside standard SQL.
  pub fn quoted(&self) -> String {
    format!("`{}`", self)
  }
}

impl std::fmt::Display for TableReference {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
  }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteDisposition {
  WriteTruncate,
  WriteAppend,
  WriteEmpty,
}

impl Default for WriteDisposition {
  fn default() -> Self {
    WriteDisposition::WriteTruncate
  }
}

impl std::fmt::Display for WriteDisposition {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    let v = match self {
      WriteDisposition::WriteTruncate => "WRITE_TRUNCATE",
      WriteDisposition::WriteAppend => "WRITE_APPEND",
      WriteDisposition::WriteEmpty => "WRITE_EMPTY",
    };

    write!(formatter, "{}", v)
  }
}
