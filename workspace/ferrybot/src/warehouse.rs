use async_trait::async_trait;

use bqwire::{TableReference, WriteDisposition};
use ferry::{FinishedJob, WarehouseError};

/// The warehouse operations the transfers rely on. Both calls block until the submitted job reaches a terminal
/// state; job level errors are reported through [`FinishedJob::errors`], never as `Err`.
#[async_trait]
pub trait Warehouse: Send + Sync {
  async fn copy_table(
    &self,
    source: &TableReference,
    destination: &TableReference,
    disposition: WriteDisposition,
  ) -> Result<FinishedJob, WarehouseError>;

  async fn query(&self, sql: &str, location: Option<&str>) -> Result<FinishedJob, WarehouseError>;
}

#[cfg(test)]
pub mod testing {
  use std::collections::VecDeque;
  use std::sync::Mutex;

  use async_trait::async_trait;

  use bqwire::{TableReference, WriteDisposition};
  use ferry::{FinishedJob, WarehouseError};

  use super::Warehouse;

  #[derive(Debug, Clone, PartialEq)]
  pub enum Call {
    Copy(TableReference, TableReference, WriteDisposition),
    Query(String, Option<String>),
  }

  /// Replays scripted results in order and records every call it receives.
  #[derive(Default)]
  pub struct Recorder {
    results: Mutex<VecDeque<Result<FinishedJob, WarehouseError>>>,
    calls: Mutex<Vec<Call>>,
  }

  impl Recorder {
    pub fn scripted(results: Vec<Result<FinishedJob, WarehouseError>>) -> Self {
      Recorder {
        results: Mutex::new(results.into_iter().collect()),
        calls: Mutex::new(Vec::new()),
      }
    }

    pub fn calls(&self) -> Vec<Call> {
      self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Result<FinishedJob, WarehouseError> {
      self.calls.lock().unwrap().push(call);
      self
        .results
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(WarehouseError::Other("no scripted result".into())))
    }
  }

  #[async_trait]
  impl Warehouse for Recorder {
    async fn copy_table(
      &self,
      source: &TableReference,
      destination: &TableReference,
      disposition: WriteDisposition,
    ) -> Result<FinishedJob, WarehouseError> {
      self.next(Call::Copy(source.clone(), destination.clone(), disposition))
    }

    async fn query(&self, sql: &str, location: Option<&str>) -> Result<FinishedJob, WarehouseError> {
      self.next(Call::Query(sql.to_string(), location.map(|l| l.to_string())))
    }
  }
}
