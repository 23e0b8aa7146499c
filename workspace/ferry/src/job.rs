use bqwire::Job;

/// Summary of a job that reached the `DONE` state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinishedJob {
  pub id: String,
  pub errors: Vec<String>,
  pub bytes_processed: Option<u64>,
}

impl FinishedJob {
  pub fn succeeded<I>(id: I) -> Self
  where
    I: Into<String>,
  {
    FinishedJob {
      id: id.into(),
      ..FinishedJob::default()
    }
  }

  pub fn failed<I, E>(id: I, errors: Vec<E>) -> Self
  where
    I: Into<String>,
    E: Into<String>,
  {
    FinishedJob {
      id: id.into(),
      errors: errors.into_iter().map(|e| e.into()).collect(),
      bytes_processed: None,
    }
  }

  pub fn has_errors(&self) -> bool {
    !self.errors.is_empty()
  }

  pub fn details(&self) -> String {
    self.errors.join("\n")
  }
}

impl From<&Job> for FinishedJob {
  fn from(job: &Job) -> Self {
    let id = job.id().map(|id| id.to_string()).unwrap_or_default();
    let bytes_processed = job.statistics.as_ref().and_then(|stats| stats.bytes_processed());

    let mut errors = job
      .status
      .as_ref()
      .and_then(|status| status.errors.as_ref())
      .map(|list| list.iter().map(|e| e.message.clone()).collect::<Vec<String>>())
      .unwrap_or_default();

    // The terminal error is usually repeated in `errors`, but not always.
    if let Some(result) = job.status.as_ref().and_then(|status| status.error_result.as_ref()) {
      if !errors.contains(&result.message) {
        errors.insert(0, result.message.clone());
      }
    }

    FinishedJob {
      id,
      errors,
      bytes_processed,
    }
  }
}
