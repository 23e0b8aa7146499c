use ferry::WarehouseError;

mod copy;
mod materialize;

pub use copy::copy;
pub use materialize::materialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
  Copy,
  Staging,
  Destination,
}

impl std::fmt::Display for Step {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    let v = match self {
      Step::Copy => "copy",
      Step::Staging => "job 1 (staging)",
      Step::Destination => "job 2 (cross-region)",
    };

    write!(formatter, "{}", v)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CleanupOutcome {
  Skipped,
  Dropped,
  Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferOutput {
  Copied {
    job: String,
  },
  Materialized {
    table: String,
    job: String,
    bytes_processed: Option<u64>,
    cleanup: CleanupOutcome,
  },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferFailure {
  JobErrors { step: Step, details: String },
  Warehouse { step: Step, error: WarehouseError },
}

impl TransferFailure {
  pub fn step(&self) -> Step {
    match self {
      TransferFailure::JobErrors { step, .. } => *step,
      TransferFailure::Warehouse { step, .. } => *step,
    }
  }
}

pub(crate) fn client_failure(step: Step, error: WarehouseError) -> TransferFailure {
  if error.is_unexpected() {
    log::error!("unexpected failure during {} - {}", step, error);
  } else {
    log::warn!("warehouse call failed during {} - {}", step, error);
  }

  TransferFailure::Warehouse { step, error }
}
