use ferry::CopyPlan;

use super::{client_failure, Step, TransferFailure, TransferOutput};
use crate::warehouse::Warehouse;

pub async fn copy(warehouse: &dyn Warehouse, plan: &CopyPlan) -> Result<TransferOutput, TransferFailure> {
  let job = warehouse
    .copy_table(&plan.source, &plan.destination, plan.disposition)
    .await
    .map_err(|error| client_failure(Step::Copy, error))?;

  if job.has_errors() {
    let details = job.details();
    log::warn!("copy job '{}' failed with errors: {}", job.id, details);
    return Err(TransferFailure::JobErrors {
      step: Step::Copy,
      details,
    });
  }

  log::info!(
    "successfully copied {} to {}. job id: {}",
    plan.source.table_id,
    plan.destination.table_id,
    job.id
  );

  Ok(TransferOutput::Copied { job: job.id })
}
