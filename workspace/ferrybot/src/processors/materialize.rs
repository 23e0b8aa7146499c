use ferry::{FinishedJob, MaterializePlan};

use super::{client_failure, CleanupOutcome, Step, TransferFailure, TransferOutput};
use crate::warehouse::Warehouse;

async fn run(
  warehouse: &dyn Warehouse,
  step: Step,
  sql: &str,
  location: Option<&str>,
) -> Result<FinishedJob, TransferFailure> {
  let job = warehouse
    .query(sql, location)
    .await
    .map_err(|error| client_failure(step, error))?;

  if job.has_errors() {
    let details = job.details();
    log::warn!("{} failed with errors: {}", step, details);
    return Err(TransferFailure::JobErrors { step, details });
  }

  Ok(job)
}

async fn drop_staging(warehouse: &dyn Warehouse, plan: &MaterializePlan) -> CleanupOutcome {
  if !plan.cleanup {
    log::debug!("leaving staging table '{}' in place", plan.staging);
    return CleanupOutcome::Skipped;
  }

  let location = plan.staging_location.as_deref();

  match warehouse.query(&plan.cleanup_statement(), location).await {
    Ok(job) if job.has_errors() => {
      log::warn!("unable to drop staging table '{}' - {}", plan.staging, job.details());
      CleanupOutcome::Failed(job.details())
    }
    Ok(_) => {
      log::info!("dropped staging table '{}'", plan.staging);
      CleanupOutcome::Dropped
    }
    Err(error) => {
      log::warn!("unable to drop staging table '{}' - {}", plan.staging, error);
      CleanupOutcome::Failed(format!("{}", error))
    }
  }
}

/// Materializes the view into the staging table, then copies staging to the destination. The second statement
/// only runs once the first finished without errors.
pub async fn materialize(warehouse: &dyn Warehouse, plan: &MaterializePlan) -> Result<TransferOutput, TransferFailure> {
  log::info!("starting job to materialize view: {}", plan.view);
  log::info!("destination table: {}", plan.destination);

  let location = plan.staging_location.as_deref();
  let staged = run(warehouse, Step::Staging, &plan.staging_statement(), location).await?;
  log::debug!("staging job '{}' complete", staged.id);

  let copied = run(warehouse, Step::Destination, &plan.destination_statement(), None).await?;

  log::info!("successfully materialized view into table: {}", plan.destination.table_id);
  log::info!("total bytes processed (job 2): {:?}", copied.bytes_processed);

  let cleanup = drop_staging(warehouse, plan).await;

  Ok(TransferOutput::Materialized {
    table: plan.destination.table_id.clone(),
    job: copied.id,
    bytes_processed: copied.bytes_processed,
    cleanup,
  })
}
