use std::time::Duration;

use async_trait::async_trait;

use bqwire::jobs::JobConfigurationTableCopy;
use bqwire::{ApiErrorEnvelope, Job, JobReference, TableReference, WriteDisposition};
use ferry::{FinishedJob, WarehouseError};

use crate::auth::TokenSource;
use crate::constants;
use crate::env::WarehouseConfig;
use crate::warehouse::Warehouse;
use crate::web::Url;

fn transport_error(error: surf::Error) -> WarehouseError {
  WarehouseError::Transport(format!("{}", error))
}

async fn job_from_response(response: &mut surf::Response) -> Result<Job, WarehouseError> {
  let status = response.status();

  if status.is_success() {
    return response
      .body_json::<Job>()
      .await
      .map_err(|error| WarehouseError::Decode(format!("{}", error)));
  }

  let body = response.body_string().await.unwrap_or_default();
  let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
    .map(|envelope| envelope.error.message)
    .unwrap_or(body);

  log::warn!("bad status code from warehouse api - '{:?}'", status);

  match status {
    surf::StatusCode::Unauthorized | surf::StatusCode::Forbidden => {
      Err(WarehouseError::Auth(format!("{} {}", u16::from(status), message)))
    }
    other => Err(WarehouseError::Api {
      status: u16::from(other),
      message,
    }),
  }
}

/// BigQuery REST v2 client. Jobs are created with a client side id and polled until done.
pub struct BigQuery {
  http: surf::Client,
  base_url: String,
  project: String,
  tokens: TokenSource,
  poll_interval: Duration,
}

impl BigQuery {
  pub fn new(config: &WarehouseConfig) -> Self {
    BigQuery {
      http: surf::Client::new(),
      base_url: config.base_url.clone(),
      project: config.job_project.clone(),
      tokens: TokenSource::new(config.access_token.clone(), &config.metadata_url),
      poll_interval: config.poll_interval,
    }
  }

  fn reference(&self, prefix: &str, location: Option<&str>) -> JobReference {
    JobReference {
      project_id: self.project.clone(),
      job_id: format!("{}_{}", prefix, uuid::Uuid::new_v4().to_simple()),
      location: location.map(|l| l.to_string()),
    }
  }

  fn jobs_url(&self) -> String {
    format!("{}/projects/{}/jobs", self.base_url, self.project)
  }

  fn job_url(&self, reference: &JobReference) -> Result<Url, WarehouseError> {
    let raw = format!(
      "{}/projects/{}/jobs/{}",
      self.base_url, reference.project_id, reference.job_id
    );

    let parsed = match &reference.location {
      Some(location) => Url::parse_with_params(&raw, &[("location", location.as_str())]),
      None => Url::parse(&raw),
    };

    parsed.map_err(|error| WarehouseError::Other(format!("bad job url '{}' - {}", raw, error)))
  }

  async fn authorization(&self) -> Result<String, WarehouseError> {
    self.tokens.token(&self.http).await.map(|token| format!("Bearer {}", token))
  }

  async fn submit(&self, job: &Job) -> Result<Job, WarehouseError> {
    let authorization = self.authorization().await?;
    let request = self
      .http
      .post(self.jobs_url())
      .header("Authorization", authorization)
      .body_json(job)
      .map_err(|error| WarehouseError::Other(format!("unable to serialize job - {}", error)))?;

    let mut response = request.await.map_err(transport_error)?;
    job_from_response(&mut response).await
  }

  async fn fetch(&self, reference: &JobReference) -> Result<Job, WarehouseError> {
    let authorization = self.authorization().await?;
    let url = self.job_url(reference)?;
    let mut response = self
      .http
      .get(url)
      .header("Authorization", authorization)
      .await
      .map_err(transport_error)?;

    job_from_response(&mut response).await
  }

  // No upper bound on the wait; the hosting platform's request timeout is the only ceiling.
  async fn wait(&self, mut job: Job) -> Result<FinishedJob, WarehouseError> {
    let reference = job
      .job_reference
      .clone()
      .ok_or_else(|| WarehouseError::Decode("job response without a job reference".into()))?;

    let mut attempt = 0u32;

    while !job.is_done() {
      attempt = attempt + 1;
      log::debug!("job '{}' is {:?} (poll {})", reference.job_id, job.state(), attempt);
      async_std::task::sleep(self.poll_interval).await;
      job = self.fetch(&reference).await?;
    }

    Ok(FinishedJob::from(&job))
  }
}

#[async_trait]
impl Warehouse for BigQuery {
  async fn copy_table(
    &self,
    source: &TableReference,
    destination: &TableReference,
    disposition: WriteDisposition,
  ) -> Result<FinishedJob, WarehouseError> {
    log::info!("starting copy job from {} to {}...", source.path(), destination.path());

    let copy = JobConfigurationTableCopy::new(source.clone(), destination.clone(), disposition);
    let job = Job::copy(self.reference(constants::COPY_JOB_PREFIX, None), copy);
    let submitted = self.submit(&job).await?;
    let finished = self.wait(submitted).await?;

    log::debug!("copy job '{}' finished with {} errors", finished.id, finished.errors.len());
    Ok(finished)
  }

  async fn query(&self, sql: &str, location: Option<&str>) -> Result<FinishedJob, WarehouseError> {
    log::debug!("submitting query (location {:?}) - {}", location, sql);

    let job = Job::query(self.reference(constants::QUERY_JOB_PREFIX, location), sql);
    let submitted = self.submit(&job).await?;
    let finished = self.wait(submitted).await?;

    log::debug!(
      "query job '{}' finished with {} errors, {:?} bytes processed",
      finished.id,
      finished.errors.len(),
      finished.bytes_processed
    );
    Ok(finished)
  }
}
