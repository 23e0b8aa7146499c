use std::time::Duration;

use bqwire::TableReference;
use ferry::{names, ConfigViolation, CopyPlan, MaterializePlan};

use crate::constants;

#[derive(Debug, Clone)]
pub struct WarehouseConfig {
  pub base_url: String,
  pub job_project: String,
  pub access_token: Option<String>,
  pub metadata_url: String,
  pub poll_interval: Duration,
}

/// Everything the service needs, resolved once at boot.
#[derive(Debug, Clone)]
pub struct Config {
  pub addr: String,
  pub copy: CopyPlan,
  pub materialize: MaterializePlan,
  pub warehouse: WarehouseConfig,
}

fn parse_flag(field: &str, value: Option<String>) -> Result<bool, ConfigViolation> {
  match value.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref() {
    None | Some("false") | Some("0") | Some("no") => Ok(false),
    Some("true") | Some("1") | Some("yes") => Ok(true),
    Some(other) => Err(ConfigViolation::Invalid {
      field: field.to_string(),
      value: other.to_string(),
    }),
  }
}

fn parse_interval(value: Option<String>) -> Result<Duration, ConfigViolation> {
  let raw = match value {
    None => return Ok(Duration::from_millis(constants::DEFAULT_POLL_INTERVAL_MS)),
    Some(raw) => raw,
  };

  match raw.trim().parse::<u64>() {
    Ok(millis) if millis > 0 => Ok(Duration::from_millis(millis)),
    _ => Err(ConfigViolation::Invalid {
      field: constants::POLL_INTERVAL_ENV.to_string(),
      value: raw,
    }),
  }
}

fn parse_addr(addr: Option<String>, port: Option<String>) -> Result<String, ConfigViolation> {
  if let Some(addr) = addr {
    return Ok(addr);
  }

  match port {
    None => Ok(constants::DEFAULT_HTTP_ADDR.to_string()),
    Some(port) => port
      .trim()
      .parse::<u16>()
      .map(|number| format!("0.0.0.0:{}", number))
      .map_err(|_| ConfigViolation::Invalid {
        field: constants::PORT_ENV.to_string(),
        value: port,
      }),
  }
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigViolation> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary variable lookup; blank values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigViolation>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let or = |key: &str, fallback: &str| get(key).unwrap_or_else(|| fallback.to_string());

    let source = TableReference::new(
      or(constants::COPY_SOURCE_PROJECT_ENV, constants::DEFAULT_COPY_SOURCE_PROJECT),
      or(constants::COPY_SOURCE_DATASET_ENV, constants::DEFAULT_COPY_SOURCE_DATASET),
      or(constants::COPY_SOURCE_TABLE_ENV, constants::DEFAULT_COPY_SOURCE_TABLE),
    );
    let destination = TableReference::new(
      or(constants::COPY_DESTINATION_PROJECT_ENV, constants::DEFAULT_COPY_DESTINATION_PROJECT),
      or(constants::COPY_DESTINATION_DATASET_ENV, constants::DEFAULT_COPY_DESTINATION_DATASET),
      or(constants::COPY_DESTINATION_TABLE_ENV, constants::DEFAULT_COPY_DESTINATION_TABLE),
    );
    let job_project = get(constants::JOB_PROJECT_ENV).unwrap_or_else(|| destination.project_id.clone());
    let copy = CopyPlan::new(source, destination)?;

    let view = names::parse_table(
      constants::SOURCE_VIEW_ENV,
      &or(constants::SOURCE_VIEW_ENV, constants::DEFAULT_SOURCE_VIEW),
    )?;
    let staging = names::parse_dataset(
      constants::STAGING_DATASET_ENV,
      &or(constants::STAGING_DATASET_ENV, constants::DEFAULT_STAGING_DATASET),
    )?;
    let target = names::parse_dataset(
      constants::DESTINATION_DATASET_ENV,
      &or(constants::DESTINATION_DATASET_ENV, constants::DEFAULT_DESTINATION_DATASET),
    )?;
    let table = or(constants::MATERIALIZED_TABLE_ENV, constants::DEFAULT_MATERIALIZED_TABLE);
    let cleanup = parse_flag(constants::DROP_STAGING_ENV, get(constants::DROP_STAGING_ENV))?;

    let materialize = MaterializePlan::new(view, &staging, &target, table.trim())?
      .located(get(constants::STAGING_LOCATION_ENV).map(|location| location.trim().to_string()))
      .with_cleanup(cleanup);

    names::validate_project(&job_project).map_err(|violation| ConfigViolation::Identifier {
      field: constants::JOB_PROJECT_ENV.to_string(),
      value: job_project.clone(),
      violation,
    })?;

    let base_url = or(constants::BIGQUERY_URL_ENV, constants::DEFAULT_BIGQUERY_URL);
    http_types::Url::parse(&base_url).map_err(|_| ConfigViolation::Invalid {
      field: constants::BIGQUERY_URL_ENV.to_string(),
      value: base_url.clone(),
    })?;

    let warehouse = WarehouseConfig {
      base_url: base_url.trim_end_matches('/').to_string(),
      job_project,
      access_token: get(constants::ACCESS_TOKEN_ENV),
      metadata_url: or(constants::METADATA_TOKEN_URL_ENV, constants::DEFAULT_METADATA_TOKEN_URL),
      poll_interval: parse_interval(get(constants::POLL_INTERVAL_ENV))?,
    };

    let addr = parse_addr(get(constants::FERRY_HTTP_ADDR_ENV), get(constants::PORT_ENV))?;

    Ok(Config {
      addr,
      copy,
      materialize,
      warehouse,
    })
  }
}
