use std::sync::Arc;

use crate::bigquery::BigQuery;
use crate::env::Config;
use crate::warehouse::Warehouse;

#[derive(Clone)]
pub struct Services {
  warehouse: Arc<dyn Warehouse>,
  config: Arc<Config>,
  version: String,
}

impl Services {
  pub fn warehouse(&self) -> &dyn Warehouse {
    self.warehouse.as_ref()
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  pub fn with_warehouse(config: Config, warehouse: Arc<dyn Warehouse>) -> Self {
    Services {
      warehouse,
      config: Arc::new(config),
      version: std::option_env!("FERRYBOT_VERSION").unwrap_or("dev").to_string(),
    }
  }

  pub fn new(config: Config) -> Self {
    log::info!(
      "creating bigquery client for project '{}' at {}",
      config.warehouse.job_project,
      config.warehouse.base_url
    );
    let warehouse = Arc::new(BigQuery::new(&config.warehouse));
    log::info!("services ready!");
    Self::with_warehouse(config, warehouse)
  }
}

impl std::fmt::Display for Services {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "ferrybot-services@v{}", self.version)
  }
}
