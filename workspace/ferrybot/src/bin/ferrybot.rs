use std::io::{Error, ErrorKind, Result};

use async_std;
use dotenv;
use env_logger;

use ferrybot;

fn main() -> Result<()> {
  if let Err(error) = dotenv::dotenv() {
    eprintln!("no '.env' loaded ({}), using process environment", error);
  }

  env_logger::init();

  let config = ferrybot::env::Config::from_env().map_err(|violation| {
    log::error!("invalid configuration - {}", violation);
    Error::new(ErrorKind::Other, format!("{}", violation))
  })?;

  log::info!("copy job configured: {} -> {}", config.copy.source, config.copy.destination);
  log::info!(
    "materialization configured: {} -> {} -> {} (drop staging: {})",
    config.materialize.view,
    config.materialize.staging,
    config.materialize.destination,
    config.materialize.cleanup
  );

  if !config.materialize.cleanup {
    log::warn!("staging table '{}' is kept after every run", config.materialize.staging);
  }

  async_std::task::block_on(async {
    let addr = config.addr.clone();
    let services = ferrybot::Services::new(config);
    log::info!("{} ready, creating application", services);
    let app = ferrybot::routes::application(services);
    log::info!("spawning tide server on {}", addr);
    app.listen(&addr).await?;
    Ok(())
  })
}
