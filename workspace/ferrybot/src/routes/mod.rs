use serde::Serialize;

pub mod transfers;

use crate::web::{Body, Request, Response, Result};
use crate::Services;

#[derive(Serialize)]
struct Heartbeat {
  time: chrono::DateTime<chrono::offset::Utc>,
  version: String,
}

pub async fn heartbeat(request: Request) -> Result {
  let heartbeat = Heartbeat {
    time: chrono::offset::Utc::now(),
    version: request.state().version().to_string(),
  };
  let body = Body::from_json(&heartbeat)?;
  Ok(Response::builder(200).body(body).build())
}

/// Mounts every route. The transfer endpoints accept any method; the request itself carries no input.
pub fn application(services: Services) -> tide::Server<Services> {
  let mut app = tide::with_state(services);
  app.at("/heartbeat").get(heartbeat);
  app.at("/copy").all(transfers::copy);
  app.at("/materialize").all(transfers::materialize);
  app
}
