use crate::constants;
use crate::processors::{self, CleanupOutcome, Step, TransferFailure, TransferOutput};
use crate::web::{Request, Response, Result};

fn text(status: u16, body: String) -> Response {
  Response::builder(status).body(body).build()
}

fn copy_response(result: std::result::Result<TransferOutput, TransferFailure>) -> Response {
  match result {
    Ok(_) => text(200, constants::COPY_SUCCESS.to_string()),
    Err(TransferFailure::JobErrors { details, .. }) => {
      text(500, format!("{} {}", constants::COPY_JOB_FAILED, details))
    }
    Err(TransferFailure::Warehouse { error, .. }) => {
      text(500, format!("{} {}", constants::COPY_CLIENT_FAILED, error))
    }
  }
}

fn materialize_response(result: std::result::Result<TransferOutput, TransferFailure>) -> Response {
  match result {
    Ok(TransferOutput::Materialized { table, cleanup, .. }) => {
      let body = match cleanup {
        CleanupOutcome::Failed(reason) => format!(
          "{} {} (staging table left in place: {})",
          constants::MATERIALIZE_SUCCESS,
          table,
          reason
        ),
        _ => format!("{} {}", constants::MATERIALIZE_SUCCESS, table),
      };
      text(200, body)
    }
    Ok(other) => {
      log::error!("unexpected output from materialization - {:?}", other);
      text(500, format!("{} {:?}", constants::MATERIALIZE_CLIENT_FAILED, other))
    }
    Err(TransferFailure::JobErrors { step, details }) => {
      let number = match step {
        Step::Destination => 2,
        _ => 1,
      };
      text(500, format!("BigQuery job {} failed. Errors: {}", number, details))
    }
    Err(TransferFailure::Warehouse { error, .. }) => {
      text(500, format!("{} {}", constants::MATERIALIZE_CLIENT_FAILED, error))
    }
  }
}

pub async fn copy(request: Request) -> Result {
  let services = request.state();
  log::info!("copy requested ({} {})", request.method(), request.url().path());
  let result = processors::copy(services.warehouse(), &services.config().copy).await;
  Ok(copy_response(result))
}

pub async fn materialize(request: Request) -> Result {
  let services = request.state();
  log::info!("materialization requested ({} {})", request.method(), request.url().path());
  let result = processors::materialize(services.warehouse(), &services.config().materialize).await;
  Ok(materialize_response(result))
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use http_types::{Method, StatusCode, Url};

  use crate::env::Config;
  use crate::routes::application;
  use crate::warehouse::testing::{Call, Recorder};
  use crate::Services;
  use ferry::{FinishedJob, WarehouseError};

  fn invoke(recorder: Arc<Recorder>, config: Config, method: Method, path: &str) -> (StatusCode, String) {
    let app = application(Services::with_warehouse(config, recorder));
    let url = Url::parse(&format!("http://ferrybot.local{}", path)).unwrap();
    let request = http_types::Request::new(method, url);

    async_std::task::block_on(async {
      let mut response: http_types::Response = app.respond(request).await.unwrap();
      let body = response.body_string().await.unwrap();
      (response.status(), body)
    })
  }

  fn defaults() -> Config {
    Config::from_lookup(|_| None).unwrap()
  }

  #[test]
  fn test_copy_success() {
    let recorder = Arc::new(Recorder::scripted(vec![Ok(FinishedJob::succeeded("ferry_copy_1"))]));
    let (status, body) = invoke(recorder.clone(), defaults(), Method::Post, "/copy");

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(body, "BigQuery table copy job succeeded!");
    assert_eq!(recorder.calls().len(), 1);
  }

  #[test]
  fn test_copy_any_method() {
    let recorder = Arc::new(Recorder::scripted(vec![Ok(FinishedJob::succeeded("ferry_copy_1"))]));
    let (status, _) = invoke(recorder, defaults(), Method::Get, "/copy");
    assert_eq!(status, StatusCode::Ok);
  }

  #[test]
  fn test_copy_job_errors() {
    let job = FinishedJob::failed("ferry_copy_1", vec!["quota exceeded"]);
    let recorder = Arc::new(Recorder::scripted(vec![Ok(job)]));
    let (status, body) = invoke(recorder, defaults(), Method::Post, "/copy");

    assert_eq!(status, StatusCode::InternalServerError);
    assert!(body.contains("quota exceeded"));
    assert_eq!(body, "Error: Copy job failed with errors. quota exceeded");
  }

  #[test]
  fn test_copy_client_failure() {
    let error = WarehouseError::Api {
      status: 404,
      message: "Not found: Table gs-digital-uniteddata-prod:united_products_referential_eu.d_bem_chain_type".into(),
    };
    let recorder = Arc::new(Recorder::scripted(vec![Err(error)]));
    let (status, body) = invoke(recorder, defaults(), Method::Post, "/copy");

    assert_eq!(status, StatusCode::InternalServerError);
    assert!(body.starts_with("Error: BigQuery copy job failed. 404 Not found"));
  }

  #[test]
  fn test_materialize_success() {
    let recorder = Arc::new(Recorder::scripted(vec![
      Ok(FinishedJob::succeeded("ferry_query_1")),
      Ok(FinishedJob::succeeded("ferry_query_2")),
    ]));
    let (status, body) = invoke(recorder.clone(), defaults(), Method::Post, "/materialize");

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(body, "Success: View materialized to table d_bem_chain_typexx");

    let config = defaults();
    assert_eq!(
      recorder.calls(),
      vec![
        Call::Query(config.materialize.staging_statement(), None),
        Call::Query(config.materialize.destination_statement(), None),
      ]
    );
  }

  #[test]
  fn test_materialize_first_step_fails() {
    let recorder = Arc::new(Recorder::scripted(vec![
      Ok(FinishedJob::failed("ferry_query_1", vec!["Access Denied: View", "invalid query"])),
      Ok(FinishedJob::succeeded("ferry_query_2")),
    ]));
    let (status, body) = invoke(recorder.clone(), defaults(), Method::Post, "/materialize");

    assert_eq!(status, StatusCode::InternalServerError);
    assert_eq!(body, "BigQuery job 1 failed. Errors: Access Denied: View\ninvalid query");
    assert_eq!(recorder.calls().len(), 1);
  }

  #[test]
  fn test_materialize_second_step_fails() {
    let recorder = Arc::new(Recorder::scripted(vec![
      Ok(FinishedJob::succeeded("ferry_query_1")),
      Ok(FinishedJob::failed("ferry_query_2", vec!["quota exceeded"])),
    ]));
    let (status, body) = invoke(recorder, defaults(), Method::Post, "/materialize");

    assert_eq!(status, StatusCode::InternalServerError);
    assert_eq!(body, "BigQuery job 2 failed. Errors: quota exceeded");
  }

  #[test]
  fn test_materialize_client_failure() {
    let recorder = Arc::new(Recorder::scripted(vec![Err(WarehouseError::Other("boom".into()))]));
    let (status, body) = invoke(recorder.clone(), defaults(), Method::Put, "/materialize");

    assert_eq!(status, StatusCode::InternalServerError);
    assert_eq!(body, "An unexpected error occurred: boom");
    assert_eq!(recorder.calls().len(), 1);
  }

  #[test]
  fn test_materialize_cleanup_failure_still_succeeds() {
    let config = Config::from_lookup(|key| match key {
      "FERRY_DROP_STAGING" => Some("true".into()),
      _ => None,
    })
    .unwrap();
    let recorder = Arc::new(Recorder::scripted(vec![
      Ok(FinishedJob::succeeded("ferry_query_1")),
      Ok(FinishedJob::succeeded("ferry_query_2")),
      Ok(FinishedJob::failed("ferry_query_3", vec!["table is locked"])),
    ]));
    let (status, body) = invoke(recorder.clone(), config, Method::Post, "/materialize");

    assert_eq!(status, StatusCode::Ok);
    assert_eq!(
      body,
      "Success: View materialized to table d_bem_chain_typexx (staging table left in place: table is locked)"
    );
    assert_eq!(recorder.calls().len(), 3);
  }

  #[test]
  fn test_heartbeat() {
    let recorder = Arc::new(Recorder::default());
    let (status, body) = invoke(recorder.clone(), defaults(), Method::Get, "/heartbeat");

    assert_eq!(status, StatusCode::Ok);
    let parsed = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert!(parsed["version"].is_string());
    assert!(parsed["time"].is_string());
    assert!(recorder.calls().is_empty());
  }
}
