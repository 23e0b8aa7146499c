use serde::{Deserialize, Serialize};

use crate::tables::{TableReference, WriteDisposition};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobReference {
  pub project_id: String,
  pub job_id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobConfigurationTableCopy {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source_table: Option<TableReference>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub source_tables: Vec<TableReference>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub destination_table: Option<TableReference>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub write_disposition: Option<WriteDisposition>,
}

impl JobConfigurationTableCopy {
  pub fn new(source: TableReference, destination: TableReference, disposition: WriteDisposition) -> Self {
    JobConfigurationTableCopy {
      source_table: Some(source),
      source_tables: Vec::new(),
      destination_table: Some(destination),
      write_disposition: Some(disposition),
    }
  }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobConfigurationQuery {
  #[serde(default)]
  pub query: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub use_legacy_sql: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobConfiguration {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub copy: Option<JobConfigurationTableCopy>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query: Option<JobConfigurationQuery>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
  Pending,
  Running,
  Done,
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorProto {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reason: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(default)]
  pub message: String,
}

impl ErrorProto {
  pub fn message<M>(message: M) -> Self
  where
    M: Into<String>,
  {
    ErrorProto {
      reason: None,
      location: None,
      message: message.into(),
    }
  }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobStatus {
  pub state: JobState,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_result: Option<ErrorProto>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub errors: Option<Vec<ErrorProto>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct QueryStatistics {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_bytes_processed: Option<String>,
}

// int64 fields arrive as json strings.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobStatistics {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_bytes_processed: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub query: Option<QueryStatistics>,
}

impl JobStatistics {
  pub fn bytes_processed(&self) -> Option<u64> {
    self
      .query
      .as_ref()
      .and_then(|query| query.total_bytes_processed.as_ref())
      .or(self.total_bytes_processed.as_ref())
      .and_then(|raw| raw.parse::<u64>().ok())
  }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Job {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub job_reference: Option<JobReference>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub configuration: Option<JobConfiguration>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<JobStatus>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub statistics: Option<JobStatistics>,
}

impl Job {
  pub fn copy(reference: JobReference, copy: JobConfigurationTableCopy) -> Self {
    let configuration = JobConfiguration {
      copy: Some(copy),
      ..JobConfiguration::default()
    };

    Job {
      job_reference: Some(reference),
      configuration: Some(configuration),
      ..Job::default()
    }
  }

  pub fn query(reference: JobReference, sql: &str) -> Self {
    let query = JobConfigurationQuery {
      query: sql.to_string(),
      use_legacy_sql: Some(false),
    };
    let configuration = JobConfiguration {
      query: Some(query),
      ..JobConfiguration::default()
    };

    Job {
      job_reference: Some(reference),
      configuration: Some(configuration),
      ..Job::default()
    }
  }

  pub fn state(&self) -> Option<JobState> {
    self.status.as_ref().map(|status| status.state)
  }

  pub fn is_done(&self) -> bool {
    self.state() == Some(JobState::Done)
  }

  pub fn id(&self) -> Option<&str> {
    self.job_reference.as_ref().map(|reference| reference.job_id.as_str())
  }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiError {
  pub code: u16,
  #[serde(default)]
  pub message: String,
  pub status: Option<String>,
  #[serde(default)]
  pub errors: Vec<ErrorProto>,
}

/// Body returned by the api for any non-2xx response.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorEnvelope {
  pub error: ApiError,
}

#[cfg(test)]
mod tests {
  use super::{ApiErrorEnvelope, Job, JobConfigurationTableCopy, JobReference, JobState};
  use crate::tables::{TableReference, WriteDisposition};

  #[test]
  fn test_decode_finished_query_job() {
    let body = r#"{
      "kind": "bigquery#job",
      "id": "gs-demo:EU.ferry_query_1",
      "jobReference": { "projectId": "gs-demo", "jobId": "ferry_query_1", "location": "EU" },
      "status": {
        "state": "DONE",
        "errorResult": { "reason": "quotaExceeded", "message": "quota exceeded" },
        "errors": [{ "reason": "quotaExceeded", "message": "quota exceeded" }]
      },
      "statistics": {
        "creationTime": "1700000000000",
        "totalBytesProcessed": "10",
        "query": { "totalBytesProcessed": "2048" }
      }
    }"#;

    let job = serde_json::from_str::<Job>(body).unwrap();
    assert!(job.is_done());
    assert_eq!(job.id(), Some("ferry_query_1"));
    assert_eq!(job.statistics.unwrap().bytes_processed(), Some(2048));
    let errors = job.status.unwrap().errors.unwrap();
    assert_eq!(errors[0].message, "quota exceeded");
  }

  #[test]
  fn test_decode_finished_multi_source_copy_job() {
    let body = r#"{
      "kind": "bigquery#job",
      "id": "gs-demo:EU.ferry_copy_1",
      "jobReference": { "projectId": "gs-demo", "jobId": "ferry_copy_1", "location": "EU" },
      "configuration": {
        "jobType": "COPY",
        "copy": {
          "sourceTables": [{ "projectId": "gs-demo", "datasetId": "eu", "tableId": "chain" }],
          "destinationTable": { "projectId": "gs-demo", "datasetId": "asia", "tableId": "chain" },
          "operationType": "COPY"
        }
      },
      "status": { "state": "DONE" },
      "statistics": { "creationTime": "1700000000000", "copy": { "copiedRows": "12" } }
    }"#;

    let job = serde_json::from_str::<Job>(body).unwrap();
    assert!(job.is_done());
    assert_eq!(job.id(), Some("ferry_copy_1"));
    let copy = job.configuration.and_then(|configuration| configuration.copy).unwrap();
    assert_eq!(copy.source_table, None);
    assert_eq!(copy.source_tables, vec![TableReference::new("gs-demo", "eu", "chain")]);
    assert_eq!(copy.write_disposition, None);
  }

  #[test]
  fn test_decode_query_job_without_echoed_sql() {
    let body = r#"{
      "jobReference": { "projectId": "gs-demo", "jobId": "ferry_query_1" },
      "configuration": { "query": { "destinationTable": { "projectId": "gs-demo", "datasetId": "eu", "tableId": "anon" } } },
      "status": { "state": "RUNNING" }
    }"#;

    let job = serde_json::from_str::<Job>(body).unwrap();
    assert_eq!(job.state(), Some(JobState::Running));
    let query = job.configuration.and_then(|configuration| configuration.query).unwrap();
    assert_eq!(query.query, "");
    assert_eq!(query.use_legacy_sql, None);
  }

  #[test]
  fn test_decode_unknown_state() {
    let body = r#"{ "status": { "state": "SUSPENDED" } }"#;
    let job = serde_json::from_str::<Job>(body).unwrap();
    assert_eq!(job.state(), Some(JobState::Unknown));
    assert!(!job.is_done());
  }

  #[test]
  fn test_encode_copy_job() {
    let reference = JobReference {
      project_id: "gs-demo".into(),
      job_id: "ferry_copy_1".into(),
      location: None,
    };
    let copy = JobConfigurationTableCopy::new(
      TableReference::new("gs-demo", "eu", "chain"),
      TableReference::new("gs-demo", "asia", "chain"),
      WriteDisposition::WriteTruncate,
    );
    let json = serde_json::to_value(&Job::copy(reference, copy)).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "jobReference": { "projectId": "gs-demo", "jobId": "ferry_copy_1" },
        "configuration": {
          "copy": {
            "sourceTable": { "projectId": "gs-demo", "datasetId": "eu", "tableId": "chain" },
            "destinationTable": { "projectId": "gs-demo", "datasetId": "asia", "tableId": "chain" },
            "writeDisposition": "WRITE_TRUNCATE"
          }
        }
      })
    );
  }

  #[test]
  fn test_encode_query_job_uses_standard_sql() {
    let reference = JobReference {
      project_id: "gs-demo".into(),
      job_id: "ferry_query_1".into(),
      location: Some("EU".into()),
    };
    let json = serde_json::to_value(&Job::query(reference, "SELECT 1")).unwrap();
    assert_eq!(json["configuration"]["query"]["useLegacySql"], serde_json::json!(false));
    assert_eq!(json["jobReference"]["location"], serde_json::json!("EU"));
  }

  #[test]
  fn test_decode_error_envelope() {
    let body = r#"{
      "error": {
        "code": 403,
        "message": "Access Denied: Table gs-demo:eu.chain",
        "status": "PERMISSION_DENIED",
        "errors": [{ "message": "Access Denied: Table gs-demo:eu.chain", "reason": "accessDenied" }]
      }
    }"#;
    let envelope = serde_json::from_str::<ApiErrorEnvelope>(body).unwrap();
    assert_eq!(envelope.error.code, 403);
    assert_eq!(envelope.error.status.as_deref(), Some("PERMISSION_DENIED"));
    assert_eq!(envelope.error.errors.len(), 1);
  }
}
