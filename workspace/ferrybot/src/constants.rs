pub const FERRY_HTTP_ADDR_ENV: &'static str = "FERRY_HTTP_ADDR";
pub const PORT_ENV: &'static str = "PORT";
pub const DEFAULT_HTTP_ADDR: &'static str = "0.0.0.0:8080";

pub const COPY_SOURCE_PROJECT_ENV: &'static str = "FERRY_COPY_SOURCE_PROJECT";
pub const COPY_SOURCE_DATASET_ENV: &'static str = "FERRY_COPY_SOURCE_DATASET";
pub const COPY_SOURCE_TABLE_ENV: &'static str = "FERRY_COPY_SOURCE_TABLE";

pub const COPY_DESTINATION_PROJECT_ENV: &'static str = "FERRY_COPY_DESTINATION_PROJECT";
pub const COPY_DESTINATION_DATASET_ENV: &'static str = "FERRY_COPY_DESTINATION_DATASET";
pub const COPY_DESTINATION_TABLE_ENV: &'static str = "FERRY_COPY_DESTINATION_TABLE";

pub const DEFAULT_COPY_SOURCE_PROJECT: &'static str = "gs-digital-uniteddata-prod";
pub const DEFAULT_COPY_SOURCE_DATASET: &'static str = "united_products_referential_eu";
pub const DEFAULT_COPY_SOURCE_TABLE: &'static str = "d_bem_chain_type";

pub const DEFAULT_COPY_DESTINATION_PROJECT: &'static str = "gs-digital-uniteddata-prod";
pub const DEFAULT_COPY_DESTINATION_DATASET: &'static str = "united_products_referential";
pub const DEFAULT_COPY_DESTINATION_TABLE: &'static str = "d_bem_chain_type";

pub const SOURCE_VIEW_ENV: &'static str = "FERRY_SOURCE_VIEW";
pub const STAGING_DATASET_ENV: &'static str = "FERRY_STAGING_DATASET";
pub const DESTINATION_DATASET_ENV: &'static str = "FERRY_DESTINATION_DATASET";
pub const MATERIALIZED_TABLE_ENV: &'static str = "FERRY_MATERIALIZED_TABLE";
pub const STAGING_LOCATION_ENV: &'static str = "FERRY_STAGING_LOCATION";
pub const DROP_STAGING_ENV: &'static str = "FERRY_DROP_STAGING";

pub const DEFAULT_SOURCE_VIEW: &'static str = "c4-united-datasharing-prd.products_referential.d_bem_chain_type";
pub const DEFAULT_STAGING_DATASET: &'static str = "gs-digital-uniteddata-prod.united_products_referential_eu";
pub const DEFAULT_DESTINATION_DATASET: &'static str = "gs-digital-uniteddata-prod.united_products_referential";
pub const DEFAULT_MATERIALIZED_TABLE: &'static str = "d_bem_chain_typexx";

pub const JOB_PROJECT_ENV: &'static str = "FERRY_JOB_PROJECT";
pub const BIGQUERY_URL_ENV: &'static str = "FERRY_BIGQUERY_URL";
pub const ACCESS_TOKEN_ENV: &'static str = "FERRY_ACCESS_TOKEN";
pub const METADATA_TOKEN_URL_ENV: &'static str = "FERRY_METADATA_TOKEN_URL";
pub const POLL_INTERVAL_ENV: &'static str = "FERRY_POLL_INTERVAL_MS";

pub const DEFAULT_BIGQUERY_URL: &'static str = "https://bigquery.googleapis.com/bigquery/v2";
pub const DEFAULT_METADATA_TOKEN_URL: &'static str =
  "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

pub const COPY_JOB_PREFIX: &'static str = "ferry_copy";
pub const QUERY_JOB_PREFIX: &'static str = "ferry_query";

pub const COPY_SUCCESS: &'static str = "BigQuery table copy job succeeded!";
pub const COPY_JOB_FAILED: &'static str = "Error: Copy job failed with errors.";
pub const COPY_CLIENT_FAILED: &'static str = "Error: BigQuery copy job failed.";
pub const MATERIALIZE_SUCCESS: &'static str = "Success: View materialized to table";
pub const MATERIALIZE_CLIENT_FAILED: &'static str = "An unexpected error occurred:";
