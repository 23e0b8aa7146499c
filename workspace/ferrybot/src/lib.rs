mod auth;
mod bigquery;
mod services;
mod web;

pub mod constants;
pub mod env;
pub mod processors;
pub mod routes;
pub mod warehouse;

pub use bigquery::BigQuery;
pub use services::Services;
