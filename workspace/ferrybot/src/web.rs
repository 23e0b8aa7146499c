use http_types;
use tide;

pub use http_types::Url;
pub use tide::{Body, Error, Response, Result};
pub type Request = tide::Request<crate::Services>;
