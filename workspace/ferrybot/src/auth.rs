use serde::Deserialize;

use ferry::WarehouseError;

#[derive(Debug, Deserialize)]
struct MetadataToken {
  access_token: String,
  expires_in: Option<u64>,
}

/// Where bearer tokens for the warehouse api come from.
#[derive(Clone)]
pub enum TokenSource {
  Static(String),
  Metadata(String),
}

impl TokenSource {
  pub fn new(token: Option<String>, metadata_url: &str) -> Self {
    match token {
      Some(token) => TokenSource::Static(token),
      None => TokenSource::Metadata(metadata_url.to_string()),
    }
  }

  pub async fn token(&self, http: &surf::Client) -> Result<String, WarehouseError> {
    let uri = match self {
      TokenSource::Static(token) => return Ok(token.clone()),
      TokenSource::Metadata(uri) => uri,
    };

    let mut res = http
      .get(uri)
      .header("Metadata-Flavor", "Google")
      .await
      .map_err(|error| WarehouseError::Auth(format!("metadata server unavailable - {}", error)))?;

    if res.status() != surf::StatusCode::Ok {
      log::warn!("bad response status from metadata server - '{:?}'", res.status());
      return Err(WarehouseError::Auth(format!("metadata server responded {}", res.status())));
    }

    let parsed = res
      .body_json::<MetadataToken>()
      .await
      .map_err(|error| WarehouseError::Auth(format!("unreadable metadata token - {}", error)))?;

    log::debug!("loaded metadata token (expires in {:?}s)", parsed.expires_in);
    Ok(parsed.access_token)
  }
}

impl std::fmt::Debug for TokenSource {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      TokenSource::Static(_) => write!(formatter, "static-token"),
      TokenSource::Metadata(uri) => write!(formatter, "metadata({})", uri),
    }
  }
}
