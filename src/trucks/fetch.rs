use std::time::Duration;

use log::{debug, info};

use super::{DayOrder, TruckRecord};
use crate::error::FetchError;

/// HTTP client for the food truck permit listing endpoint
#[derive(Debug, Clone)]
pub struct TruckClient {
  endpoint: String,
  client: reqwest::Client,
  timeout: Option<Duration>
}

impl TruckClient {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self {
      endpoint: endpoint.into(),
      client: reqwest::Client::new(),
      timeout: None
    }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }

  /// One GET for the trucks scheduled on `day`. No retries: any transport error,
  /// non-success status or undecodable body is handed back to the caller.
  pub async fn fetch(&self, day: DayOrder) -> Result<Vec<TruckRecord>, FetchError> {
    info!("Requesting listings for day {} from {}", day, self.endpoint);

    let mut request = self
      .client
      .get(&self.endpoint)
      .header("Accept", "application/json")
      .query(&[("dayorder", day.number())]);

    if let Some(timeout) = self.timeout {
      request = request.timeout(timeout);
    }

    let response = request
      .send()
      .await
      .map_err(|source| FetchError::Transport { url: self.endpoint.clone(), source })?;

    if !response.status().is_success() {
      return Err(FetchError::Status(response.status()));
    }

    let records: Vec<TruckRecord> = response.json().await.map_err(FetchError::Decode)?;
    debug!("Received {} listings", records.len());

    Ok(records)
  }
}
