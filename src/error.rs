use thiserror::Error;

/// Failure to retrieve the truck listings. Never retried.
#[derive(Error, Debug)]
pub enum FetchError {
  #[error("request to {url} failed: {source}")]
  Transport {
    url: String,
    #[source]
    source: reqwest::Error
  },

  #[error("listing endpoint answered with status {0}")]
  Status(reqwest::StatusCode),

  #[error("could not decode the listing response: {0}")]
  Decode(#[source] reqwest::Error)
}

/// A malformed `HH:MM` value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockTimeError {
  #[error("expected HH:MM, got {0:?}")]
  Format(String),

  #[error("{0:?} is not a time of day")]
  OutOfRange(String)
}
