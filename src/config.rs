use std::time::Duration;

use crate::listing::PAGE_SIZE;
use crate::trucks::{ClockTime, DayOrder};

/// San Francisco mobile food facility schedule
pub const DEFAULT_ENDPOINT: &str = "https://data.sfgov.org/resource/bbb8-hzi6.json";

/// Everything one run needs, resolved up front and passed down explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub endpoint: String,
  pub page_size: usize,

  /// which day's schedule to request
  pub day: DayOrder,

  /// the moment trucks must be open at
  pub at: ClockTime,

  /// no timeout unless asked for
  pub timeout: Option<Duration>
}

impl Default for Settings {
  fn default() -> Self {
    Settings {
      endpoint: DEFAULT_ENDPOINT.into(),
      page_size: PAGE_SIZE,
      day: DayOrder::today(),
      at: ClockTime::now(),
      timeout: None
    }
  }
}
