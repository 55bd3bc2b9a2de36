use serde::Deserialize;
use serde_json::{Map, Value};

use super::ClockTime;
use crate::error::ClockTimeError;

/// One permit listing as served by the open-data endpoint.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TruckRecord {
  #[serde(rename="applicant")]
  pub name: String,

  #[serde(rename="location")]
  pub address: String,

  #[serde(rename="start24")]
  pub open_time: String,

  #[serde(rename="end24")]
  pub close_time: String,

  /// everything else the endpoint returns, carried along untouched
  #[serde(flatten)]
  pub extra: Map<String, Value>
}

impl TruckRecord {
  /// The declared daily window, parsed. Only hours and minutes count.
  pub fn window(&self) -> Result<(ClockTime, ClockTime), ClockTimeError> {
    Ok((self.open_time.parse()?, self.close_time.parse()?))
  }

  /// `open <= now < close`, both ends pinned to the same day.
  /// A window that crosses midnight (close <= open) never contains `now`.
  pub fn is_open_at(&self, now: ClockTime) -> Result<bool, ClockTimeError> {
    let (open, close) = self.window()?;
    Ok(open <= now && now < close)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  fn truck(open: &str, close: &str) -> TruckRecord {
    TruckRecord {
      name: "Tacos".into(),
      address: "1 Market St".into(),
      open_time: open.into(),
      close_time: close.into(),
      extra: Map::new()
    }
  }

  fn at(s: &str) -> ClockTime { s.parse().unwrap() }

  #[test]
  fn decodes_wire_names_and_keeps_extra_fields() {
    let json = r#"{
      "applicant": "Zeta Eats",
      "location": "100 Main St",
      "start24": "08:00",
      "end24": "20:00",
      "dayorder": "3",
      "permit": "17MFF-0110"
    }"#;

    let record: TruckRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name, "Zeta Eats");
    assert_eq!(record.address, "100 Main St");
    assert_eq!(record.open_time, "08:00");
    assert_eq!(record.close_time, "20:00");
    assert_eq!(record.extra.get("permit"), Some(&Value::from("17MFF-0110")));
    assert_eq!(record.extra.len(), 2);
  }

  #[test]
  fn window_is_half_open() {
    let t = truck("09:00", "17:00");
    assert_eq!(t.is_open_at(at("08:59")), Ok(false));
    assert_eq!(t.is_open_at(at("09:00")), Ok(true));
    assert_eq!(t.is_open_at(at("16:59")), Ok(true));
    assert_eq!(t.is_open_at(at("17:00")), Ok(false));
  }

  #[test]
  fn midnight_crossing_window_is_never_open() {
    let t = truck("22:00", "02:00");
    for now in ["23:00", "01:00", "22:00", "12:00"] {
      assert_eq!(t.is_open_at(at(now)), Ok(false), "now = {}", now);
    }
  }

  #[test]
  fn zero_length_window_is_never_open() {
    let t = truck("12:00", "12:00");
    assert_eq!(t.is_open_at(at("12:00")), Ok(false));
    assert_eq!(t.is_open_at(at("11:59")), Ok(false));
    assert_eq!(t.is_open_at(at("12:01")), Ok(false));
  }

  #[test]
  fn closing_at_midnight_covers_the_last_minute() {
    let t = truck("18:00", "24:00");
    assert_eq!(t.is_open_at(at("23:59")), Ok(true));
  }

  #[test]
  fn malformed_window_is_an_error() {
    assert!(truck("9am", "17:00").is_open_at(at("10:00")).is_err());
  }
}
