use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Weekday};

/// Day-of-week number understood by the listing endpoint: 0 is Sunday, 6 is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOrder(u8);

impl DayOrder {
  pub fn new(day: u8) -> Option<Self> {
    (day <= 6).then_some(DayOrder(day))
  }

  pub fn number(&self) -> u8 { self.0 }

  /// Today's weekday in local time.
  pub fn today() -> Self {
    chrono::Local::now().weekday().into()
  }
}

impl From<Weekday> for DayOrder {
  fn from(day: Weekday) -> DayOrder {
    DayOrder(day.num_days_from_sunday() as u8)
  }
}

impl FromStr for DayOrder {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<u8>()
      .ok()
      .and_then(DayOrder::new)
      .ok_or_else(|| format!("{:?} is not a day number between 0 (Sunday) and 6 (Saturday)", s))
  }
}

impl Display for DayOrder {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
