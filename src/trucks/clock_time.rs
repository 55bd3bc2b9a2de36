use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::ClockTimeError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute precision, counted in minutes since midnight.
/// `24:00` is valid and means the very end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
  pub fn new(hour: u16, minute: u16) -> Option<Self> {
    let minutes = hour.checked_mul(60)?.checked_add(minute)?;
    if minute < 60 && minutes <= MINUTES_PER_DAY { Some(ClockTime(minutes)) } else { None }
  }

  pub fn hour(&self) -> u16 { self.0 / 60 }

  pub fn minute(&self) -> u16 { self.0 % 60 }

  /// The local wall-clock time right now.
  pub fn now() -> Self {
    chrono::Local::now().time().into()
  }
}

// seconds are dropped, the filter only looks at hours and minutes
impl From<NaiveTime> for ClockTime {
  fn from(time: NaiveTime) -> ClockTime {
    ClockTime((time.hour() * 60 + time.minute()) as u16)
  }
}

impl FromStr for ClockTime {
  type Err = ClockTimeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let (hour, minute) = s
      .trim()
      .split_once(':')
      .ok_or_else(|| ClockTimeError::Format(s.into()))?;

    let parse = |part: &str| {
      if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClockTimeError::Format(s.into()));
      }
      part.parse::<u16>().map_err(|_| ClockTimeError::Format(s.into()))
    };

    ClockTime::new(parse(hour)?, parse(minute)?).ok_or_else(|| ClockTimeError::OutOfRange(s.into()))
  }
}

impl Display for ClockTime {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:02}:{:02}", self.hour(), self.minute())
  }
}
