use log::{debug, warn};

use crate::trucks::{ClockTime, TruckRecord};

/// Keeps the records whose declared window contains `now`, in their original order.
/// Records with an unreadable window are dropped.
pub fn open_at(records: Vec<TruckRecord>, now: ClockTime) -> Vec<TruckRecord> {
  let total = records.len();

  let open: Vec<TruckRecord> = records
    .into_iter()
    .filter(|record| match record.is_open_at(now) {
      Ok(open) => open,
      Err(e) => {
        warn!("Skipping {:?}: {}", record.name, e);
        false
      }
    })
    .collect();

  debug!("{} of {} trucks open at {}", open.len(), total, now);
  open
}
