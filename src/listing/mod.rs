mod name_order;
mod open_now;
mod pages;

pub use name_order::*;
pub use open_now::*;
pub use pages::*;

use crate::trucks::{ClockTime, TruckRecord};

/// Page size used when none is configured
pub const PAGE_SIZE: usize = 10;

/// filter => sort => paginate
pub fn build_pages(records: Vec<TruckRecord>, now: ClockTime, page_size: usize) -> PageSet {
  paginate(sort_by_name(open_at(records, now)), page_size)
}
