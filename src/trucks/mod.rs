mod clock_time;
mod day_order;
mod fetch;
mod truck_record;

pub use clock_time::*;
pub use day_order::*;
pub use fetch::*;
pub use truck_record::*;
