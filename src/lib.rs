pub mod config;
pub mod error;
pub mod listing;
pub mod trucks;
pub mod ui;

pub use config::Settings;
pub use error::{ClockTimeError, FetchError};
pub use listing::{build_pages, PageSet};
pub use trucks::{ClockTime, DayOrder, TruckClient, TruckRecord};

/// Fetches the listings for `settings.day` and turns them into pages of trucks
/// open at `settings.at`. Nothing is filtered or paged if the fetch fails.
pub async fn load_pages(client: &TruckClient, settings: &Settings) -> Result<PageSet, FetchError> {
  let records = client.fetch(settings.day).await?;
  Ok(build_pages(records, settings.at, settings.page_size))
}
