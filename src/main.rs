use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use food_trucks::{
  config::DEFAULT_ENDPOINT,
  listing::PAGE_SIZE,
  load_pages,
  ui::{Outcome, Presenter, Prompt},
  ClockTime, DayOrder, Settings, TruckClient
};

#[derive(Parser, Debug)]
#[command(name = "food-trucks", version, about = "Page through the San Francisco food trucks open right now")]
struct Cli {
  #[arg(long, default_value = DEFAULT_ENDPOINT, help = "Listing endpoint to query")]
  endpoint: String,

  #[arg(long, default_value_t = PAGE_SIZE as u16, value_parser = clap::value_parser!(u16).range(1..), help = "Trucks shown per page")]
  page_size: u16,

  #[arg(long, help = "Day of week to request, 0 (Sunday) to 6 (Saturday) [default: today]")]
  day: Option<DayOrder>,

  #[arg(long, value_name = "HH:MM", help = "Time of day trucks must be open at [default: now]")]
  at: Option<ClockTime>,

  #[arg(long, value_name = "SECS", help = "Give up on the listing request after this many seconds")]
  timeout: Option<u64>,

  #[arg(long, short, default_value = "warn", help = "off, error, warn, info, debug or trace")]
  log_level: LevelFilter
}

impl Cli {
  fn settings(&self) -> Settings {
    Settings {
      endpoint: self.endpoint.clone(),
      page_size: usize::from(self.page_size),
      day: self.day.unwrap_or_else(DayOrder::today),
      at: self.at.unwrap_or_else(ClockTime::now),
      timeout: self.timeout.map(Duration::from_secs)
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // logs go to stderr, stdout is the listing
  env_logger::Builder::new()
    .filter_level(cli.log_level)
    .parse_default_env()
    .target(env_logger::Target::Stderr)
    .init();

  let settings = cli.settings();

  let mut client = TruckClient::new(settings.endpoint.clone());
  if let Some(timeout) = settings.timeout {
    client = client.with_timeout(timeout);
  }

  let pages = load_pages(&client, &settings)
    .await
    .context("Failed to retrieve the food truck listings")?;

  info!("{} page(s) of trucks open at {}", pages.len(), settings.at);

  // the prompt blocks, so it gets its own thread and Ctrl-C can win the race
  let prompt = Prompt::for_page_size(settings.page_size);
  let paging = tokio::task::spawn_blocking(move || {
    Presenter::new(io::stdin().lock(), io::stdout().lock(), prompt).run(&pages)
  });

  let outcome = tokio::select! {
    finished = paging => finished
      .context("Paging thread stopped unexpectedly")?
      .context("Failed to write the listings")?,
    Ok(()) = tokio::signal::ctrl_c() => {
      info!("Interrupted at the prompt");
      Outcome::Cancelled
    }
  };

  // cancelling the prompt ends the process on the spot
  if outcome == Outcome::Cancelled {
    std::process::exit(0);
  }

  Ok(())
}
