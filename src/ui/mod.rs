use std::io::{self, Read, Write};

use log::debug;

use crate::listing::PageSet;
use crate::trucks::TruckRecord;

pub use self::user_input::{Prompt, Reply};
mod user_input;

pub const HEADER: &str = "Name \t\t Address";
pub const END_OF_LISTINGS: &str = "That is the end of the food trucks available right now";

/// How a paging session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// every page was shown
  Exhausted,

  /// the user cancelled the prompt, later pages were never shown
  Cancelled
}

/// Shows a [`PageSet`] one page at a time, waiting for a line of input between pages.
pub struct Presenter<R, W> {
  input: R,
  output: W,
  prompt: Prompt
}

impl<R: Read, W: Write> Presenter<R, W> {
  pub fn new(input: R, output: W, prompt: Prompt) -> Self {
    Presenter { input, output, prompt }
  }

  fn print_page(&mut self, page: &[TruckRecord]) -> io::Result<()> {
    for truck in page {
      writeln!(self.output, "{}\t\t{}", truck.name, truck.address)?;
    }
    Ok(())
  }

  /// Runs the paging loop. Page index starts at 0 and only ever moves forward by one.
  /// Errors are returned only when writing to the output fails.
  pub fn run(&mut self, pages: &PageSet) -> io::Result<Outcome> {
    writeln!(self.output, "{}", HEADER)?;

    let mut page_index = 0;
    while let Some(page) = pages.page(page_index) {
      debug!("Showing page {} of {}", page_index + 1, pages.len());
      self.print_page(page)?;

      match self.prompt.ask(&mut self.input, &mut self.output)? {
        Reply::Line(_) => (),
        Reply::Cancelled => return Ok(Outcome::Cancelled),
        // a broken read still moves on to the next page
        Reply::Failed(e) => writeln!(self.output, "{}", e)?
      }

      page_index += 1;
    }

    writeln!(self.output, "{}", END_OF_LISTINGS)?;
    self.output.flush()?;
    Ok(Outcome::Exhausted)
  }
}
