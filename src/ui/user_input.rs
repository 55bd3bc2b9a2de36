use std::io::{self, Read, Write};
use termion::input::TermRead;

/// What came back from one prompt
#[derive(Debug)]
pub enum Reply {
  /// a submitted line, content is not interpreted
  Line(String),

  /// Ctrl-C or Ctrl-D at the prompt, or input closed before anything was typed
  Cancelled,

  /// reading failed for any other reason
  Failed(io::Error)
}

/// A single-line prompt. The message is fixed for the whole session.
#[derive(Debug, Clone)]
pub struct Prompt {
  message: String
}

impl Prompt {
  pub fn new(message: impl Into<String>) -> Self {
    Prompt { message: message.into() }
  }

  pub fn for_page_size(page_size: usize) -> Self {
    Prompt::new(format!("Enter anything to go to next set of {} food trucks: ", page_size))
  }

  /// Shows the message and reads one line. Only failing to write the message is an `Err`,
  /// anything that goes wrong on the input side is reported through [`Reply`].
  pub fn ask<R: Read, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<Reply> {
    write!(output, "{}", self.message)?;
    output.flush()?;

    // termion hands back an empty line at end of input, so watch for it
    let mut input = EndAware { inner: input, ended: false };

    Ok(match input.read_line() {
      Ok(Some(line)) if line.is_empty() && input.ended => Reply::Cancelled,
      Ok(Some(line)) => Reply::Line(line),
      Ok(None) => Reply::Cancelled,
      Err(e) => Reply::Failed(e)
    })
  }
}

/// Remembers whether the wrapped reader ran out.
struct EndAware<'a, R> {
  inner: &'a mut R,
  ended: bool
}

impl<R: Read> Read for EndAware<'_, R> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if n == 0 && !buf.is_empty() {
      self.ended = true;
    }
    Ok(n)
  }
}
