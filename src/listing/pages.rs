use crate::trucks::TruckRecord;

/// Sorted, filtered trucks split into pages. Every page but the last is full,
/// the last holds the remainder, and there are no empty pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSet {
  pages: Vec<Vec<TruckRecord>>
}

impl PageSet {
  pub fn len(&self) -> usize { self.pages.len() }

  pub fn is_empty(&self) -> bool { self.pages.is_empty() }

  pub fn page(&self, index: usize) -> Option<&[TruckRecord]> {
    self.pages.get(index).map(Vec::as_slice)
  }

  pub fn iter(&self) -> impl Iterator<Item = &[TruckRecord]> + '_ {
    self.pages.iter().map(Vec::as_slice)
  }
}

/// Splits `records` into consecutive groups of `page_size` (at least one per page).
pub fn paginate(records: Vec<TruckRecord>, page_size: usize) -> PageSet {
  let page_size = page_size.max(1);

  let mut pages = Vec::with_capacity(records.len().div_ceil(page_size));
  let mut records = records.into_iter().peekable();
  while records.peek().is_some() {
    pages.push(records.by_ref().take(page_size).collect());
  }

  PageSet { pages }
}
