use std::cmp::Ordering;

use crate::trucks::TruckRecord;

/// Orders records by name, ignoring case and comparing the way a reader would
/// (see [`compare_names`]). Equal names keep their incoming order.
pub fn sort_by_name(mut records: Vec<TruckRecord>) -> Vec<TruckRecord> {
  records.sort_by(|a, b| compare_names(&a.name, &b.name));
  records
}

/// Case-insensitive, reading-order comparison.
///
/// Characters are weighed by kind first: whitespace, then punctuation and
/// symbols, then digits, then letters. Accented latin letters sit with their
/// base letter, so `"éclair"` sorts before `"zeta"`; the accent only breaks a
/// tie between names that are otherwise the same.
pub fn compare_names(a: &str, b: &str) -> Ordering {
  let (a, b) = (a.to_lowercase(), b.to_lowercase());

  primary(&a)
    .cmp(primary(&b))
    .then_with(|| a.chars().map(accent).cmp(b.chars().map(accent)))
}

fn primary(name: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
  name.chars().map(|c| (CharClass::of(c), fold(c)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
  Space,
  Punctuation,
  Digit,
  Letter
}

impl CharClass {
  fn of(c: char) -> CharClass {
    if c.is_whitespace() { CharClass::Space }
    else if c.is_numeric() { CharClass::Digit }
    else if c.is_alphabetic() { CharClass::Letter }
    else { CharClass::Punctuation }
  }
}

// lowercase latin-1 letters with a diacritic, and their base letter
const FOLDS: &[(char, char)] = &[
  ('à', 'a'), ('á', 'a'), ('â', 'a'), ('ã', 'a'), ('ä', 'a'), ('å', 'a'),
  ('ç', 'c'),
  ('è', 'e'), ('é', 'e'), ('ê', 'e'), ('ë', 'e'),
  ('ì', 'i'), ('í', 'i'), ('î', 'i'), ('ï', 'i'),
  ('ñ', 'n'),
  ('ò', 'o'), ('ó', 'o'), ('ô', 'o'), ('õ', 'o'), ('ö', 'o'), ('ø', 'o'),
  ('ù', 'u'), ('ú', 'u'), ('û', 'u'), ('ü', 'u'),
  ('ý', 'y'), ('ÿ', 'y')
];

fn fold(c: char) -> char {
  FOLDS.iter().find(|(accented, _)| *accented == c).map_or(c, |(_, base)| *base)
}

// 0 for an unaccented character, otherwise its position in the fold table
fn accent(c: char) -> usize {
  FOLDS.iter().position(|(accented, _)| *accented == c).map_or(0, |i| i + 1)
}
