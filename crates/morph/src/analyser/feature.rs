//! MeCab/IPAdic feature string → [`Entry`]

use crate::models::{Entry, TagSet};

/// Positions in the comma separated feature string
const IDX_POS: usize = 0;
const IDX_FIRST_TAG: usize = 1;
const IDX_LAST_TAG: usize = 5;
const IDX_LEMMA: usize = 6;

/// Builds an entry from a feature string such as
/// `名詞,固有名詞,地域,一般,*,*,東京,トウキョウ,トーキョー`.
///
/// - pos: field 0
/// - tags: fields 1 to 5 (POS details, conjugation type and form), `*` and
///   empty fields skipped
/// - lemma: field 6, or `surface` when the dictionary has none (unknown words)
pub fn entry_from_feature(surface: &str, feature: &str) -> Entry {
  let parts: Vec<&str> = feature.split(',').collect();

  let pos = parts.get(IDX_POS).copied().unwrap_or_default();
  let tags = parts
    .iter()
    .take(IDX_LAST_TAG + 1)
    .skip(IDX_FIRST_TAG)
    .filter(|s| is_meaningful(s))
    .map(|s| (*s).to_string());
  let lemma = parts.get(IDX_LEMMA).copied().filter(|s| is_meaningful(s)).unwrap_or(surface);

  Entry::new(lemma, TagSet::new(pos, tags))
}

/// `*` marks an unset field
fn is_meaningful(field: &str) -> bool {
  !field.is_empty() && field != "*"
}
