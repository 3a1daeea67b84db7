//! Data Model Definition
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Kind of a token produced by a tokenizer adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
  /// Word-like unit (letters, digits, a content morpheme)
  Word,
  /// Punctuation or other symbol
  Symbol,
  /// End-of-stream marker; never analysed
  Eof,
}

/// One unit of the tokenized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  /// Surface form as it appears in the input
  pub form: String,
  /// Token kind
  pub kind: TokenKind,
  /// Byte range in the input (empty at the end of input for `Eof`)
  pub span: Range<usize>,
}

impl Token {
  /// Word token covering `span`
  pub fn word(form: impl Into<String>, span: Range<usize>) -> Self {
    Self {
      form: form.into(),
      kind: TokenKind::Word,
      span,
    }
  }

  /// Symbol token covering `span`
  pub fn symbol(form: impl Into<String>, span: Range<usize>) -> Self {
    Self {
      form: form.into(),
      kind: TokenKind::Symbol,
      span,
    }
  }

  /// End-of-stream marker placed at byte offset `at`
  pub fn eof(at: usize) -> Self {
    Self {
      form: String::new(),
      kind: TokenKind::Eof,
      span: at..at,
    }
  }

  /// Whether this is the end-of-stream marker
  pub fn is_eof(&self) -> bool {
    self.kind == TokenKind::Eof
  }
}

/// Part of speech plus grammatical feature tags of one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet {
  /// Part of speech (e.g. `NOUN`, `名詞`)
  pub pos: String,
  /// Feature tags in engine order (e.g. `["PLURAL"]`)
  #[serde(default)]
  pub tags: Vec<String>,
}

impl TagSet {
  /// Constructor for TagSet
  pub fn new<I, S>(pos: impl Into<String>, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      pos: pos.into(),
      tags: tags.into_iter().map(Into::into).collect(),
    }
  }
}

/// One candidate morphological reading of a word form.
///
/// Serialized as `{"lemma": "...", "tagSet": {"pos": "...", "tags": [...]}}`,
/// which is also the entry format of lexicon files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
  /// Dictionary form
  pub lemma: String,
  /// Grammatical category and tags
  #[serde(rename = "tagSet")]
  pub tag_set: TagSet,
}

impl Entry {
  /// Constructor for Entry
  pub fn new(lemma: impl Into<String>, tag_set: TagSet) -> Self {
    Self {
      lemma: lemma.into(),
      tag_set,
    }
  }
}

/// Analysis result of one non-EOF token.
///
/// Holds either the entries the analyser returned (possibly none) or the
/// reason the analysis failed, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
  form: String,
  result: Result<Vec<Entry>, AnalysisError>,
}

impl Item {
  /// Item for a successfully analysed form
  pub fn analysed(form: impl Into<String>, entries: Vec<Entry>) -> Self {
    Self {
      form: form.into(),
      result: Ok(entries),
    }
  }

  /// Item for a form whose analysis failed
  pub fn failed(form: impl Into<String>, error: AnalysisError) -> Self {
    Self {
      form: form.into(),
      result: Err(error),
    }
  }

  /// Original (not lowercased) surface form
  pub fn form(&self) -> &str {
    &self.form
  }

  /// Entries in engine order; empty when the analysis failed
  pub fn entries(&self) -> &[Entry] {
    match &self.result {
      Ok(entries) => entries,
      Err(_) => &[],
    }
  }

  /// Failure reason, if the analysis failed
  pub fn error(&self) -> Option<&AnalysisError> {
    self.result.as_ref().err()
  }
}

/// Reply to one analysis request: one item per non-EOF token, in token order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisReply {
  /// Items in input order
  pub items: Vec<Item>,
}

impl AnalysisReply {
  /// Number of items whose analysis failed
  pub fn failed_count(&self) -> usize {
    self.items.iter().filter(|item| item.error().is_some()).count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn book_entry() -> Entry {
    Entry::new("book", TagSet::new("NOUN", ["PLURAL"]))
  }

  #[test]
  fn analysed_item_has_no_error() {
    let item = Item::analysed("Books", vec![book_entry()]);
    assert_eq!(item.form(), "Books");
    assert_eq!(item.entries(), &[book_entry()]);
    assert!(item.error().is_none());
  }

  #[test]
  fn analysed_item_may_have_no_entries() {
    let item = Item::analysed("xyz", Vec::new());
    assert!(item.entries().is_empty());
    assert!(item.error().is_none());
  }

  #[test]
  fn failed_item_has_no_entries() {
    let item = Item::failed(
      "qwzx",
      AnalysisError::UnknownForm {
        form: "qwzx".to_string(),
      },
    );
    assert!(item.entries().is_empty());
    assert!(item.error().is_some());
  }

  #[test]
  fn entry_serializes_with_tag_set_key() {
    let json = serde_json::to_value(book_entry()).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"lemma": "book", "tagSet": {"pos": "NOUN", "tags": ["PLURAL"]}})
    );
  }

  #[test]
  fn entry_deserializes_without_tags() {
    let entry: Entry =
      serde_json::from_str(r#"{"lemma": "the", "tagSet": {"pos": "DET"}}"#).unwrap();
    assert!(entry.tag_set.tags.is_empty());
  }

  #[test]
  fn eof_token_has_empty_span() {
    let token = Token::eof(5);
    assert!(token.is_eof());
    assert_eq!(token.span, 5..5);
    assert!(!Token::word("a", 0..1).is_eof());
  }

  #[test]
  fn failed_count_counts_errors_only() {
    let reply = AnalysisReply {
      items: vec![
        Item::analysed("a", Vec::new()),
        Item::failed("b", AnalysisError::EmptyForm),
      ],
    };
    assert_eq!(reply.failed_count(), 1);
  }
}
