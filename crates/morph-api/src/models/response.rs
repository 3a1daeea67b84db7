//! Response Model Definition

use serde::Serialize;

use morph::{AnalysisReply, Entry, Item};

/// Morphological Analysis Response
///
/// `{"items": [...]}`; `items` is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyseResponse {
  /// One item per token, in token order
  pub items: Vec<ItemDto>,
}

/// Analysis result of one token (DTO)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDto {
  /// Token as it appeared in the input
  pub form: String,
  /// Candidate readings, omitted when there are none
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub entries: Vec<Entry>,
  /// Failure message, omitted on success
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl From<&Item> for ItemDto {
  fn from(item: &Item) -> Self {
    Self {
      form: item.form().to_string(),
      entries: item.entries().to_vec(),
      error: item.error().map(ToString::to_string),
    }
  }
}

impl From<&AnalysisReply> for AnalyseResponse {
  fn from(reply: &AnalysisReply) -> Self {
    Self {
      items: reply.items.iter().map(ItemDto::from).collect(),
    }
  }
}
