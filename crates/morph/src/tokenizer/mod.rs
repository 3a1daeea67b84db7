//! tokenizer module
//!
//! Adapters turning an external tokenizer's output into [`Token`]s. Every
//! adapter passes through all tokens the wrapped tokenizer produces and ends
//! the sequence with one [`TokenKind::Eof`](crate::models::TokenKind::Eof)
//! marker; dropping that marker is the orchestrator's job.

pub mod simple_tokenizer;
pub mod vibrato_tokenizer;

use crate::models::Token;

/// Splits raw text into an ordered token sequence.
///
/// Implementations must accept any input, including the empty string (which
/// yields only the EOF marker), and must be shareable across threads.
pub trait WordTokenizer: Send + Sync {
  /// Tokenizes `input`; the last token is always the EOF marker
  fn tokenize(&self, input: &str) -> Vec<Token>;
}

/// 再エクスポート
pub use simple_tokenizer::SimpleWordTokenizer;
pub use vibrato_tokenizer::{VibratoWordTokenizer, is_symbol_feature};
