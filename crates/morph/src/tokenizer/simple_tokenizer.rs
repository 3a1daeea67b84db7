//! Word tokenizer for space-separated scripts, backed by tantivy

use tantivy::tokenizer::{SimpleTokenizer, TextAnalyzer};
use tracing::debug;

use super::WordTokenizer;
use crate::models::Token;

/// Wraps a tantivy [`TextAnalyzer`].
///
/// The default analyzer is tantivy's `SimpleTokenizer`, which splits on every
/// non-alphanumeric character, so all produced tokens are words. Do not add
/// a `LowerCaser` filter: items must keep the original surface form.
#[derive(Clone)]
pub struct SimpleWordTokenizer {
  analyzer: TextAnalyzer,
}

impl SimpleWordTokenizer {
  /// Tokenizer backed by tantivy's `SimpleTokenizer`
  pub fn new() -> Self {
    Self::from_analyzer(TextAnalyzer::from(SimpleTokenizer::default()))
  }

  /// Tokenizer backed by an arbitrary tantivy analyzer
  pub fn from_analyzer(analyzer: TextAnalyzer) -> Self {
    Self { analyzer }
  }
}

impl Default for SimpleWordTokenizer {
  fn default() -> Self {
    Self::new()
  }
}

impl WordTokenizer for SimpleWordTokenizer {
  fn tokenize(&self, input: &str) -> Vec<Token> {
    // token_stream needs &mut self; a clone keeps the adapter shareable
    let mut analyzer = self.analyzer.clone();
    let mut stream = analyzer.token_stream(input);

    let mut tokens = Vec::new();
    while stream.advance() {
      let token = stream.token();
      tokens.push(Token::word(token.text.clone(), token.offset_from..token.offset_to));
    }
    tokens.push(Token::eof(input.len()));

    debug!(input_len = input.len(), token_count = tokens.len() - 1, "Tokenized input");
    tokens
  }
}
