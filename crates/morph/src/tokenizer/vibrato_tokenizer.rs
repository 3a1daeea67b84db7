//! Japanese word tokenizer using vibrato

use std::sync::Arc;
use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::WordTokenizer;
use crate::models::Token;

/// Japanese tokenizer using Vibrato-rkyv
///
/// - Stateless (only holds dictionary reference)
/// - `Clone + Send + Sync`
/// - A vibrato worker (lattice and scratch space) is created per call
#[derive(Clone)]
pub struct VibratoWordTokenizer {
  inner: VibratoImpl,
}

impl VibratoWordTokenizer {
  /// Constructs a tokenizer from a shared dictionary (`Arc<Dictionary>`).
  ///
  /// Use this with `DictionaryManager::load()` so that the tokenizer and the
  /// analyser share one dictionary.
  ///
  /// # Examples
  /// ```rust,no_run
  /// # use morph::dictionary::DictionaryManager;
  /// # use morph::tokenizer::VibratoWordTokenizer;
  /// # use vibrato_rkyv::dictionary::PresetDictionaryKind;
  /// let manager = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).unwrap();
  /// let dict = manager.load().unwrap();
  /// let tokenizer = VibratoWordTokenizer::from_shared_dictionary(dict);
  /// ```
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }
}

impl WordTokenizer for VibratoWordTokenizer {
  fn tokenize(&self, input: &str) -> Vec<Token> {
    if input.is_empty() {
      return vec![Token::eof(0)];
    }

    let mut worker = self.inner.new_worker();
    worker.reset_sentence(input);
    worker.tokenize();

    let mut tokens = Vec::with_capacity(worker.num_tokens() + 1);
    for token in worker.token_iter() {
      let surface = token.surface();
      let feature = token.feature();
      // Byte offsets, not character offsets: spans index the input string
      let span = token.range_byte();

      debug!(surface = %surface, ?feature, start = span.start, end = span.end, "Token");

      if is_symbol_feature(feature) {
        tokens.push(Token::symbol(surface, span));
      } else {
        tokens.push(Token::word(surface, span));
      }
    }
    tokens.push(Token::eof(input.len()));

    debug!(input_len = input.len(), token_count = worker.num_tokens(), "Morphological segmentation completed");
    tokens
  }
}

/// Whether a MeCab-style feature string describes a symbol.
///
/// IPAdic tags punctuation as `記号`, UniDic as `補助記号`.
pub fn is_symbol_feature(feature: &str) -> bool {
  feature.starts_with("記号") || feature.starts_with("補助記号")
}
