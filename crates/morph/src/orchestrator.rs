// crates/morph/src/orchestrator.rs

//! Orchestrator: turns raw text into one analysis item per token.
//!
//! - tokenizer adapter (WordTokenizer)
//! - analysis adapter (Analyser)
//!
//! Transport bindings only need this struct; they never see the adapters.
//!
//! # Failure isolation
//!
//! A token whose analysis fails becomes an item carrying the failure. The
//! remaining tokens are analysed normally and the reply is always complete.

use std::sync::Arc;

use tracing::{debug, info};

use crate::analyser::{Analyser, LexiconAnalyser, VibratoAnalyser};
use crate::config::EngineConfig;
use crate::dictionary::DictionaryManager;
use crate::errors::{ConfigError, MorphResult};
use crate::models::{AnalysisReply, Item};
use crate::tokenizer::{SimpleWordTokenizer, VibratoWordTokenizer, WordTokenizer};

/// Drives tokenization and per-token analysis for one request at a time.
///
/// Holds only immutable, shared adapters, so one instance serves all
/// concurrent requests without locking.
#[derive(Clone)]
pub struct Orchestrator {
  tokenizer: Arc<dyn WordTokenizer>,
  analyser: Arc<dyn Analyser>,
}

impl Orchestrator {
  /// Wires an orchestrator from already constructed adapters
  pub fn new(tokenizer: Arc<dyn WordTokenizer>, analyser: Arc<dyn Analyser>) -> Self {
    Self { tokenizer, analyser }
  }

  /// Builds the adapters selected by `config`.
  ///
  /// # Flow
  /// 1. Validate the configuration
  /// 2. vibrato: load (or download) the dictionary once and share it between
  ///    tokenizer and analyser
  /// 3. lexicon: load the lexicon file, tokenize with tantivy
  ///
  /// # Errors
  /// - invalid configuration
  /// - dictionary load failure
  /// - lexicon read/parse failure
  pub fn from_config(config: &EngineConfig) -> MorphResult<Self> {
    config.validate()?;

    let orchestrator = match config {
      EngineConfig::Vibrato { preset, cache_dir } => {
        let manager = match cache_dir {
          Some(dir) => DictionaryManager::with_preset_in((*preset).into(), dir),
          None => DictionaryManager::with_preset((*preset).into())?,
        };
        let dict = manager.load()?;
        Self::new(
          Arc::new(VibratoWordTokenizer::from_shared_dictionary(Arc::clone(&dict))),
          Arc::new(VibratoAnalyser::from_shared_dictionary(dict)),
        )
      }
      EngineConfig::Lexicon { path } => {
        let path = path.as_ref().ok_or(ConfigError::MissingLexiconPath)?;
        Self::new(
          Arc::new(SimpleWordTokenizer::new()),
          Arc::new(LexiconAnalyser::from_path(path)?),
        )
      }
    };

    info!(engine = config.name(), "Orchestrator initialized");
    Ok(orchestrator)
  }

  /// Analyses `input`.
  ///
  /// Returns one item per non-EOF token, in token order. Forms are
  /// lowercased before lookup; items keep the original form.
  pub fn process(&self, input: &str) -> AnalysisReply {
    let tokens = self.tokenizer.tokenize(input);
    let token_count = tokens.len();

    let items: Vec<Item> = tokens
      .into_iter()
      .filter(|token| !token.is_eof())
      .map(|token| match self.analyser.analyse(&token.form.to_lowercase()) {
        Ok(entries) => Item::analysed(token.form, entries),
        Err(error) => {
          debug!(form = %token.form, error = %error, "Analysis failed");
          Item::failed(token.form, error)
        }
      })
      .collect();

    let reply = AnalysisReply { items };
    debug!(
      input_len = input.len(),
      token_count,
      item_count = reply.items.len(),
      failed_count = reply.failed_count(),
      "Processed input"
    );
    reply
  }
}
