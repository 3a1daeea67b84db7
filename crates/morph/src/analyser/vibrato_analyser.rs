//! Analyser using the vibrato dictionary

use std::sync::Arc;

use tracing::debug;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::Tokenizer as VibratoImpl;

use super::Analyser;
use super::feature::entry_from_feature;
use crate::errors::AnalysisError;
use crate::models::Entry;

/// Reads lemma, part of speech and tags of a form from the vibrato
/// dictionary.
///
/// The form is segmented on its own; it must come back as exactly one
/// morpheme, whose feature string becomes the single entry.
#[derive(Clone)]
pub struct VibratoAnalyser {
  inner: VibratoImpl,
}

impl VibratoAnalyser {
  /// Constructs an analyser from a shared dictionary (`Arc<Dictionary>`)
  pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
    Self {
      inner: VibratoImpl::from_shared_dictionary(dict),
    }
  }
}

impl Analyser for VibratoAnalyser {
  fn analyse(&self, form: &str) -> Result<Vec<Entry>, AnalysisError> {
    if form.is_empty() {
      return Err(AnalysisError::EmptyForm);
    }

    let mut worker = self.inner.new_worker();
    worker.reset_sentence(form);
    worker.tokenize();

    let morphemes = worker.num_tokens();
    if morphemes != 1 {
      debug!(form = %form, morphemes, "Form is not a single morpheme");
      return Err(AnalysisError::NotSingleMorpheme {
        form: form.to_string(),
        morphemes,
      });
    }

    Ok(worker.token_iter().map(|token| entry_from_feature(token.surface(), token.feature())).collect())
  }
}
