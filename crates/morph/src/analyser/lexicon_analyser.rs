//! Analyser backed by a prebuilt lexicon file

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::Analyser;
use crate::errors::{AnalysisError, LexiconError};
use crate::models::Entry;

/// Read-only map from lowercase word forms to their readings.
///
/// The file format is a JSON object whose keys are forms and whose values are
/// entry lists in the order they should be reported:
///
/// ```json
/// {
///   "books": [{"lemma": "book", "tagSet": {"pos": "NOUN", "tags": ["PLURAL"]}}],
///   "the":   [{"lemma": "the",  "tagSet": {"pos": "DET",  "tags": []}}]
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexiconAnalyser {
  entries: HashMap<String, Vec<Entry>>,
}

impl LexiconAnalyser {
  /// Loads a lexicon file
  ///
  /// # Errors
  /// - `LexiconError::Read`: the file cannot be read
  /// - `LexiconError::Parse`: the file is not a form → entries object
  /// - `LexiconError::NonLowercaseForm`: a key differs from its lowercase form
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| LexiconError::Read {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    let entries: HashMap<String, Vec<Entry>> =
      serde_json::from_str(&raw).map_err(|e| LexiconError::Parse {
        path: path.to_path_buf(),
        source: Arc::new(e),
      })?;

    // Lookups are always lowercased
    if let Some(form) = entries.keys().filter(|form| form.to_lowercase() != **form).min() {
      return Err(LexiconError::NonLowercaseForm {
        path: path.to_path_buf(),
        form: form.clone(),
      });
    }

    info!(path = %path.display(), forms = entries.len(), "Loaded lexicon");
    Ok(Self { entries })
  }

  /// Builds a lexicon in memory
  pub fn from_entries<I, S>(entries: I) -> Self
  where
    I: IntoIterator<Item = (S, Vec<Entry>)>,
    S: Into<String>,
  {
    Self {
      entries: entries.into_iter().map(|(form, list)| (form.into(), list)).collect(),
    }
  }

  /// Number of forms in the lexicon
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the lexicon has no forms
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Analyser for LexiconAnalyser {
  fn analyse(&self, form: &str) -> Result<Vec<Entry>, AnalysisError> {
    self.entries.get(form).cloned().ok_or_else(|| AnalysisError::UnknownForm {
      form: form.to_string(),
    })
  }
}
