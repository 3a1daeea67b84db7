//! analyser module
//!
//! Adapters over external morphological analysis engines.

pub mod feature;
pub mod lexicon_analyser;
pub mod vibrato_analyser;

use crate::errors::AnalysisError;
use crate::models::Entry;

/// Looks up the readings of a single word form.
///
/// Callers pass the form already lowercased. Calls are independent and have
/// no side effects, so one analyser is shared by all requests.
pub trait Analyser: Send + Sync {
  /// Returns the entries for `form` in engine order.
  ///
  /// `Ok(vec![])` means the engine knows nothing about the form but did not
  /// fail; `Err` is reserved for failed lookups.
  ///
  /// # Errors
  /// Engine-specific [`AnalysisError`]
  fn analyse(&self, form: &str) -> Result<Vec<Entry>, AnalysisError>;
}

pub use feature::entry_from_feature;
pub use lexicon_analyser::LexiconAnalyser;
pub use vibrato_analyser::VibratoAnalyser;
