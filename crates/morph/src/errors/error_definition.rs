//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Engine configuration errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// The lexicon engine was selected without a lexicon file
  #[error("the lexicon engine requires a lexicon path")]
  MissingLexiconPath,

  /// dictionary cache_dir exists but is not a directory
  #[error("dictionary cache_dir is not a directory: path={path:?}")]
  InvalidDictionaryCacheDir {
    /// Offending path
    path: PathBuf,
  },
}

/// Dictionary errors (vibrato-rkyv presets and local dictionary files)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum DictionaryError {
  /// No OS cache directory is available
  #[error("dictionary cache directory not found")]
  CacheDirNotFound,

  /// Creating the cache directory failed
  #[error("failed to create dictionary cache directory: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// The requested dictionary file does not exist
  #[error("dictionary not found: {0}")]
  DictionaryNotFound(String),

  /// vibrato-rkyv failed to load the dictionary
  #[error("vibrato-rkyv dictionary load error: {0}")]
  VibratoLoad(Arc<dyn std::error::Error + Send + Sync + 'static>),

  /// vibrato-rkyv failed to download a preset dictionary
  #[error("vibrato-rkyv preset dictionary download failed: {0}")]
  PresetDictDownloadFailed(Arc<dyn std::error::Error + Send + Sync + 'static>),
}

/// Lexicon file errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// The lexicon file could not be read
  #[error("failed to read lexicon: {path}: {source}")]
  Read {
    /// Lexicon path
    path: PathBuf,
    /// Underlying I/O error
    #[source]
    source: Arc<io::Error>,
  },

  /// The lexicon file is not a valid form → entries JSON object
  #[error("failed to parse lexicon: {path}: {source}")]
  Parse {
    /// Lexicon path
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// A lexicon key is not lowercase, so it could never be looked up
  #[error("lexicon form is not lowercase: {path}: {form:?}")]
  NonLowercaseForm {
    /// Lexicon path
    path: PathBuf,
    /// Offending key
    form: String,
  },
}

/// Failure to analyse a single word form.
///
/// Never aborts a request: the orchestrator stores it on the item of the
/// token it belongs to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
  /// The form is not in the dictionary
  #[error("unknown word form: {form}")]
  UnknownForm {
    /// Lowercased form that was looked up
    form: String,
  },

  /// Nothing to analyse
  #[error("empty word form")]
  EmptyForm,

  /// The engine split the form into several morphemes
  #[error("word form {form} is not a single morpheme ({morphemes} morphemes)")]
  NotSingleMorpheme {
    /// Lowercased form that was looked up
    form: String,
    /// Number of morphemes the engine produced
    morphemes: usize,
  },
}

/// Unified error
/// Public APIs of this crate return this error through `MorphResult<T>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MorphError {
  /// Dictionary errors
  #[error(transparent)]
  Dictionary(#[from] DictionaryError),

  /// Lexicon errors
  #[error(transparent)]
  Lexicon(#[from] LexiconError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result alias of the morph crate
pub type MorphResult<T> = Result<T, MorphError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn analysis_error_messages_name_the_form() {
    let err = AnalysisError::UnknownForm {
      form: "qwzx".to_string(),
    };
    assert_eq!(err.to_string(), "unknown word form: qwzx");

    let err = AnalysisError::NotSingleMorpheme {
      form: "東京タワー".to_string(),
      morphemes: 2,
    };
    assert!(err.to_string().contains("東京タワー"));
    assert!(err.to_string().contains('2'));
  }

  #[test]
  fn morph_error_is_transparent() {
    let err: MorphError = ConfigError::MissingLexiconPath.into();
    assert_eq!(err.to_string(), ConfigError::MissingLexiconPath.to_string());
  }
}
