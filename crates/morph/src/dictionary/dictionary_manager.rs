//! Dictionary Management Module
//!
//! Loads vibrato-rkyv dictionaries for the Japanese tokenizer and analyser.
//! Preset dictionaries are downloaded into the cache directory on first use
//! and read from there afterwards. A local `system.dic` can be loaded directly.

use crate::errors::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Where the dictionary comes from
#[derive(Debug, Clone)]
enum DictionarySource {
  /// Preset downloaded into `<cache_dir>/<preset name>`
  Preset(PresetDictionaryKind),
  /// Dictionary file on disk
  Local(PathBuf),
}

/// Loads a vibrato-rkyv dictionary once and hands out shared references
pub struct DictionaryManager {
  cache_dir: PathBuf,
  source: DictionarySource,
  /// Result of the first load; errors are cached too
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Preset dictionary cached under the OS default cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    Ok(Self::with_preset_in(preset_kind, default_cache_dir()?))
  }

  /// Preset dictionary cached under `cache_dir`
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      source: DictionarySource::Preset(preset_kind),
      dictionary: OnceLock::new(),
    }
  }

  /// Local dictionary file
  ///
  /// # Errors
  /// `DictionaryNotFound` if `path` is not a file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();
    if !path.is_file() {
      return Err(DictionaryError::DictionaryNotFound(path.display().to_string()));
    }

    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    Ok(Self {
      cache_dir,
      source: DictionarySource::Local(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Cache directory (parent directory for local dictionaries)
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Whether a preset dictionary has already been downloaded
  pub fn is_cached(&self) -> bool {
    match &self.source {
      DictionarySource::Preset(kind) => self.cache_dir.join(kind.name()).exists(),
      DictionarySource::Local(path) => path.is_file(),
    }
  }

  /// Loads the dictionary.
  ///
  /// The first call reads (or downloads) the dictionary; later calls return a
  /// clone of the same `Arc`, or the same error.
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match &self.source {
      DictionarySource::Local(path) => {
        info!(path = %path.display(), "Loading local dictionary");
        Dictionary::from_path(path, LoadMode::TrustCache)
          .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
      }
      DictionarySource::Preset(kind) => {
        std::fs::create_dir_all(&self.cache_dir)
          .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;
        let dict_dir = self.cache_dir.join(kind.name());
        info!(preset = kind.name(), dir = %dict_dir.display(), "Loading preset dictionary");
        Dictionary::from_preset_with_download(*kind, &dict_dir)
          .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
      }
    }
  }
}

/// Default cache directory
///
/// | OS      | Example Path                               |
/// |---------|--------------------------------------------|
/// | Linux   | `~/.cache/morph/dict`                      |
/// | macOS   | `~/Library/Caches/morph/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\morph\dict` |
pub fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;
  Ok(base.join("morph").join("dict"))
}

/// `vibrato_rkyv::Dictionary` has no `Debug`, so only the load state is shown
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
