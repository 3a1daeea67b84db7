// crates/morph/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::errors::ConfigError;

/// Selects the tokenizer/analyser pair the orchestrator is built from.
///
/// Deserializable so that it can be embedded in a larger configuration file:
///
/// ```toml
/// engine = "vibrato"
/// preset = "unidic-cwj"
/// ```
///
/// ```toml
/// engine = "lexicon"
/// path = "/opt/morph/lexicon.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "engine", rename_all = "kebab-case")]
pub enum EngineConfig {
  /// Japanese: vibrato-rkyv segmentation and feature lookup
  Vibrato {
    /// Preset dictionary
    preset: DictionaryPreset,
    /// Dictionary cache directory.
    ///
    /// `None` lets `DictionaryManager` pick the OS cache directory.
    #[serde(default)]
    cache_dir: Option<PathBuf>,
  },
  /// Space-separated scripts: tantivy word splitting and a JSON lexicon
  Lexicon {
    /// Lexicon file (JSON object: form → entries)
    #[serde(default)]
    path: Option<PathBuf>,
  },
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` is a vibrato-rkyv type without `Deserialize`, and the
/// orphan rule forbids adding it here, so configuration goes through this enum
/// and is converted with `.into()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl FromStr for DictionaryPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

impl EngineConfig {
  /// Short engine name used in logs (`"vibrato"` / `"lexicon"`)
  pub fn name(&self) -> &'static str {
    match self {
      EngineConfig::Vibrato { .. } => "vibrato",
      EngineConfig::Lexicon { .. } => "lexicon",
    }
  }

  /// Lexicon path, if the lexicon engine is selected and a path is set
  pub fn lexicon_path(&self) -> Option<&Path> {
    match self {
      EngineConfig::Lexicon { path } => path.as_deref(),
      EngineConfig::Vibrato { .. } => None,
    }
  }

  /// Checks the configuration before any dictionary or lexicon is loaded.
  ///
  /// # Errors
  /// - `MissingLexiconPath`: lexicon engine without a path
  /// - `InvalidDictionaryCacheDir`: cache_dir exists and is not a directory
  pub fn validate(&self) -> Result<(), ConfigError> {
    match self {
      EngineConfig::Lexicon { path: None } => Err(ConfigError::MissingLexiconPath),
      EngineConfig::Lexicon { path: Some(_) } => Ok(()),
      EngineConfig::Vibrato {
        cache_dir: Some(dir),
        ..
      } if dir.exists() && !dir.is_dir() => Err(ConfigError::InvalidDictionaryCacheDir {
        path: dir.clone(),
      }),
      EngineConfig::Vibrato { .. } => Ok(()),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  #[test]
  fn preset_from_str_accepts_any_case() {
    assert_eq!(DictionaryPreset::from_str("ipadic").unwrap(), DictionaryPreset::Ipadic);
    assert_eq!(DictionaryPreset::from_str("UNIDIC-CWJ").unwrap(), DictionaryPreset::UnidicCwj);
    assert_eq!(DictionaryPreset::from_str("unidic-csj").unwrap(), DictionaryPreset::UnidicCsj);
  }

  #[test]
  fn preset_from_str_invalid() {
    let err = DictionaryPreset::from_str("mecab").unwrap_err();
    assert!(err.contains("mecab"));
  }

  #[test]
  fn dictionary_preset_converts_to_preset_kind() {
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::Ipadic),
      PresetDictionaryKind::Ipadic
    );
    assert_eq!(
      PresetDictionaryKind::from(DictionaryPreset::UnidicCsj),
      PresetDictionaryKind::UnidicCsj
    );
  }

  #[test]
  fn deserialize_vibrato_engine() {
    let json = r#"{"engine": "vibrato", "preset": "unidic-cwj"}"#;
    let config: EngineConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
      config,
      EngineConfig::Vibrato {
        preset: DictionaryPreset::UnidicCwj,
        cache_dir: None,
      }
    );
    assert_eq!(config.name(), "vibrato");
  }

  #[test]
  fn deserialize_lexicon_engine() {
    let json = r#"{"engine": "lexicon", "path": "/tmp/lexicon.json"}"#;
    let config: EngineConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.lexicon_path(), Some(Path::new("/tmp/lexicon.json")));
  }

  #[test]
  fn validate_rejects_lexicon_without_path() {
    let config = EngineConfig::Lexicon { path: None };
    assert!(matches!(config.validate(), Err(ConfigError::MissingLexiconPath)));
  }

  #[test]
  fn validate_accepts_missing_cache_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config = EngineConfig::Vibrato {
      preset: DictionaryPreset::Ipadic,
      cache_dir: Some(temp_dir.path().join("not-yet-created")),
    };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_cache_dir_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("dict");
    fs::write(&file_path, b"not a dir").unwrap();

    let config = EngineConfig::Vibrato {
      preset: DictionaryPreset::Ipadic,
      cache_dir: Some(file_path.clone()),
    };
    match config.validate() {
      Err(ConfigError::InvalidDictionaryCacheDir { path }) => assert_eq!(path, file_path),
      other => panic!("expected InvalidDictionaryCacheDir, got {other:?}"),
    }
  }
}
