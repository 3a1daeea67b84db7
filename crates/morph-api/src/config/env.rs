//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use morph::config::{DictionaryPreset, EngineConfig};

use super::constants::{
  DEFAULT_ENGINE, DEFAULT_GRPC_ADDR, DEFAULT_HTTP_ADDR, DEFAULT_PRESET_DICT, DEFAULT_TRANSPORTS,
};
use crate::errors::ApiError;

/// Transport binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
  /// JSON over HTTP (`POST /morph`)
  Http,
  /// `morphrpc.Service/Analyse`
  Grpc,
}

impl FromStr for Transport {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "http" => Ok(Self::Http),
      "grpc" => Ok(Self::Grpc),
      _ => Err(format!("Unknown transport: {}. Valid values: http, grpc", s)),
    }
  }
}

/// Set of enabled transports (never empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transports {
  http: bool,
  grpc: bool,
}

impl Transports {
  /// Parses a comma separated list such as `"http,grpc"`
  ///
  /// # Errors
  /// Unknown names, or a list that enables nothing
  pub fn parse(list: &str) -> Result<Self, String> {
    let mut transports = Self {
      http: false,
      grpc: false,
    };

    for name in list.split(',').filter(|s| !s.trim().is_empty()) {
      match Transport::from_str(name)? {
        Transport::Http => transports.http = true,
        Transport::Grpc => transports.grpc = true,
      }
    }

    if !transports.http && !transports.grpc {
      return Err("No transport enabled. Valid values: http, grpc".to_string());
    }
    Ok(transports)
  }

  /// Whether the given transport is enabled
  #[must_use]
  pub fn contains(&self, transport: Transport) -> bool {
    match transport {
      Transport::Http => self.http,
      Transport::Grpc => self.grpc,
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// HTTP bind address (e.g. "127.0.0.1:8080")
  pub http_addr: String,
  /// gRPC bind address (e.g. "127.0.0.1:50051")
  pub grpc_addr: String,
  /// Enabled transports
  pub transports: Transports,
  /// Analysis engine
  pub engine: EngineConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// `std::env::set_var` is unsafe in Rust 2024, so tests go through here.
  ///
  /// # Errors
  /// Returns an error if a variable value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let http_addr = lookup("MORPH_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());

    let grpc_addr = lookup("MORPH_GRPC_ADDR")
      .or_else(|| lookup("PORT").map(|port| format!("0.0.0.0:{}", port)))
      .unwrap_or_else(|| DEFAULT_GRPC_ADDR.to_string());

    let transports_str =
      lookup("MORPH_TRANSPORTS").unwrap_or_else(|| DEFAULT_TRANSPORTS.to_string());
    let transports = Transports::parse(&transports_str).map_err(ApiError::config)?;

    let engine_str = lookup("MORPH_ENGINE").unwrap_or_else(|| DEFAULT_ENGINE.to_string());
    let engine = match engine_str.to_lowercase().as_str() {
      "vibrato" => {
        let preset_str =
          lookup("MORPH_PRESET_DICT").unwrap_or_else(|| DEFAULT_PRESET_DICT.to_string());
        let preset = DictionaryPreset::from_str(&preset_str).map_err(ApiError::config)?;
        EngineConfig::Vibrato {
          preset,
          cache_dir: lookup("MORPH_DICT_CACHE_DIR").map(PathBuf::from),
        }
      }
      "lexicon" => EngineConfig::Lexicon {
        path: lookup("MORPH_LEXICON_PATH").map(PathBuf::from),
      },
      _ => {
        return Err(ApiError::config(format!(
          "Unknown engine: {}. Valid values: vibrato, lexicon",
          engine_str
        )));
      }
    };

    engine.validate().map_err(|e| ApiError::config(e.to_string()))?;

    Ok(Self {
      http_addr,
      grpc_addr,
      transports,
      engine,
    })
  }
}
