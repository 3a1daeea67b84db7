//! morph 形態素解析オーケストレーション
//!
//! Turns free text into one morphological analysis item per token. The
//! tokenizer and the analysis engine are external; this crate adapts them
//! and isolates per-token failures.

/// Analysis adapters - Analyser trait, lexicon and vibrato implementations
pub mod analyser;

/// Configuration - engine selection and dictionary presets
pub mod config;

/// Dictionary - loading of vibrato-rkyv dictionaries
pub mod dictionary;

/// Errors - MorphError, AnalysisError, MorphResult
pub mod errors;

/// Data model - Token, Entry, TagSet, Item, AnalysisReply
pub mod models;

/// Orchestrator - tokenization, per-token analysis and reply assembly
pub mod orchestrator;

/// Tokenizer adapters - WordTokenizer trait, tantivy and vibrato implementations
pub mod tokenizer;

/// 再エクスポート
pub use config::{DictionaryPreset, EngineConfig};
pub use errors::{AnalysisError, MorphError, MorphResult};
pub use models::{AnalysisReply, Entry, Item, TagSet, Token, TokenKind};
pub use orchestrator::Orchestrator;
