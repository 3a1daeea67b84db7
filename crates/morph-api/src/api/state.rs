//! API State Definition

use std::sync::Arc;

use morph::Orchestrator;

use crate::config::Config;

/// Application State
///
/// Shared by the HTTP router and the gRPC service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Request orchestrator
  ///
  /// - Production: `Orchestrator::from_config(&config.engine)?`
  /// - Test: `Orchestrator::new(stub_tokenizer, stub_analyser)`
  pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, orchestrator: Arc<Orchestrator>) -> Self {
    Self {
      config,
      orchestrator,
    }
  }
}
