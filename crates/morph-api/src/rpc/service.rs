//! gRPC サービス実装

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, error, info};

use morph::Orchestrator;

use super::proto::morphrpc::{self, service_server};
use crate::errors::ApiError;

/// `morphrpc.Service` の実装
///
/// HTTP ハンドラーと同じオーケストレーターを共有する。
#[derive(Clone)]
pub struct MorphRpcService {
  orchestrator: Arc<Orchestrator>,
}

impl MorphRpcService {
  /// Creates a new MorphRpcService
  #[must_use]
  pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
    Self { orchestrator }
  }
}

#[tonic::async_trait]
impl service_server::Service for MorphRpcService {
  async fn analyse(
    &self,
    request: Request<morphrpc::AnalyseRequest>,
  ) -> Result<Response<morphrpc::AnalyseReply>, Status> {
    let input = request.into_inner().input;
    debug!(input_len = input.len(), "Analyse リクエストを受信");

    let orchestrator = self.orchestrator.clone();
    let reply = tokio::task::spawn_blocking(move || orchestrator.process(&input))
      .await
      .map_err(|e| {
        error!(error = %e, "spawn_blocking エラー");
        ApiError::internal("処理の実行に失敗しました")
      })?;

    info!(
      item_count = reply.items.len(),
      failed_count = reply.failed_count(),
      "Analyse 完了"
    );

    Ok(Response::new(morphrpc::AnalyseReply::from(&reply)))
  }
}
