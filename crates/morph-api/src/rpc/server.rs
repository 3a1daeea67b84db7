//! gRPC サーバー起動

use std::net::SocketAddr;

use tonic::transport::Server;

use super::proto::ServiceServer;
use super::service::MorphRpcService;
use crate::api::AppState;
use crate::errors::ApiError;

/// gRPC サーバーを起動する
///
/// # Errors
/// アドレスの解析またはサーバーの実行に失敗した場合にエラーを返す
pub async fn run_grpc_server(state: AppState) -> crate::errors::Result<()> {
  let addr: SocketAddr = state
    .config
    .grpc_addr
    .parse()
    .map_err(|e| ApiError::config(format!("gRPC アドレスが不正です: {}: {}", state.config.grpc_addr, e)))?;

  tracing::info!("gRPC サーバーを起動します: {}", addr);

  let service = MorphRpcService::new(state.orchestrator);

  Server::builder()
    .add_service(ServiceServer::new(service))
    .serve(addr)
    .await
    .map_err(|e| ApiError::internal(format!("gRPC サーバーエラー: {}", e)))?;

  Ok(())
}
