//! morph-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use morph::Orchestrator;
use morph_api::ApiError;
use morph_api::api::{AppState, run_http_server};
use morph_api::config::{Config, Transport};
use morph_api::rpc::run_grpc_server;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未設定時は info）
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(engine = config.engine.name(), transports = ?config.transports, "設定を読み込みました");

  // オーケストレーターの初期化（辞書・レキシコンのロード）
  let orchestrator = Arc::new(Orchestrator::from_config(&config.engine)?);
  tracing::info!("形態素解析サービスを初期化しました");

  let state = AppState::new(config.clone(), orchestrator);

  // 有効なトランスポートを同一プロセスで起動し、どちらかが終了したら終了する
  let http = async {
    if config.transports.contains(Transport::Http) {
      run_http_server(state.clone()).await
    } else {
      std::future::pending().await
    }
  };
  let grpc = async {
    if config.transports.contains(Transport::Grpc) {
      run_grpc_server(state.clone()).await
    } else {
      std::future::pending().await
    }
  };

  tokio::select! {
    result = http => result,
    result = grpc => result,
  }
}
