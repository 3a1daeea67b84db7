//! HTTPハンドラー定義

use axum::{
  body::Bytes,
  extract::State,
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyseRequest, AnalyseResponse};

use super::state::AppState;

/// POST /morph エンドポイント
///
/// 入力テキストをトークンに分割し、トークンごとの解析結果を返す。
///
/// # Request Body
/// ```json
/// { "input": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析完了（トークン単位の失敗は `error` フィールドで返す）
/// - 400 Bad Request: リクエストボディのデコード失敗（プレーンテキスト）
/// - 500 Internal Server Error: エンコード失敗・内部エラー（プレーンテキスト）
///
/// ボディは `Json` 抽出器を使わずに自前でデコードする。
/// デコード失敗時はオーケストレーターを呼ばない。
pub async fn post_morph(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
  let request: AnalyseRequest = serde_json::from_slice(&body).map_err(|e| {
    debug!(error = %e, "リクエストのデコードに失敗");
    ApiError::decode(e.to_string())
  })?;

  debug!(input_len = request.input.len(), "形態素解析リクエストを受信");

  // 解析は CPU バウンドなので spawn_blocking で実行
  let orchestrator = state.orchestrator.clone();
  let started = std::time::Instant::now();

  let reply = tokio::task::spawn_blocking(move || orchestrator.process(&request.input))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal("処理の実行に失敗しました")
    })?;

  info!(
    item_count = reply.items.len(),
    failed_count = reply.failed_count(),
    elapsed_ms = started.elapsed().as_millis() as u64,
    "形態素解析完了"
  );

  let body = serde_json::to_vec(&AnalyseResponse::from(&reply)).map_err(|e| {
    error!(error = %e, "レスポンスのエンコードに失敗");
    ApiError::encode(e.to_string())
  })?;

  Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
