//! APIエラー定義

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use morph::errors::MorphError;

/// エラーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// リクエストのデコード失敗
  Decode,
  /// レスポンスのエンコード失敗
  Encode,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Decode => "decode_error",
      Self::Encode => "encode_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Decode => StatusCode::BAD_REQUEST,
      Self::Encode | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
///
/// Display は転送先にそのまま返すメッセージ（デコーダー/エンコーダーの原文）
#[derive(Debug, Error)]
pub enum ApiError {
  /// リクエストボディが不正
  #[error("{0}")]
  Decode(String),

  /// レスポンスのシリアライズ失敗
  #[error("{0}")]
  Encode(String),

  /// 内部エラー
  #[error("内部エラー: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("設定エラー: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Decode(_) => ApiErrorKind::Decode,
      Self::Encode(_) => ApiErrorKind::Encode,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// デコードエラーを作成
  #[must_use]
  pub fn decode(message: impl Into<String>) -> Self {
    Self::Decode(message.into())
  }

  /// エンコードエラーを作成
  #[must_use]
  pub fn encode(message: impl Into<String>) -> Self {
    Self::Encode(message.into())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// ステータスコード + プレーンテキスト本文
impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    tracing::debug!(code = self.code(), status = %self.status(), "エラーレスポンスを返却");
    (self.status(), self.to_string()).into_response()
  }
}

/// gRPC ステータスへの変換
impl From<ApiError> for tonic::Status {
  fn from(err: ApiError) -> Self {
    tracing::debug!(code = err.code(), "gRPC エラーステータスを返却");
    match err.kind() {
      ApiErrorKind::Decode => tonic::Status::invalid_argument(err.to_string()),
      ApiErrorKind::Encode | ApiErrorKind::Internal | ApiErrorKind::Config => {
        tonic::Status::internal(err.to_string())
      }
    }
  }
}

/// MorphError から ApiError への変換
///
/// ライブラリのエラーは起動時（辞書・レキシコンのロード）にしか発生しない。
impl From<MorphError> for ApiError {
  fn from(err: MorphError) -> Self {
    ApiError::config(err.to_string())
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
