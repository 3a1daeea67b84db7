//! API設定の定数定義

/// デフォルトのHTTPバインドアドレス
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

/// デフォルトのgRPCバインドアドレス
///
/// `PORT` が設定されている場合は `0.0.0.0:$PORT` が優先される。
pub const DEFAULT_GRPC_ADDR: &str = "127.0.0.1:50051";

/// デフォルトで有効にするトランスポート
pub const DEFAULT_TRANSPORTS: &str = "http,grpc";

/// デフォルトの解析エンジン
pub const DEFAULT_ENGINE: &str = "vibrato";

/// デフォルトの辞書プリセット名
///
/// IPAdic は最も小さく、初回ダウンロードが速い。
pub const DEFAULT_PRESET_DICT: &str = "ipadic";
