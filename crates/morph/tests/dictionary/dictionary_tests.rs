//! dictionary 用のテスト
//! 辞書管理の統合テスト

use morph::config::{DictionaryPreset, EngineConfig};
use morph::dictionary::DictionaryManager;
use morph::errors::DictionaryError;
use morph::Orchestrator;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// コンストラクタ自体はネットワーク不要
#[test]
fn create_dictionary_manager_with_preset() {
  let result = DictionaryManager::with_preset(PresetDictionaryKind::Ipadic);
  assert!(result.is_ok(), "DictionaryManager の構築に失敗: {:?}", result.err());

  let manager = result.unwrap();
  assert!(manager.cache_dir().ends_with("morph/dict"));
}

/// 存在しないパスを指定した場合は DictionaryNotFound
#[test]
fn from_local_path_with_nonexistent_file() {
  let err = DictionaryManager::from_local_path("/nonexistent/path/to/system.dic").unwrap_err();
  assert!(
    matches!(err, DictionaryError::DictionaryNotFound(_)),
    "期待されるエラー型ではありません: {:?}",
    err
  );
}

/// ディレクトリは辞書ファイルとして扱わない
#[test]
fn from_local_path_with_directory() {
  let temp_dir = tempfile::TempDir::new().unwrap();
  let err = DictionaryManager::from_local_path(temp_dir.path()).unwrap_err();
  assert!(matches!(err, DictionaryError::DictionaryNotFound(_)));
}

/// プリセット辞書のダウンロード＆ロード
///
/// ネットワークアクセスと大容量ファイルの処理が必要
///
/// 実行方法:
/// ```bash
/// cargo test -p morph --features with_dict_tests download_and_load_ipadic
/// ```
#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn download_and_load_ipadic() {
  let manager =
    DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).expect("DictionaryManager の構築に失敗");

  let first = manager.load().expect("辞書のロードに失敗");
  // 2回目はキャッシュ済みの Arc が返る
  let second = manager.load().expect("2回目のロードに失敗");
  assert!(std::sync::Arc::ptr_eq(&first, &second));
  assert!(manager.is_cached());
}

/// vibrato エンジンでのオーケストレーター構築
#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn orchestrator_from_vibrato_config() {
  let config = EngineConfig::Vibrato {
    preset: DictionaryPreset::Ipadic,
    cache_dir: None,
  };
  let orchestrator = Orchestrator::from_config(&config).expect("vibrato engine should build");

  let reply = orchestrator.process("東京タワーは東京の観光名所です。");
  assert!(!reply.items.is_empty());
  assert_eq!(reply.items.last().map(|i| i.form()), Some("。"));
}
