//! lexicon 用のテスト
//! Loading lexicon files from disk

use std::fs;
use std::path::PathBuf;

use morph::analyser::{Analyser, LexiconAnalyser};
use morph::config::EngineConfig;
use morph::errors::{LexiconError, MorphError};
use morph::Orchestrator;
use tempfile::TempDir;

fn fixture() -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lexicon.json")
}

#[test]
fn load_fixture_lexicon() {
  let lexicon = LexiconAnalyser::from_path(fixture()).expect("fixture should load");

  assert_eq!(lexicon.len(), 6);
  let entries = lexicon.analyse("books").unwrap();
  assert_eq!(entries[0].lemma, "book");
  assert_eq!(entries[0].tag_set.pos, "NOUN");
  assert_eq!(entries[0].tag_set.tags, vec!["PLURAL"]);
  assert_eq!(entries[1].tag_set.pos, "VERB");
}

#[test]
fn missing_file_is_a_read_error() {
  let temp_dir = TempDir::new().unwrap();
  let path = temp_dir.path().join("missing.json");

  let err = LexiconAnalyser::from_path(&path).unwrap_err();
  assert!(matches!(err, LexiconError::Read { .. }), "unexpected error: {err:?}");
  assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_file_is_a_parse_error() {
  let temp_dir = TempDir::new().unwrap();
  let path = temp_dir.path().join("broken.json");
  fs::write(&path, r#"{"books": [{"lemma": "book"}]"#).unwrap();

  let err = LexiconAnalyser::from_path(&path).unwrap_err();
  assert!(matches!(err, LexiconError::Parse { .. }), "unexpected error: {err:?}");
}

/// 大文字を含むキーは小文字化された検索に一致しないので拒否する
#[test]
fn mixed_case_form_is_rejected() {
  let temp_dir = TempDir::new().unwrap();
  let path = temp_dir.path().join("mixed.json");
  fs::write(
    &path,
    r#"{"books": [], "Paris": [{"lemma": "Paris", "tagSet": {"pos": "PROPN"}}]}"#,
  )
  .unwrap();

  let err = LexiconAnalyser::from_path(&path).unwrap_err();
  assert!(
    matches!(&err, LexiconError::NonLowercaseForm { form, .. } if form == "Paris"),
    "unexpected error: {err:?}"
  );
}

#[test]
fn orchestrator_from_lexicon_config() {
  let config = EngineConfig::Lexicon {
    path: Some(fixture()),
  };
  let orchestrator = Orchestrator::from_config(&config).expect("lexicon engine should build");

  let reply = orchestrator.process("The cat reads books.");
  let forms: Vec<&str> = reply.items.iter().map(|i| i.form()).collect();
  assert_eq!(forms, vec!["The", "cat", "reads", "books"]);
  assert_eq!(reply.failed_count(), 0);
}

#[test]
fn orchestrator_from_missing_lexicon_fails() {
  let config = EngineConfig::Lexicon {
    path: Some(PathBuf::from("/nonexistent/lexicon.json")),
  };
  let err = Orchestrator::from_config(&config).err().expect("should fail");
  assert!(matches!(err, MorphError::Lexicon(LexiconError::Read { .. })));
}
