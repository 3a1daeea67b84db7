//! tokenizer モジュール用統合テスト
//!
//! vibrato を使うテストは辞書キャッシュが必要（`with_dict_tests` feature で有効化）

use std::sync::Arc;

use morph::analyser::{Analyser, VibratoAnalyser};
use morph::dictionary::DictionaryManager;
use morph::errors::AnalysisError;
use morph::models::TokenKind;
use morph::tokenizer::{SimpleWordTokenizer, VibratoWordTokenizer, WordTokenizer};
use tantivy::tokenizer::{RegexTokenizer, TextAnalyzer};
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// IPAdic プリセットをロードする（未キャッシュならダウンロード）
///
/// `with_dict_tests` 有効時のみ呼ばれる。ロードできなければテスト失敗。
fn load_ipadic() -> Arc<Dictionary> {
  let manager =
    DictionaryManager::with_preset(PresetDictionaryKind::Ipadic).expect("DictionaryManager の構築に失敗");
  manager.load().expect("IPAdic のロードに失敗")
}

#[test]
fn custom_tantivy_analyzer_is_passed_through() {
  // Keeps hyphenated words together
  let regex = RegexTokenizer::new(r"[\w-]+").expect("valid regex");
  let tokenizer = SimpleWordTokenizer::from_analyzer(TextAnalyzer::from(regex));

  let tokens = tokenizer.tokenize("well-known facts");
  let forms: Vec<&str> = tokens.iter().map(|t| t.form.as_str()).collect();
  assert_eq!(forms, vec!["well-known", "facts", ""]);
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_tokenizes_sentence_with_symbols() {
  let dict = load_ipadic();
  let tokenizer = VibratoWordTokenizer::from_shared_dictionary(dict);

  let tokens = tokenizer.tokenize("東京タワーは東京の観光名所です。");

  assert!(tokens.iter().any(|t| t.form == "東京" && t.kind == TokenKind::Word));
  assert!(tokens.iter().any(|t| t.form == "。" && t.kind == TokenKind::Symbol));
  assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
  // Particles are passed through, not filtered
  assert!(tokens.iter().any(|t| t.form == "は"));
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_spans_are_byte_offsets() {
  let dict = load_ipadic();
  let tokenizer = VibratoWordTokenizer::from_shared_dictionary(dict);

  let text = "東京タワー";
  for token in tokenizer.tokenize(text).iter().filter(|t| !t.is_eof()) {
    assert!(token.span.end <= text.len());
    assert_eq!(&text[token.span.clone()], token.form);
  }
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_empty_input_yields_only_eof() {
  let dict = load_ipadic();
  let tokens = VibratoWordTokenizer::from_shared_dictionary(dict).tokenize("");
  assert_eq!(tokens.len(), 1);
  assert!(tokens[0].is_eof());
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_analyser_reads_lemma_and_pos() {
  let dict = load_ipadic();
  let analyser = VibratoAnalyser::from_shared_dictionary(dict);

  let entries = analyser.analyse("東京").expect("single morpheme");
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0].lemma, "東京");
  assert_eq!(entries[0].tag_set.pos, "名詞");
}

#[test]
#[cfg_attr(not(feature = "with_dict_tests"), ignore)]
fn vibrato_analyser_rejects_multi_morpheme_form() {
  let dict = load_ipadic();
  let analyser = VibratoAnalyser::from_shared_dictionary(dict);

  let err = analyser.analyse("東京の観光名所").unwrap_err();
  assert!(matches!(err, AnalysisError::NotSingleMorpheme { .. }), "unexpected: {err:?}");
  assert_eq!(analyser.analyse(""), Err(AnalysisError::EmptyForm));
}
