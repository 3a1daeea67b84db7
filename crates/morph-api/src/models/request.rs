//! リクエストモデル定義

use serde::{Deserialize, Deserializer};

/// 形態素解析リクエスト
#[derive(Debug, Deserialize)]
pub struct AnalyseRequest {
  /// 解析対象のテキスト
  ///
  /// 欠落・`null` は空文字列として扱う（gRPC の proto3 デフォルトと同じ）
  #[serde(default, deserialize_with = "null_as_empty")]
  pub input: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"input": "books"}"#;
    let req: AnalyseRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.input, "books");
  }

  #[test]
  fn deserialize_empty_input() {
    let json = r#"{"input": ""}"#;
    let req: AnalyseRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.input, "");
  }

  #[test]
  fn missing_or_null_input_is_empty() {
    for json in [r#"{}"#, r#"{"input": null}"#, r#"{"text": "books"}"#] {
      let req: AnalyseRequest = serde_json::from_str(json).unwrap();
      assert_eq!(req.input, "", "{}", json);
    }
  }

  #[test]
  fn non_string_input_is_rejected() {
    assert!(serde_json::from_str::<AnalyseRequest>(r#"{"input": 42}"#).is_err());
    assert!(serde_json::from_str::<AnalyseRequest>(r#"{"input": ["books"]}"#).is_err());
  }
}
