//! Analyse one word and print its entries
//!
//! ```bash
//! cargo run -p morph --example analyse_word -- books crates/morph/tests/fixtures/lexicon.json
//! cargo run -p morph --example analyse_word -- 東京
//! ```
//!
//! With a lexicon path the lexicon engine is used, otherwise the IPAdic
//! preset (downloaded on first run).

use std::error::Error;
use std::path::PathBuf;

use morph::config::{DictionaryPreset, EngineConfig};
use morph::Orchestrator;

fn main() -> Result<(), Box<dyn Error>> {
  let mut args = std::env::args().skip(1);
  let word = args.next().unwrap_or_else(|| "books".to_string());

  let config = match args.next() {
    Some(path) => EngineConfig::Lexicon {
      path: Some(PathBuf::from(path)),
    },
    None => EngineConfig::Vibrato {
      preset: DictionaryPreset::Ipadic,
      cache_dir: None,
    },
  };

  let orchestrator = Orchestrator::from_config(&config)?;
  for item in orchestrator.process(&word).items {
    println!("form: {}", item.form());
    if let Some(error) = item.error() {
      println!("  error: {error}");
    }
    for entry in item.entries() {
      println!("- {} {} {:?}", entry.lemma, entry.tag_set.pos, entry.tag_set.tags);
    }
  }

  Ok(())
}
