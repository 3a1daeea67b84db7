//! Internal model → protobuf messages

use morph::{AnalysisReply, Entry, Item, TagSet};

use super::proto::morphrpc;

impl From<&TagSet> for morphrpc::TagSet {
  fn from(tag_set: &TagSet) -> Self {
    Self {
      pos: tag_set.pos.clone(),
      tags: tag_set.tags.clone(),
    }
  }
}

impl From<&Entry> for morphrpc::Entry {
  fn from(entry: &Entry) -> Self {
    Self {
      lemma: entry.lemma.clone(),
      tag_set: Some(morphrpc::TagSet::from(&entry.tag_set)),
    }
  }
}

/// `error` is the empty string on success
impl From<&Item> for morphrpc::Item {
  fn from(item: &Item) -> Self {
    Self {
      form: item.form().to_string(),
      entries: item.entries().iter().map(morphrpc::Entry::from).collect(),
      error: item.error().map(ToString::to_string).unwrap_or_default(),
    }
  }
}

impl From<&AnalysisReply> for morphrpc::AnalyseReply {
  fn from(reply: &AnalysisReply) -> Self {
    Self {
      items: reply.items.iter().map(morphrpc::Item::from).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use morph::AnalysisError;

  use super::*;

  #[test]
  fn analysed_item_to_proto() {
    let item = Item::analysed(
      "books",
      vec![Entry::new("book", TagSet::new("NOUN", ["PLURAL"]))],
    );

    let proto = morphrpc::Item::from(&item);
    assert_eq!(proto.form, "books");
    assert!(proto.error.is_empty());
    assert_eq!(proto.entries.len(), 1);
    assert_eq!(proto.entries[0].lemma, "book");

    let tag_set = proto.entries[0].tag_set.as_ref().unwrap();
    assert_eq!(tag_set.pos, "NOUN");
    assert_eq!(tag_set.tags, vec!["PLURAL".to_string()]);
  }

  #[test]
  fn failed_item_to_proto() {
    let item = Item::failed("", AnalysisError::EmptyForm);

    let proto = morphrpc::Item::from(&item);
    assert!(proto.entries.is_empty());
    assert!(!proto.error.is_empty());
  }

  #[test]
  fn reply_keeps_order() {
    let reply = AnalysisReply {
      items: vec![Item::analysed("a", Vec::new()), Item::analysed("b", Vec::new())],
    };

    let proto = morphrpc::AnalyseReply::from(&reply);
    let forms: Vec<&str> = proto.items.iter().map(|i| i.form.as_str()).collect();
    assert_eq!(forms, vec!["a", "b"]);
  }
}
