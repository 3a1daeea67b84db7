//! models module
pub mod model_definition;

pub use model_definition::{AnalysisReply, Entry, Item, TagSet, Token, TokenKind};
