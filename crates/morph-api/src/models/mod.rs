//! モデルモジュール

mod request;
mod response;

pub use request::AnalyseRequest;
pub use response::{AnalyseResponse, ItemDto};
