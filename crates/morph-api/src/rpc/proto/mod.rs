//! Generated protobuf modules for the gRPC interface
//!
//! Generated from `proto/morphrpc.proto` and committed, so building does not
//! need `protoc`.

/// `morphrpc` package: messages, client and server
#[allow(missing_docs, clippy::all)]
pub mod morphrpc {
  include!("morphrpc.rs");
  include!("morphrpc.tonic.rs");
}

pub use morphrpc::service_client::ServiceClient;
pub use morphrpc::service_server::ServiceServer;
pub use morphrpc::{AnalyseReply, AnalyseRequest, Entry, Item, TagSet};
