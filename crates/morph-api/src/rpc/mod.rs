//! gRPC binding (`morphrpc.Service/Analyse`)

mod convert;
pub mod proto;
mod server;
mod service;

pub use server::run_grpc_server;
pub use service::MorphRpcService;
