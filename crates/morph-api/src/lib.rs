//! morph-api crate
//!
//! Serves the morph orchestrator over HTTP (JSON) and gRPC.
//!
//! ## Endpoints
//! - `POST /morph` - Morphological Analysis
//! - `GET /health` - Health Check
//! - `morphrpc.Service/Analyse` - Morphological Analysis (gRPC)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/morph \
//!   -H "Content-Type: application/json" \
//!   -d '{"input": "東京タワーは東京の観光名所です"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod rpc;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyseRequest, AnalyseResponse, ItemDto};
pub use rpc::MorphRpcService;
