//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, post_morph};
pub use routes::{create_router, run_http_server};
pub use state::AppState;
