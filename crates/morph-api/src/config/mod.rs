//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_ENGINE, DEFAULT_GRPC_ADDR, DEFAULT_HTTP_ADDR, DEFAULT_PRESET_DICT, DEFAULT_TRANSPORTS,
};
pub use env::{Config, Transport, Transports};
