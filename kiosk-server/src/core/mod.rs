//! Core module - configuration, shared state, HTTP server

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::ServerError;
pub use server::{Server, build_app};
pub use state::ServerState;
