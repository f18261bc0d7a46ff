//! HTTP API
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Liveness check |
//! | /api/settings | GET | Current settings record |
//! | /api/settings | POST | Replace settings record |
//! | /print | POST | Print an order |
//! | /api/test-printer | POST | Send a test page |
//! | /api/printer/open-drawer | POST | Pulse the cash drawer |

pub mod health;
pub mod print;
pub mod settings;

use axum::Router;

use crate::core::ServerState;

/// All API routes, state not yet applied
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(settings::router())
        .merge(print::router())
}
