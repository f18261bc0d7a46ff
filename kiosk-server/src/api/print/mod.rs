//! Print API used by the kiosk and the admin page

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/print", post(handler::print_order))
        .route("/api/test-printer", post(handler::test_printer))
        .route("/api/printer/open-drawer", post(handler::open_drawer))
}
