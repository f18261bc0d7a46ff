use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use tracing::info;

use crate::core::ServerState;
use crate::printing::{DeliveryOutcome, DispatchReport, PrintOrder};
use crate::utils::{AppError, AppResponse, AppResult};

#[derive(Debug, Deserialize)]
pub struct TestPrinterRequest {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct OpenDrawerRequest {
    #[serde(default, rename = "printerIp")]
    pub printer_ip: Option<String>,
}

/// POST /print
///
/// Succeeds once every delivery has settled, whatever the individual
/// outcomes; the report carries them per ticket.
pub async fn print_order(
    State(state): State<ServerState>,
    payload: Result<Json<PrintOrder>, JsonRejection>,
) -> AppResult<Json<AppResponse<DispatchReport>>> {
    let Json(order) = payload?;
    info!(
        items = order.items.len(),
        table = order.table_number.as_deref().unwrap_or("To Go"),
        "Order received"
    );

    let report = state.print_service.dispatch(&order).await;
    Ok(Json(AppResponse::success(report)))
}

/// POST /api/test-printer
pub async fn test_printer(
    State(state): State<ServerState>,
    payload: Result<Json<TestPrinterRequest>, JsonRejection>,
) -> AppResult<Json<AppResponse<()>>> {
    let Json(req) = payload?;
    let ip = required(req.ip, "IP Address is missing")?;

    let address = match req.port {
        Some(port) => format!("{}:{}", ip, port),
        None => ip,
    };

    // Skipped means the address is the disabled sentinel
    let outcome = state.print_service.test_print(&address).await;
    let ok = !matches!(outcome, DeliveryOutcome::Failed { .. });
    Ok(Json(AppResponse::flag(ok)))
}

/// POST /api/printer/open-drawer
pub async fn open_drawer(
    State(state): State<ServerState>,
    payload: Result<Json<OpenDrawerRequest>, JsonRejection>,
) -> AppResult<Json<AppResponse<()>>> {
    let Json(req) = payload?;
    let ip = required(req.printer_ip, "Printer IP required")?;

    let opened = state.print_service.open_drawer(&ip).await;
    Ok(Json(AppResponse::flag(opened)))
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(message))
}
