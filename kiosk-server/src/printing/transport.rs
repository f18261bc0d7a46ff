//! Delivery of rendered tickets to network printers
//!
//! Every failure is contained here: a delivery resolves to a
//! [`DeliveryOutcome`] and never propagates an error to the dispatcher.

use std::time::Duration;

use kiosk_printer::{NetworkPrinter, Printer};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

/// Address meaning "printer deliberately disabled"
pub const NULL_ROUTE: &str = "0.0.0.0";

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// No usable address configured
    Skipped,
    Delivered,
    Failed { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

/// Network transport settings shared by all deliveries
#[derive(Debug, Clone)]
pub struct PrinterTransport {
    default_port: u16,
    print_timeout: Duration,
    drawer_timeout: Duration,
}

impl PrinterTransport {
    pub fn new(default_port: u16, print_timeout: Duration, drawer_timeout: Duration) -> Self {
        Self {
            default_port,
            print_timeout,
            drawer_timeout,
        }
    }

    /// Send a rendered buffer to the printer at `address`
    #[instrument(skip(self, address, data), fields(bytes = data.len()))]
    pub async fn deliver(&self, label: &str, address: Option<&str>, data: &[u8]) -> DeliveryOutcome {
        let Some(address) = routable(address) else {
            warn!("{} printer address not configured, skipping", label);
            return DeliveryOutcome::Skipped;
        };

        let printer = match NetworkPrinter::from_address(address, self.default_port) {
            Ok(p) => p.with_timeout(self.print_timeout),
            Err(e) => {
                error!(address = %address, error = %e, "Invalid printer address");
                return DeliveryOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        info!(addr = %printer.addr(), "Sending to {}", label);
        match printer.print(data).await {
            Ok(()) => {
                info!("{} print done", label);
                DeliveryOutcome::Delivered
            }
            Err(e) => {
                error!(addr = %printer.addr(), error = %e, "{} print failed", label);
                DeliveryOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Pulse the cash drawer attached to the printer at `address`
    ///
    /// Returns true only when the pulse was written.
    #[instrument(skip(self))]
    pub async fn pulse_drawer(&self, address: &str) -> bool {
        let Some(address) = routable(Some(address)) else {
            error!("Cash drawer printer address missing");
            return false;
        };

        let printer = match NetworkPrinter::from_address(address, self.default_port) {
            Ok(p) => p.with_timeout(self.drawer_timeout),
            Err(e) => {
                error!(error = %e, "Invalid cash drawer printer address");
                return false;
            }
        };

        match printer.open_cash_drawer().await {
            Ok(()) => {
                info!("Cash drawer opened");
                true
            }
            Err(e) => {
                error!(error = %e, "Cash drawer pulse failed");
                false
            }
        }
    }
}

/// Trimmed address, or None when empty or null-routed
fn routable(address: Option<&str>) -> Option<&str> {
    let address = address?.trim();
    let host = address.split(':').next().unwrap_or(address);
    if address.is_empty() || host == NULL_ROUTE {
        None
    } else {
        Some(address)
    }
}
