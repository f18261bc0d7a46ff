//! Print service
//!
//! Turns an order into kitchen tickets and a receipt, then delivers all of
//! them concurrently. A slow or dead printer only affects its own ticket.

use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use futures::future::join_all;
use kiosk_printer::{Dialect, EscPosBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use super::abbreviation::AbbreviationResolver;
use super::receipt::{RECEIPT_WIDTH, ReceiptRenderer};
use super::renderer::{KitchenTicket, KitchenTicketRenderer};
use super::router::{TicketKind, route_items};
use super::transport::{DeliveryOutcome, PrinterTransport};
use super::types::PrintOrder;
use crate::settings::{PrinterRole, Settings, SettingsStore};

/// Outcome of one ticket in a dispatch
#[derive(Debug, Clone, Serialize)]
pub struct TicketDelivery {
    pub kind: TicketKind,
    pub printer: PrinterRole,
    #[serde(flatten)]
    pub outcome: DeliveryOutcome,
}

/// Per-ticket outcomes of one order
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchReport {
    pub tickets: Vec<TicketDelivery>,
}

impl DispatchReport {
    pub fn outcome(&self, kind: TicketKind) -> Option<&DeliveryOutcome> {
        self.tickets
            .iter()
            .find(|t| t.kind == kind)
            .map(|t| &t.outcome)
    }
}

struct PrintJob {
    kind: TicketKind,
    address: Option<String>,
    data: Vec<u8>,
}

#[derive(Clone)]
pub struct PrintService {
    settings: SettingsStore,
    transport: PrinterTransport,
    timezone: Option<Tz>,
}

impl PrintService {
    pub fn new(settings: SettingsStore, transport: PrinterTransport, timezone: Option<Tz>) -> Self {
        Self {
            settings,
            transport,
            timezone,
        }
    }

    /// Print an order on every printer it concerns
    pub async fn dispatch(&self, order: &PrintOrder) -> DispatchReport {
        let settings = self.settings.snapshot();
        self.dispatch_with(order, &settings, self.now()).await
    }

    /// Dispatch against an explicit settings snapshot and print time
    #[instrument(skip_all, fields(items = order.items.len(), table = ?order.table_number))]
    pub async fn dispatch_with(
        &self,
        order: &PrintOrder,
        settings: &Settings,
        printed_at: NaiveDateTime,
    ) -> DispatchReport {
        let jobs = compose_jobs(order, settings, printed_at);
        if jobs.is_empty() {
            info!("Nothing to print");
            return DispatchReport::default();
        }

        let outcomes = join_all(jobs.iter().map(|job| {
            self.transport
                .deliver(job.kind.label(), job.address.as_deref(), &job.data)
        }))
        .await;

        let tickets: Vec<TicketDelivery> = jobs
            .iter()
            .zip(outcomes)
            .map(|(job, outcome)| TicketDelivery {
                kind: job.kind,
                printer: job.kind.role(),
                outcome,
            })
            .collect();

        let delivered = tickets.iter().filter(|t| t.outcome.is_delivered()).count();
        info!(delivered, total = tickets.len(), "Order dispatched");

        DispatchReport { tickets }
    }

    /// Send a short self-test page to a printer
    #[instrument(skip(self))]
    pub async fn test_print(&self, address: &str) -> DeliveryOutcome {
        let mut b = EscPosBuilder::new(Dialect::Epson, RECEIPT_WIDTH);
        b.text("Connection OK!\nTest Print Successful.\n\n\n");
        b.cut();

        self.transport
            .deliver("Test", Some(address), &b.build())
            .await
    }

    /// Kick the cash drawer wired to a printer
    pub async fn open_drawer(&self, address: &str) -> bool {
        self.transport.pulse_drawer(address).await
    }

    /// Current wall-clock time in the shop's timezone
    pub fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        }
    }
}

/// Render every ticket the order needs, kitchen groups first
fn compose_jobs(order: &PrintOrder, settings: &Settings, printed_at: NaiveDateTime) -> Vec<PrintJob> {
    let resolver = AbbreviationResolver::new(&settings.abbreviations);
    let renderer = KitchenTicketRenderer::default();
    let mut jobs = Vec::with_capacity(3);

    for group in route_items(&order.items) {
        if group.items.is_empty() {
            continue;
        }
        let ticket = KitchenTicket {
            title: group.kind.title(),
            order_label: order.table_number.as_deref(),
            items: &group.items,
            printed_at,
        };
        jobs.push(PrintJob {
            kind: group.kind,
            address: settings.printers.address(group.kind.role()).map(str::to_string),
            data: renderer.render(&ticket, &resolver),
        });
    }

    if order.total_amount > Decimal::ZERO {
        jobs.push(PrintJob {
            kind: TicketKind::Receipt,
            address: settings.printers.address(PrinterRole::Receipt).map(str::to_string),
            data: ReceiptRenderer::new(order, &settings.design).render(),
        });
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn printed_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(14, 15, 0)
            .unwrap()
    }

    fn order(json: &str) -> PrintOrder {
        serde_json::from_str(json).unwrap()
    }

    fn kinds(jobs: &[PrintJob]) -> Vec<TicketKind> {
        jobs.iter().map(|j| j.kind).collect()
    }

    #[test]
    fn test_compose_all_three() {
        let o = order(
            r#"{"items": [{"name": "Burger"}, {"name": "Vanilla Shake"}], "totalAmount": 9.5}"#,
        );
        let jobs = compose_jobs(&o, &Settings::default(), printed_at());

        assert_eq!(
            kinds(&jobs),
            vec![TicketKind::Kitchen, TicketKind::Milkshake, TicketKind::Receipt]
        );
        assert_eq!(jobs[0].address.as_deref(), Some("192.168.50.3"));
        assert_eq!(jobs[1].address.as_deref(), Some("192.168.50.19"));
        assert_eq!(jobs[2].address.as_deref(), Some("192.168.50.20"));
    }

    #[test]
    fn test_compose_skips_empty_groups_and_free_orders() {
        let o = order(r#"{"items": [{"name": "Burger"}], "totalAmount": 0}"#);
        let jobs = compose_jobs(&o, &Settings::default(), printed_at());
        assert_eq!(kinds(&jobs), vec![TicketKind::Kitchen]);

        let o = order(r#"{"items": [], "totalAmount": 0}"#);
        assert!(compose_jobs(&o, &Settings::default(), printed_at()).is_empty());
    }

    #[test]
    fn test_compose_receipt_only() {
        let o = order(r#"{"items": [], "totalAmount": 3}"#);
        let jobs = compose_jobs(&o, &Settings::default(), printed_at());
        assert_eq!(kinds(&jobs), vec![TicketKind::Receipt]);
    }

    #[tokio::test]
    async fn test_dispatch_with_disabled_printers() {
        let mut settings = Settings::default();
        settings.printers.kitchen1_ip = Some("0.0.0.0".to_string());
        settings.printers.kitchen2_ip = None;
        settings.printers.receipt_ip = Some(String::new());

        let service = PrintService::new(
            SettingsStore::in_memory(settings.clone()),
            PrinterTransport::new(9100, Duration::from_millis(200), Duration::from_millis(200)),
            None,
        );
        let o = order(
            r#"{"items": [{"name": "Burger"}, {"name": "Shake"}], "totalAmount": 4}"#,
        );
        let report = service.dispatch_with(&o, &settings, printed_at()).await;

        assert_eq!(report.tickets.len(), 3);
        assert!(
            report
                .tickets
                .iter()
                .all(|t| t.outcome == DeliveryOutcome::Skipped)
        );
    }

    #[test]
    fn test_now_in_timezone() {
        let service = PrintService::new(
            SettingsStore::in_memory(Settings::default()),
            PrinterTransport::new(9100, Duration::from_secs(1), Duration::from_secs(1)),
            Some(chrono_tz::America::New_York),
        );
        let expected = Utc::now().with_timezone(&chrono_tz::America::New_York).naive_local();
        let diff = (service.now() - expected).num_seconds().abs();
        assert!(diff < 5);
    }

    #[test]
    fn test_report_wire_format() {
        let report = DispatchReport {
            tickets: vec![TicketDelivery {
                kind: TicketKind::Milkshake,
                printer: PrinterRole::Kitchen2,
                outcome: DeliveryOutcome::Delivered,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tickets"][0]["kind"], "MILKSHAKE");
        assert_eq!(json["tickets"][0]["printer"], "kitchen2");
        assert_eq!(json["tickets"][0]["status"], "delivered");
    }
}
