//! Item routing between the grill and the shake station

use serde::Serialize;

use super::types::OrderItem;
use crate::settings::PrinterRole;

/// Kind of ticket produced for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketKind {
    Kitchen,
    Milkshake,
    Receipt,
}

impl TicketKind {
    /// Headline printed at the top of kitchen tickets
    pub fn title(self) -> &'static str {
        match self {
            TicketKind::Kitchen => "KITCHEN",
            TicketKind::Milkshake => "MILKSHAKE",
            TicketKind::Receipt => "RECEIPT",
        }
    }

    /// Printer the ticket goes to
    pub fn role(self) -> PrinterRole {
        match self {
            TicketKind::Kitchen => PrinterRole::Kitchen1,
            TicketKind::Milkshake => PrinterRole::Kitchen2,
            TicketKind::Receipt => PrinterRole::Receipt,
        }
    }

    /// Printer label used in logs
    pub fn label(self) -> &'static str {
        match self {
            TicketKind::Kitchen => "Kitchen 1",
            TicketKind::Milkshake => "Kitchen 2",
            TicketKind::Receipt => "Receipt",
        }
    }
}

/// Items headed for one kitchen printer
#[derive(Debug)]
pub struct TicketGroup<'a> {
    pub kind: TicketKind,
    pub items: Vec<&'a OrderItem>,
}

/// Shake station items, matched on name and kitchen name
pub fn is_shake(item: &OrderItem) -> bool {
    let text = item.search_text();
    text.contains("shake") || text.contains("milkshake")
}

/// Partition items into the grill group and the shake group
///
/// Always returns `[Kitchen, Milkshake]`, possibly empty. Order within each
/// group follows the order of `items`.
pub fn route_items(items: &[OrderItem]) -> [TicketGroup<'_>; 2] {
    let (shakes, kitchen): (Vec<&OrderItem>, Vec<&OrderItem>) =
        items.iter().partition(|item| is_shake(item));

    [
        TicketGroup {
            kind: TicketKind::Kitchen,
            items: kitchen,
        },
        TicketGroup {
            kind: TicketKind::Milkshake,
            items: shakes,
        },
    ]
}
