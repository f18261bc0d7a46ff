//! Kitchen ticket renderer
//!
//! Renders kitchen tickets for the Star line-mode printers in big font.

use chrono::{NaiveDateTime, Timelike};
use kiosk_printer::{Dialect, EscPosBuilder};

use super::abbreviation::AbbreviationResolver;
use super::types::OrderItem;

/// Big font on 80mm paper
pub const KITCHEN_WIDTH: usize = 16;

/// Order label printed when the order has no table
const NO_TABLE_LABEL: &str = "00";

/// One kitchen ticket to render
pub struct KitchenTicket<'a> {
    /// "KITCHEN" or "MILKSHAKE"
    pub title: &'a str,
    /// Table label, None for to-go
    pub order_label: Option<&'a str>,
    pub items: &'a [&'a OrderItem],
    pub printed_at: NaiveDateTime,
}

/// Kitchen ticket renderer
pub struct KitchenTicketRenderer {
    width: usize,
}

impl KitchenTicketRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render a kitchen ticket to ESC/POS bytes
    pub fn render(&self, ticket: &KitchenTicket<'_>, resolver: &AbbreviationResolver<'_>) -> Vec<u8> {
        let mut b = EscPosBuilder::new(Dialect::Star, self.width);
        let label = ticket.order_label.unwrap_or(NO_TABLE_LABEL);

        self.render_header(&mut b, ticket, label);

        for item in ticket.items {
            self.render_item(&mut b, item, resolver);
        }

        // Footer
        b.sep_single();
        b.line(&format!("ID: {}", label));
        b.blank_lines(3);
        b.cut();

        b.build()
    }

    fn render_header(&self, b: &mut EscPosBuilder, ticket: &KitchenTicket<'_>, label: &str) {
        b.center();
        b.black();
        b.big_font();
        b.line(ticket.title);
        b.line(&format!("ORDER: {}", label));

        b.red();
        let service = if ticket.order_label.is_some() {
            "Dine In"
        } else {
            "To Go"
        };
        b.line(service);

        b.left();
        b.black();
        b.line(&format_ticket_time(ticket.printed_at));
        b.line("Server: Kiosk");
        b.sep_single();
    }

    /// Item line: "2 Burger", modifiers right-aligned in red below it
    fn render_item(&self, b: &mut EscPosBuilder, item: &OrderItem, resolver: &AbbreviationResolver<'_>) {
        b.left();
        b.black();
        if item.quantity > 1 {
            b.line(&format!("{} {}", item.quantity, item.kitchen_name()));
        } else {
            b.line(item.kitchen_name());
        }

        if item.modifiers.is_empty() {
            return;
        }

        b.right();
        b.red();
        for modifier in &item.modifiers {
            b.line(&resolver.resolve(&modifier.name));
        }
        b.left();
        b.black();
    }
}

impl Default for KitchenTicketRenderer {
    fn default() -> Self {
        Self::new(KITCHEN_WIDTH)
    }
}

/// "05-Mar-2025 02:15P"
fn format_ticket_time(at: NaiveDateTime) -> String {
    let meridiem = if at.hour() < 12 { 'A' } else { 'P' };
    format!("{}{}", at.format("%d-%b-%Y %I:%M"), meridiem)
}
