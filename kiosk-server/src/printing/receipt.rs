//! Customer receipt renderer (Epson, 32 columns)

use kiosk_printer::{Dialect, EscPosBuilder};
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{OrderItem, OrderType, PrintOrder};
use crate::settings::DesignSettings;

pub const RECEIPT_WIDTH: usize = 32;

/// Receipt renderer
pub struct ReceiptRenderer<'a> {
    order: &'a PrintOrder,
    design: &'a DesignSettings,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(order: &'a PrintOrder, design: &'a DesignSettings) -> Self {
        Self {
            order,
            design,
            width: RECEIPT_WIDTH,
        }
    }

    /// Render the receipt to ESC/POS bytes
    pub fn render(&self) -> Vec<u8> {
        let mut b = EscPosBuilder::new(Dialect::Epson, self.width);

        self.render_header(&mut b);
        for item in &self.order.items {
            self.render_item(&mut b, item);
        }
        self.render_totals(&mut b);

        // Footer
        b.center();
        b.blank_lines(2);
        b.line(&self.design.footer);
        b.blank_lines(4);
        b.cut();

        b.build()
    }

    fn render_header(&self, b: &mut EscPosBuilder) {
        b.center();
        b.bold();
        b.line(&self.design.title);
        b.bold_off();
        b.normal_size();
        b.line("Customer Receipt");

        b.double_height();
        let service = match self.order.order_type {
            OrderType::DineIn => "Dine In",
            OrderType::ToGo => "To Go",
        };
        b.line(&format!("[ {} ]", service));
        b.normal_size();
        if self.design.show_date {
            b.line(&format!("Date: {}", self.order.date));
        }
        b.sep_single();

        b.left();
        b.double_height();
        b.bold();
        match self.order.table_number.as_deref() {
            Some(table) => b.line(&format!("Order #: {}", table)),
            None => b.line("Order Type: To Go"),
        };
        b.normal_size();
        b.bold_off();
        b.sep_single();
    }

    fn render_item(&self, b: &mut EscPosBuilder, item: &OrderItem) {
        b.bold();
        b.text(&format!("{} {}", item.quantity, item.name));
        b.bold_off();
        b.newline();

        for modifier in &item.modifiers {
            b.line(&format!("   + {} (${})", modifier.name, money(modifier.price)));
        }

        b.right();
        b.line(&format!("${}", money(item.total_price)));
        b.left();
    }

    fn render_totals(&self, b: &mut EscPosBuilder) {
        b.sep_single();
        b.right();
        b.line(&format!("Subtotal: ${}", money(self.order.subtotal)));
        b.line(&format!("Tax: ${}", money(self.order.tax)));

        if self.order.tip_amount > Decimal::ZERO {
            b.bold();
            b.line(&format!("Tip: ${}", money(self.order.tip_amount)));
            b.bold_off();
        }

        b.sep_single();
        b.double_height();
        b.bold();
        b.line(&format!("TOTAL: ${}", money(self.order.total_amount)));
        b.normal_size();
        b.bold_off();
    }
}

/// Two decimals, half away from zero
pub fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(json: &str) -> PrintOrder {
        serde_json::from_str(json).unwrap()
    }

    fn render(order: &PrintOrder) -> Vec<u8> {
        let design = DesignSettings::default();
        ReceiptRenderer::new(order, &design).render()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_money() {
        assert_eq!(money("10.8".parse().unwrap()), "10.80");
        assert_eq!(money(Decimal::ZERO), "0.00");
        assert_eq!(money("2.005".parse().unwrap()), "2.01");
        assert_eq!(money("7".parse().unwrap()), "7.00");
    }

    #[test]
    fn test_header_layout() {
        let data = render(&order(
            r#"{"tableNumber": "12", "orderType": "dine_in", "date": "3/5/2025", "totalAmount": 1}"#,
        ));

        let mut expected = vec![0x1B, 0x40, 0x1B, 0x61, 0x01, 0x1B, 0x45, 0x01];
        expected.extend_from_slice(b"THE COLLEGIATE GRILL\n");
        expected.extend_from_slice(&[0x1B, 0x45, 0x00, 0x1B, 0x21, 0x00]);
        expected.extend_from_slice(b"Customer Receipt\n");
        expected.extend_from_slice(&[0x1B, 0x21, 0x10]);
        expected.extend_from_slice(b"[ Dine In ]\n");
        expected.extend_from_slice(&[0x1B, 0x21, 0x00]);
        expected.extend_from_slice(b"Date: 3/5/2025\n");
        expected.extend_from_slice(&[b'-'; 32]);
        expected.push(b'\n');
        expected.extend_from_slice(&[0x1B, 0x61, 0x00, 0x1B, 0x21, 0x10, 0x1B, 0x45, 0x01]);
        expected.extend_from_slice(b"Order #: 12\n");

        assert!(data.starts_with(&expected));
    }

    #[test]
    fn test_to_go_header() {
        let data = render(&order(r#"{"tableNumber": "To Go", "totalAmount": 5}"#));
        assert!(contains(&data, b"[ To Go ]\n"));
        assert!(contains(&data, b"Order Type: To Go\n"));
        assert!(!contains(&data, b"Order #"));
    }

    #[test]
    fn test_item_lines_use_plain_name() {
        let data = render(&order(
            r#"{"items": [{"name": "Cheeseburger", "pos_name": "CHZ", "quantity": 1,
                           "totalPrice": 6.5,
                           "selectedModifiers": [{"name": "Add Bacon", "price": 1.5}, "Slaw"]}],
                "totalAmount": 8}"#,
        ));

        let mut expected = vec![0x1B, 0x45, 0x01];
        expected.extend_from_slice(b"1 Cheeseburger");
        expected.extend_from_slice(&[0x1B, 0x45, 0x00]);
        expected.extend_from_slice(b"\n   + Add Bacon ($1.50)\n   + Slaw ($0.00)\n");
        expected.extend_from_slice(&[0x1B, 0x61, 0x02]);
        expected.extend_from_slice(b"$6.50\n");
        expected.extend_from_slice(&[0x1B, 0x61, 0x00]);

        assert!(contains(&data, &expected));
        assert!(!contains(&data, b"CHZ"));
    }

    #[test]
    fn test_totals_with_tip() {
        let data = render(&order(
            r#"{"subtotal": 10, "tax": 0.8, "tipAmount": 2, "totalAmount": 12.8}"#,
        ));
        assert!(contains(&data, b"Subtotal: $10.00\nTax: $0.80\n"));
        assert!(contains(&data, b"\x1b\x45\x01Tip: $2.00\n\x1b\x45\x00"));
        assert!(contains(&data, b"\x1b\x21\x10\x1b\x45\x01TOTAL: $12.80\n"));
    }

    #[test]
    fn test_no_tip_line_when_zero() {
        let data = render(&order(r#"{"subtotal": 10, "tax": 0.8, "totalAmount": 10.8}"#));
        assert!(!contains(&data, b"Tip:"));
        assert!(contains(&data, b"TOTAL: $10.80\n"));
    }

    #[test]
    fn test_footer_and_cut() {
        let data = render(&order(r#"{"totalAmount": 1}"#));
        assert!(data.ends_with(b"\x1b\x61\x01\n\nThank You!\n\n\n\n\n\x1d\x56\x42\x00"));
    }

    #[test]
    fn test_date_line_can_be_hidden() {
        let o = order(r#"{"date": "3/5/2025", "totalAmount": 1}"#);
        let design = DesignSettings {
            show_date: false,
            ..DesignSettings::default()
        };
        let data = ReceiptRenderer::new(&o, &design).render();
        assert!(!contains(&data, b"Date:"));
    }
}
