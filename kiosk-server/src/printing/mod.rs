//! Printing module - kitchen tickets, receipts, and printer delivery
//!
//! # Flow
//!
//! ```text
//! POST /print ─► PrintOrder ─► route_items ─┬─► KITCHEN ticket   ─► kitchen1 ─┐
//!                                           ├─► MILKSHAKE ticket ─► kitchen2 ─┼─► DispatchReport
//!                               total > 0 ──┴─► receipt          ─► receipt  ─┘
//! ```
//!
//! Deliveries run concurrently and settle independently.

mod abbreviation;
mod receipt;
mod renderer;
mod router;
mod service;
mod transport;
mod types;

pub use abbreviation::AbbreviationResolver;
pub use receipt::{ReceiptRenderer, money};
pub use renderer::{KitchenTicket, KitchenTicketRenderer};
pub use router::{TicketGroup, TicketKind, is_shake, route_items};
pub use service::{DispatchReport, PrintService, TicketDelivery};
pub use transport::{DeliveryOutcome, NULL_ROUTE, PrinterTransport};
pub use types::{Modifier, OrderItem, OrderType, PrintOrder};
