//! # kiosk-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building for Epson-style and Star-style firmware
//! - Latin-1 encoding that leaves control codes untouched
//! - Network printing (TCP port 9100)
//! - Cash drawer pulse through the printer's drawer-kick port
//!
//! Business logic (WHAT to print) stays in `kiosk-server`:
//! - Kitchen ticket and receipt layouts
//! - Routing items to printers
//!
//! ## Example
//!
//! ```ignore
//! use kiosk_printer::{Dialect, EscPosBuilder, NetworkPrinter, Printer};
//!
//! let mut builder = EscPosBuilder::new(Dialect::Epson, 32);
//! builder.center();
//! builder.bold();
//! builder.line("THE COLLEGIATE GRILL");
//! builder.bold_off();
//! builder.sep_single();
//! builder.cut();
//!
//! let printer = NetworkPrinter::new("192.168.50.20", 9100)?;
//! printer.print(&builder.build()).await?;
//! ```

mod encoding;
mod error;
mod escpos;
mod printer;

// Re-exports
pub use encoding::convert_to_latin1;
pub use error::{PrintError, PrintResult};
pub use escpos::{DRAWER_PULSE, Dialect, EscPosBuilder};
pub use printer::{DEFAULT_PORT, NetworkPrinter, Printer};
