//! Kiosk print server
//!
//! Receives orders from the self-order kiosk and prints them on the shop's
//! network thermal printers:
//!
//! - **KITCHEN** ticket on the grill printer (kitchen1)
//! - **MILKSHAKE** ticket on the shake station printer (kitchen2)
//! - customer **receipt** on the front counter printer
//!
//! # Module structure
//!
//! ```text
//! kiosk-server/
//! ├── core/        # Config, state, HTTP server
//! ├── api/         # Axum routes and handlers
//! ├── printing/    # Order model, routing, ticket rendering, delivery
//! ├── settings/    # JSON settings store
//! └── utils/       # Errors, response envelope, logging
//! ```

pub mod api;
pub mod core;
pub mod printing;
pub mod settings;
pub mod utils;

pub use self::core::{Config, Server, ServerError, ServerState, build_app};
pub use utils::{AppError, AppResponse, AppResult};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    utils::logger::init_logger(&config.log_level, config.log_dir.as_deref());
    config
}

/// Print the startup banner
pub fn print_banner() {
    println!();
    println!("  ┌──────────────────────────────────┐");
    println!("  │        KIOSK PRINT SERVER        │");
    println!("  │        v{:<25}│", env!("CARGO_PKG_VERSION"));
    println!("  └──────────────────────────────────┘");
    println!();
}
