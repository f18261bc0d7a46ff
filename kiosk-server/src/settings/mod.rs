//! Settings module - printer addresses, receipt branding, modifier abbreviations

mod store;
mod types;

pub use store::{SettingsError, SettingsResult, SettingsStore};
pub use types::{Abbreviations, DesignSettings, PrinterRole, PrinterSettings, Settings};
