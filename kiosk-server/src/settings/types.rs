//! Settings record shared by the admin page and the print pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Modifier text (lowercase) → printed token
pub type Abbreviations = BTreeMap<String, String>;

/// Complete settings record
///
/// Sections missing from a stored or posted record fall back to the
/// bootstrap values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub printers: PrinterSettings,
    pub design: DesignSettings,
    pub abbreviations: Abbreviations,
}

impl Default for Settings {
    fn default() -> Self {
        let abbreviations = [
            ("slaw", "S"),
            ("onion", "O"),
            ("mayo", "M"),
            ("to go", "TO GO"),
            ("dine in", "HERE"),
            ("ketchup", "K"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            printers: PrinterSettings::default(),
            design: DesignSettings::default(),
            abbreviations,
        }
    }
}

/// Logical printer the shop routes tickets to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterRole {
    Kitchen1,
    Kitchen2,
    Receipt,
}

/// Printer network addresses ("ip" or "ip:port")
///
/// An absent address means the printer is not configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterSettings {
    #[serde(default)]
    pub kitchen1_ip: Option<String>,
    #[serde(default)]
    pub kitchen2_ip: Option<String>,
    #[serde(default)]
    pub receipt_ip: Option<String>,
}

impl PrinterSettings {
    /// Address configured for a role, if any
    pub fn address(&self, role: PrinterRole) -> Option<&str> {
        let addr = match role {
            PrinterRole::Kitchen1 => &self.kitchen1_ip,
            PrinterRole::Kitchen2 => &self.kitchen2_ip,
            PrinterRole::Receipt => &self.receipt_ip,
        };
        addr.as_deref()
    }
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            kitchen1_ip: Some("192.168.50.3".to_string()),
            kitchen2_ip: Some("192.168.50.19".to_string()),
            receipt_ip: Some("192.168.50.20".to_string()),
        }
    }
}

/// Receipt branding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    pub title: String,
    pub footer: String,
    pub show_date: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        Self {
            title: "THE COLLEGIATE GRILL".to_string(),
            footer: "Thank You!".to_string(),
            show_date: true,
        }
    }
}
