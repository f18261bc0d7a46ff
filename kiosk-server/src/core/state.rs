use crate::core::Config;
use crate::core::error::Result;
use crate::printing::{PrintService, PrinterTransport};
use crate::settings::SettingsStore;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct ServerState {
    pub settings: SettingsStore,
    pub print_service: PrintService,
}

impl ServerState {
    /// Open the settings file and wire up the print service
    pub async fn initialize(config: &Config) -> Result<Self> {
        let settings = SettingsStore::open(&config.settings_path).await?;
        tracing::info!(path = %config.settings_path, "Settings loaded");
        Ok(Self::with_settings(config, settings))
    }

    /// Build state around an already opened settings store
    pub fn with_settings(config: &Config, settings: SettingsStore) -> Self {
        let transport = PrinterTransport::new(
            config.printer_port,
            config.print_timeout(),
            config.drawer_timeout(),
        );
        let print_service = PrintService::new(settings.clone(), transport, config.timezone);

        Self {
            settings,
            print_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::{DeliveryOutcome, NULL_ROUTE, PrintOrder, TicketKind};
    use crate::settings::{PrinterSettings, Settings};

    #[tokio::test]
    async fn test_print_service_follows_settings_updates() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            settings_path: dir.path().join("config.json").to_string_lossy().into_owned(),
            ..Config::default()
        };

        let state = ServerState::initialize(&config).await.unwrap();
        assert_eq!(state.settings.snapshot(), Settings::default());

        let updated = Settings {
            printers: PrinterSettings {
                kitchen1_ip: None,
                kitchen2_ip: None,
                receipt_ip: Some(NULL_ROUTE.to_string()),
            },
            ..Settings::default()
        };
        state.settings.replace(updated).await.unwrap();

        let order: PrintOrder = serde_json::from_str(
            r#"{"items": [{"name": "Burger"}], "totalAmount": 5}"#,
        )
        .unwrap();
        let report = state.print_service.dispatch(&order).await;

        assert_eq!(report.outcome(TicketKind::Kitchen), Some(&DeliveryOutcome::Skipped));
        assert_eq!(report.outcome(TicketKind::Receipt), Some(&DeliveryOutcome::Skipped));
    }
}
