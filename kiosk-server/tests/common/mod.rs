//! Shared helpers: fake TCP printers and ready-made state

#![allow(dead_code)]

use std::time::Duration;

use kiosk_server::Config;
use kiosk_server::ServerState;
use kiosk_server::settings::{Settings, SettingsStore};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Printer that accepts one job and returns the received bytes
pub async fn fake_printer() -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    (addr, handle)
}

/// Printer that accepts the connection and never finishes the job
pub async fn stalled_printer() -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    (addr, handle)
}

/// Address nothing listens on
pub async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);
    addr
}

pub fn settings_with(kitchen1: Option<&str>, kitchen2: Option<&str>, receipt: Option<&str>) -> Settings {
    let mut settings = Settings::default();
    settings.printers.kitchen1_ip = kitchen1.map(str::to_string);
    settings.printers.kitchen2_ip = kitchen2.map(str::to_string);
    settings.printers.receipt_ip = receipt.map(str::to_string);
    settings
}

pub fn test_config() -> Config {
    Config {
        print_timeout_ms: 500,
        drawer_timeout_ms: 500,
        ..Config::default()
    }
}

pub fn state_with(settings: Settings) -> ServerState {
    ServerState::with_settings(&test_config(), SettingsStore::in_memory(settings))
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
