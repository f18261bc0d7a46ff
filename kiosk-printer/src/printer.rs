//! Printer adapters for sending ESC/POS data
//!
//! Supports network printers (raw TCP, port 9100).

use crate::error::{PrintError, PrintResult};
use crate::escpos::DRAWER_PULSE;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{info, instrument};

/// Raw printing port used by thermal printers
pub const DEFAULT_PORT: u16 = 9100;

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ESC/POS data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Pulse the cash drawer wired to the printer's drawer-kick port
    async fn open_cash_drawer(&self) -> PrintResult<()>;
}

/// Network printer (TCP port 9100)
///
/// Most thermal printers support raw TCP printing on port 9100.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer from an IP and port
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}", host)))?;

        Ok(Self::with_addr(SocketAddr::new(ip, port)))
    }

    /// Create from an address string, either "192.168.50.3" or "192.168.50.3:9101"
    ///
    /// `default_port` applies when the string carries no port.
    pub fn from_address(address: &str, default_port: u16) -> PrintResult<Self> {
        let address = address.trim();
        if let Ok(addr) = address.parse::<SocketAddr>() {
            return Ok(Self::with_addr(addr));
        }
        Self::new(address, default_port)
    }

    fn with_addr(addr: SocketAddr) -> Self {
        Self {
            addr,
            timeout: Duration::from_secs(5),
        }
    }

    /// Set the overall deadline, measured from the connect attempt
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    async fn connect(&self) -> PrintResult<TcpStream> {
        TcpStream::connect(self.addr)
            .await
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))
    }

    async fn send_job(&self, data: &[u8]) -> PrintResult<()> {
        info!("Connecting to printer");
        let mut stream = self.connect().await?;

        info!("Connected, sending {} bytes", data.len());
        stream.write_all(data).await.map_err(|e| {
            PrintError::Io(std::io::Error::new(
                e.kind(),
                format!("Write failed: {}", e),
            ))
        })?;

        // Half-close: the printer sees end of job and drops the connection
        stream.shutdown().await?;

        let mut sink = [0u8; 256];
        while stream.read(&mut sink).await? > 0 {}

        Ok(())
    }

    async fn send_pulse(&self) -> PrintResult<()> {
        let mut stream = self.connect().await?;
        stream.write_all(&DRAWER_PULSE).await?;
        stream.shutdown().await?;
        Ok(())
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(self, data), fields(addr = %self.addr, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        tokio::time::timeout(self.timeout, self.send_job(data))
            .await
            .map_err(|_| PrintError::Timeout(format!("Print job timeout: {}", self.addr)))??;

        info!("Print job completed");
        Ok(())
    }

    #[instrument(skip(self), fields(addr = %self.addr))]
    async fn open_cash_drawer(&self) -> PrintResult<()> {
        tokio::time::timeout(self.timeout, self.send_pulse())
            .await
            .map_err(|_| PrintError::Timeout(format!("Drawer timeout: {}", self.addr)))??;

        info!("Drawer signal sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_network_printer_new() {
        let printer = NetworkPrinter::new("192.168.50.3", 9100).unwrap();
        assert_eq!(printer.addr().port(), 9100);
    }

    #[test]
    fn test_from_address_default_port() {
        let printer = NetworkPrinter::from_address("192.168.50.19", DEFAULT_PORT).unwrap();
        assert_eq!(printer.addr().to_string(), "192.168.50.19:9100");
    }

    #[test]
    fn test_from_address_explicit_port() {
        let printer = NetworkPrinter::from_address(" 127.0.0.1:9200 ", DEFAULT_PORT).unwrap();
        assert_eq!(printer.addr().port(), 9200);
    }

    #[test]
    fn test_invalid_addr() {
        assert!(NetworkPrinter::from_address("invalid", DEFAULT_PORT).is_err());
        assert!(NetworkPrinter::new("kitchen-printer.local", DEFAULT_PORT).is_err());
    }

    #[tokio::test]
    async fn test_print_delivers_payload() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let printer = NetworkPrinter::from_address(&addr.to_string(), DEFAULT_PORT).unwrap();
        printer.print(b"\x1b\x40hello\n").await.unwrap();

        assert_eq!(server.await.unwrap(), b"\x1b\x40hello\n".to_vec());
    }

    #[tokio::test]
    async fn test_print_times_out_when_printer_never_closes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let _server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            // Hold the connection open without reading to EOF
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let printer = NetworkPrinter::from_address(&addr.to_string(), DEFAULT_PORT)
            .unwrap()
            .with_timeout(Duration::from_millis(200));

        let err = printer.print(b"data").await.unwrap_err();
        assert!(matches!(err, PrintError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_open_cash_drawer_sends_pulse() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let printer = NetworkPrinter::from_address(&addr.to_string(), DEFAULT_PORT).unwrap();
        printer.open_cash_drawer().await.unwrap();

        assert_eq!(server.await.unwrap(), vec![0x1B, 0x70, 0x00, 0x19, 0x78]);
    }
}
