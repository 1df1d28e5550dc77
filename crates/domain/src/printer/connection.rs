use super::PrintTarget;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrinterError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Not connected")]
    NotConnected,
    #[error("Printer not configured: {0}")]
    NotConfigured(String),
    #[error("No Zebra or ZDesigner printer queue found")]
    QueueNotFound,
    #[error("Spooler error: {0}")]
    Spooler(String),
}

/// One delivery of raw bytes to a printer
///
/// Connections are short-lived: the dispatcher connects, sends a single
/// document and disconnects for every label.
#[async_trait]
pub trait PrinterConnection: Send + Sync {
    /// Attempt to establish a connection to the printer
    async fn connect(&mut self) -> Result<(), PrinterError>;

    /// Close the connection
    async fn disconnect(&mut self) -> Result<(), PrinterError>;

    /// Check if the connection is currently active
    async fn is_connected(&self) -> bool;

    /// Send raw bytes (a rendered ZPL document) to the printer
    async fn send_commands(&mut self, commands: &[u8]) -> Result<(), PrinterError>;
}

/// Operating-system print spooler
///
/// `write_raw_job` must release every spooler handle it acquires before
/// returning, on success and on failure.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SpoolerBackend: Send + Sync {
    /// Names of local and connected print queues
    async fn list_queues(&self) -> Result<Vec<String>, PrinterError>;

    /// Submit `data` as a single untranslated (RAW) job
    async fn write_raw_job(
        &self,
        queue: &str,
        job_name: &str,
        data: &[u8],
    ) -> Result<(), PrinterError>;
}

/// Builds a fresh, unconnected printer connection for a target
pub trait TransportFactory: Send + Sync {
    fn connection_for(&self, target: &PrintTarget) -> Box<dyn PrinterConnection>;
}
