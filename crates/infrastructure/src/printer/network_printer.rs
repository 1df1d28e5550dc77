use async_trait::async_trait;
use domain::printer::{PrinterConnection, PrinterError};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{error, info};

/// Raw TCP printer (ZPL over port 9100 or whatever the operator configured)
pub struct NetworkPrinter {
    host: String,
    port: String,
    stream: Option<TcpStream>,
    timeout: Option<Duration>,
}

impl NetworkPrinter {
    /// Host and port as entered by the operator; they are validated on connect
    pub fn new(host: &str, port: &str) -> Self {
        Self {
            host: host.trim().to_string(),
            port: port.trim().to_string(),
            stream: None,
            timeout: None,
        }
    }

    /// Bound the connect attempt instead of relying on the OS default
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn address(&self) -> Result<String, PrinterError> {
        if self.host.is_empty() {
            return Err(PrinterError::NotConfigured(
                "printer IP address is empty".to_string(),
            ));
        }
        let port: u16 = self.port.parse().map_err(|_| {
            PrinterError::NotConfigured(format!("invalid printer port '{}'", self.port))
        })?;
        Ok(format!("{}:{}", self.host, port))
    }
}

#[async_trait]
impl PrinterConnection for NetworkPrinter {
    async fn connect(&mut self) -> Result<(), PrinterError> {
        let address = self.address()?;
        info!("Connecting to printer at {}", address);

        let attempt = TcpStream::connect(&address);
        let result = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, attempt).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(PrinterError::ConnectionFailed(format!(
                        "{}: connection timed out",
                        address
                    )));
                }
            },
            None => attempt.await,
        };

        match result {
            Ok(stream) => {
                self.stream = Some(stream);
                Ok(())
            }
            Err(e) => Err(PrinterError::ConnectionFailed(format!("{}: {}", address, e))),
        }
    }

    async fn disconnect(&mut self) -> Result<(), PrinterError> {
        if let Some(mut stream) = self.stream.take() {
            let _ = stream.shutdown().await;
        }
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    async fn send_commands(&mut self, commands: &[u8]) -> Result<(), PrinterError> {
        if let Some(stream) = &mut self.stream {
            match stream.write_all(commands).await {
                Ok(_) => {
                    let _ = stream.flush().await;
                    Ok(())
                }
                Err(e) => {
                    error!("Failed to write to printer: {}", e);
                    self.stream = None; // Invalidate connection
                    Err(PrinterError::WriteFailed(e.to_string()))
                }
            }
        } else {
            Err(PrinterError::NotConnected)
        }
    }
}
