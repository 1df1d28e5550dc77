use async_trait::async_trait;
use domain::printer::{PrinterConnection, PrinterError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// In-memory printer that records every document it receives
///
/// Clones share the recorded documents and the failure switch, so a test can
/// keep one handle while the pipeline consumes another.
#[derive(Clone, Default)]
pub struct MockPrinter {
    pub connected: bool,
    pub documents: Arc<Mutex<Vec<Vec<u8>>>>,
    pub fail_connect: Arc<AtomicBool>,
}

impl MockPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent connection attempts fail (simulates an unreachable printer)
    pub fn set_unreachable(&self, unreachable: bool) {
        self.fail_connect.store(unreachable, Ordering::SeqCst);
    }

    pub async fn sent_documents(&self) -> Vec<Vec<u8>> {
        self.documents.lock().await.clone()
    }
}

#[async_trait]
impl PrinterConnection for MockPrinter {
    async fn connect(&mut self) -> Result<(), PrinterError> {
        if self.fail_connect.load(Ordering::SeqCst) {
            return Err(PrinterError::ConnectionFailed(
                "Simulated connection refused".to_string(),
            ));
        }
        self.connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), PrinterError> {
        self.connected = false;
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn send_commands(&mut self, commands: &[u8]) -> Result<(), PrinterError> {
        if !self.connected {
            return Err(PrinterError::NotConnected);
        }
        self.documents.lock().await.push(commands.to_vec());
        Ok(())
    }
}
