use async_trait::async_trait;
use domain::printer::{PrinterConnection, PrinterError, SpoolerBackend, resolve_queue};
use std::sync::Arc;
use tracing::{info, warn};

/// Printer reached through a local print queue
///
/// `connect` resolves the queue (explicit name or vendor auto-detection);
/// `send_commands` submits one RAW job. The backend scopes the OS handle to
/// that single call.
pub struct SpoolerPrinter {
    backend: Arc<dyn SpoolerBackend>,
    queue_override: Option<String>,
    job_name: String,
    queue: Option<String>,
}

impl SpoolerPrinter {
    pub fn new(
        backend: Arc<dyn SpoolerBackend>,
        queue_override: Option<String>,
        job_name: &str,
    ) -> Self {
        Self {
            backend,
            queue_override,
            job_name: job_name.to_string(),
            queue: None,
        }
    }

    /// Queue chosen by the last successful `connect`
    pub fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }
}

#[async_trait]
impl PrinterConnection for SpoolerPrinter {
    async fn connect(&mut self) -> Result<(), PrinterError> {
        // An explicit queue name needs no enumeration
        let available = match self.queue_override.as_deref() {
            Some(name) if !name.is_empty() => Vec::new(),
            _ => self.backend.list_queues().await?,
        };

        match resolve_queue(self.queue_override.as_deref(), &available) {
            Some(queue) => {
                info!(queue = %queue, "Using print queue");
                self.queue = Some(queue);
                Ok(())
            }
            None => {
                warn!(available = ?available, "No label printer queue found");
                Err(PrinterError::QueueNotFound)
            }
        }
    }

    async fn disconnect(&mut self) -> Result<(), PrinterError> {
        self.queue = None;
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.queue.is_some()
    }

    async fn send_commands(&mut self, commands: &[u8]) -> Result<(), PrinterError> {
        let Some(queue) = self.queue.as_deref() else {
            return Err(PrinterError::NotConnected);
        };
        self.backend
            .write_raw_job(queue, &self.job_name, commands)
            .await
    }
}
