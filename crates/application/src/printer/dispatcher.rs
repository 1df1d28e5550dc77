use domain::printer::{PrintTarget, PrinterError, TransportFactory};
use domain::RenderedDocument;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Sends one rendered document per call over a fresh connection
///
/// No retry: a failure is returned to the caller as-is.
#[derive(Clone)]
pub struct TransportDispatcher {
    factory: Arc<dyn TransportFactory>,
}

impl TransportDispatcher {
    pub fn new(factory: Arc<dyn TransportFactory>) -> Self {
        Self { factory }
    }

    pub async fn dispatch(
        &self,
        target: &PrintTarget,
        document: &RenderedDocument,
    ) -> Result<(), PrinterError> {
        let mut connection = self.factory.connection_for(target);

        if let Err(e) = connection.connect().await {
            error!(printer = %target, "❌ Printer connection failed: {}", e);
            return Err(e);
        }

        let sent = connection.send_commands(document.as_bytes()).await;

        // Released on every path, including a failed write
        if let Err(e) = connection.disconnect().await {
            warn!(printer = %target, "Printer disconnect failed: {}", e);
        }

        match &sent {
            Ok(()) => info!(printer = %target, bytes = document.len(), "✅ Label sent"),
            Err(e) => error!(printer = %target, "❌ Failed to print: {}", e),
        }
        sent
    }
}
