use super::{NetworkPrinter, SpoolerPrinter};
use domain::printer::{PrintTarget, PrinterConnection, SpoolerBackend, TransportFactory};
use std::sync::Arc;
use std::time::Duration;

/// Production transports: raw TCP or the platform spooler
pub struct SystemTransportFactory {
    spooler: Arc<dyn SpoolerBackend>,
    connect_timeout: Option<Duration>,
    job_name: String,
}

impl SystemTransportFactory {
    pub fn new(
        spooler: Arc<dyn SpoolerBackend>,
        connect_timeout: Option<Duration>,
        job_name: &str,
    ) -> Self {
        Self {
            spooler,
            connect_timeout,
            job_name: job_name.to_string(),
        }
    }
}

impl TransportFactory for SystemTransportFactory {
    fn connection_for(&self, target: &PrintTarget) -> Box<dyn PrinterConnection> {
        match target {
            PrintTarget::Network { host, port } => {
                Box::new(NetworkPrinter::new(host, port).with_timeout(self.connect_timeout))
            }
            PrintTarget::LocalQueue { queue_override } => Box::new(SpoolerPrinter::new(
                self.spooler.clone(),
                queue_override.clone(),
                &self.job_name,
            )),
        }
    }
}
