use async_trait::async_trait;
use domain::printer::{PrinterError, SpoolerBackend};
use ipp::prelude::*;
use std::io::Cursor;
use tracing::{debug, error, info};

/// Document format CUPS passes to the queue without filtering
const RAW_FORMAT: &str = "application/vnd.cups-raw";

/// Local CUPS scheduler, spoken to over IPP
#[derive(Debug, Clone)]
pub struct CupsSpooler {
    /// `host:port` of the scheduler
    server: String,
}

impl Default for CupsSpooler {
    fn default() -> Self {
        Self::new("localhost:631")
    }
}

impl CupsSpooler {
    pub fn new(server: &str) -> Self {
        Self {
            server: server.to_string(),
        }
    }

    pub fn scheduler_uri(&self) -> String {
        format!("ipp://{}/", self.server)
    }

    pub fn queue_uri(&self, queue: &str) -> String {
        format!("ipp://{}/printers/{}", self.server, queue)
    }
}

fn parse_uri(uri: &str) -> Result<Uri, PrinterError> {
    uri.parse()
        .map_err(|e| PrinterError::Spooler(format!("invalid URI '{uri}': {e}")))
}

#[async_trait]
impl SpoolerBackend for CupsSpooler {
    async fn list_queues(&self) -> Result<Vec<String>, PrinterError> {
        let uri = parse_uri(&self.scheduler_uri())?;
        let client = AsyncIppClient::new(uri);

        debug!(server = %self.server, "sending CUPS-Get-Printers");
        let response = client
            .send(IppOperationBuilder::cups().get_printers())
            .await
            .map_err(|e| PrinterError::Spooler(format!("CUPS-Get-Printers: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "CUPS-Get-Printers failed");
            return Err(PrinterError::Spooler(format!(
                "CUPS-Get-Printers returned status {code:?}"
            )));
        }

        Ok(response
            .attributes()
            .groups_of(DelimiterTag::PrinterAttributes)
            .filter_map(|group| group.attributes().get("printer-name"))
            .map(|attr| attr.value().to_string())
            .collect())
    }

    async fn write_raw_job(
        &self,
        queue: &str,
        job_name: &str,
        data: &[u8],
    ) -> Result<(), PrinterError> {
        let uri = parse_uri(&self.queue_uri(queue))?;
        let payload = IppPayload::new(Cursor::new(data.to_vec()));

        let operation = IppOperationBuilder::print_job(uri.clone(), payload)
            .job_title(job_name)
            .document_format(RAW_FORMAT)
            .build();
        let client = AsyncIppClient::new(uri);

        info!(queue, bytes = data.len(), "sending Print-Job to CUPS");
        let response = client
            .send(operation)
            .await
            .map_err(|e| PrinterError::Spooler(format!("Print-Job to '{queue}': {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(queue, status = ?code, "Print-Job failed");
            return Err(PrinterError::Spooler(format!(
                "Print-Job to '{queue}' returned status {code:?}"
            )));
        }
        Ok(())
    }
}
