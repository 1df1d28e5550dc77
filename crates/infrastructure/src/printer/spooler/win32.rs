use async_trait::async_trait;
use core::ffi::c_void;
use domain::printer::{PrinterError, SpoolerBackend};
use tracing::debug;
use windows::Win32::Graphics::Printing::{
    ClosePrinter, DOC_INFO_1W, EndDocPrinter, EndPagePrinter, EnumPrintersW, OpenPrinterW,
    PRINTER_ENUM_CONNECTIONS, PRINTER_ENUM_LOCAL, PRINTER_HANDLE, PRINTER_INFO_5W,
    StartDocPrinterW, StartPagePrinter, WritePrinter,
};
use windows::core::{PCWSTR, PWSTR};

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Open queue handle, closed on drop
struct QueueHandle(PRINTER_HANDLE);

impl QueueHandle {
    fn open(name: &str) -> Result<Self, PrinterError> {
        let name_w = to_wide(name);
        let mut handle = PRINTER_HANDLE::default();
        unsafe { OpenPrinterW(PCWSTR::from_raw(name_w.as_ptr()), &mut handle, None) }
            .map_err(|e| PrinterError::Spooler(format!("OpenPrinter '{}' failed: {}", name, e)))?;
        Ok(Self(handle))
    }
}

impl Drop for QueueHandle {
    fn drop(&mut self) {
        unsafe {
            let _ = ClosePrinter(self.0);
        }
    }
}

/// Win32 print spooler
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsSpooler;

// The Win32 calls block; the print pipeline is strictly sequential
#[async_trait]
impl SpoolerBackend for WindowsSpooler {
    async fn list_queues(&self) -> Result<Vec<String>, PrinterError> {
        let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
        let mut needed: u32 = 0;
        let mut returned: u32 = 0;

        unsafe {
            let _ = EnumPrintersW(flags, None, 5, None, &mut needed, &mut returned);

            if needed == 0 {
                return Ok(Vec::new());
            }

            let mut buf: Vec<u8> = vec![0; needed as usize];
            EnumPrintersW(
                flags,
                None,
                5,
                Some(buf.as_mut_slice()),
                &mut needed,
                &mut returned,
            )
            .map_err(|e| PrinterError::Spooler(format!("EnumPrinters failed: {}", e)))?;

            let ptr = buf.as_ptr() as *const PRINTER_INFO_5W;
            let infos = std::slice::from_raw_parts(ptr, returned as usize);

            Ok(infos
                .iter()
                .filter(|info| !info.pPrinterName.is_null())
                .filter_map(|info| PWSTR(info.pPrinterName.0).to_string().ok())
                .collect())
        }
    }

    async fn write_raw_job(
        &self,
        queue: &str,
        job_name: &str,
        data: &[u8],
    ) -> Result<(), PrinterError> {
        debug!(queue, bytes = data.len(), "Submitting raw job to Windows spooler");

        let handle = QueueHandle::open(queue)?;

        let doc_name_w = to_wide(job_name);
        let datatype_w = to_wide("RAW");
        let doc_info = DOC_INFO_1W {
            pDocName: PWSTR(doc_name_w.as_ptr() as *mut _),
            pOutputFile: PWSTR::null(),
            pDatatype: PWSTR(datatype_w.as_ptr() as *mut _),
        };

        unsafe {
            if StartDocPrinterW(handle.0, 1, &doc_info as *const DOC_INFO_1W) == 0 {
                return Err(PrinterError::Spooler("StartDocPrinter failed".to_string()));
            }

            if !StartPagePrinter(handle.0).as_bool() {
                let _ = EndDocPrinter(handle.0);
                return Err(PrinterError::Spooler("StartPagePrinter failed".to_string()));
            }

            let mut written: u32 = 0;
            let ok = WritePrinter(
                handle.0,
                data.as_ptr() as *const c_void,
                data.len() as u32,
                &mut written,
            );

            let _ = EndPagePrinter(handle.0);
            let _ = EndDocPrinter(handle.0);

            if !ok.as_bool() {
                return Err(PrinterError::WriteFailed("WritePrinter failed".to_string()));
            }
            if written as usize != data.len() {
                return Err(PrinterError::WriteFailed(format!(
                    "Incomplete write: {} of {} bytes",
                    written,
                    data.len()
                )));
            }
        }

        Ok(())
    }
}
