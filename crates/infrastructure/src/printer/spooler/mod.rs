//! Operating-system print spoolers
//!
//! - Windows: Win32 spooler API (`OpenPrinter` / `StartDocPrinter` RAW jobs)
//! - Elsewhere: the local CUPS scheduler over IPP (`CUPS-Get-Printers`, raw `Print-Job`)

#[cfg(not(windows))]
mod cups;
#[cfg(windows)]
mod win32;

#[cfg(not(windows))]
pub use cups::CupsSpooler;
#[cfg(windows)]
pub use win32::WindowsSpooler;

use domain::printer::SpoolerBackend;
use std::sync::Arc;

/// Spooler of the platform the station runs on
pub fn system_spooler() -> Arc<dyn SpoolerBackend> {
    #[cfg(windows)]
    {
        Arc::new(WindowsSpooler)
    }

    #[cfg(not(windows))]
    {
        Arc::new(CupsSpooler::default())
    }
}
