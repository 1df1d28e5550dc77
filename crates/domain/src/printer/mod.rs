mod connection;
mod queue;
mod target;

pub use connection::{PrinterConnection, PrinterError, SpoolerBackend, TransportFactory};
pub use queue::{VENDOR_HINTS, resolve_queue};
pub use target::PrintTarget;

#[cfg(any(test, feature = "mocks"))]
pub use connection::MockSpoolerBackend;
