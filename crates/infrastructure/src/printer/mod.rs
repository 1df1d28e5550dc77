pub mod factory;
pub mod mock_printer;
pub mod network_printer;
pub mod spooler;
pub mod spooler_printer;

pub use factory::SystemTransportFactory;
pub use mock_printer::MockPrinter;
pub use network_printer::NetworkPrinter;
pub use spooler::system_spooler;
pub use spooler_printer::SpoolerPrinter;
