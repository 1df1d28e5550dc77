//! Infrastructure layer - External integrations
//!
//! - JSON settings document on disk
//! - Station process configuration
//! - Printer transports (raw TCP, OS spooler)

pub mod config;
pub mod printer;
pub mod settings;

pub use config::AppConfig;
pub use printer::{MockPrinter, NetworkPrinter, SpoolerPrinter, SystemTransportFactory};
pub use settings::JsonSettingsStore;
