//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - The persisted settings document and its repository interface
//! - The access gate (admin password)
//! - Label numbers, label jobs and the ZPL template
//! - Printer connection and spooler interfaces, queue resolution
//!
//! Principles:
//! - No I/O; infrastructure implements the traits defined here
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod error;
pub mod gate;
pub mod label;
pub mod printer;
pub mod prompt;
pub mod settings;

// Re-export commonly used types
pub use error::DomainError;
pub use gate::{AccessGate, GateError};
pub use label::{ControlType, LabelFields, LabelJob, LabelNumber, RenderedDocument};
pub use printer::{PrintTarget, PrinterConnection, PrinterError};
pub use prompt::OperatorPrompt;
pub use settings::{SettingsDocument, SettingsPatch, SettingsRepository};
