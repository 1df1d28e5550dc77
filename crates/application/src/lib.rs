//! Application layer - Use cases and business workflows
//!
//! - Label sequencing on top of the settings repository
//! - Print orchestration (gate, number, render, dispatch)
//! - Settings edits and password changes

pub mod label;
pub mod printer;
pub mod settings;

pub use label::LabelSequencer;
pub use printer::{PrintOrchestrator, PrintReport, PrintRequest, TransportDispatcher};
pub use settings::{SettingsEdit, SettingsService};
