pub mod service;

pub use service::{SettingsEdit, SettingsService};
