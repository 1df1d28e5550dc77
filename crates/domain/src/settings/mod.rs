mod document;
mod patch;
mod repository;

pub use document::SettingsDocument;
pub use patch::SettingsPatch;
pub use repository::SettingsRepository;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockSettingsRepository;

/// Keys of the persisted settings document.
///
/// These names are a file-format contract shared with existing installations.
pub mod keys {
    pub const PRINTER_HOST: &str = "ip";
    pub const PRINTER_PORT: &str = "port";
    pub const COMPANY_NAME: &str = "company_name";
    pub const RA: &str = "ra";
    pub const CONTROL_LABEL: &str = "control";
    pub const LABEL_NUMBER: &str = "label_number";
    pub const USE_LOCAL_SPOOLER: &str = "use_usb";
    pub const ADMIN_PASSWORD: &str = "admin_password";
    pub const PRINTER_QUEUE_NAME: &str = "printer_name";
}
