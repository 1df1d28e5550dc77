use anyhow::Result;
use domain::settings::{SettingsDocument, SettingsPatch, SettingsRepository};
use domain::LabelNumber;
use std::sync::Arc;
use tracing::info;

/// Changes made in the settings form; `None` leaves a field as stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsEdit {
    pub printer_host: Option<String>,
    pub printer_port: Option<String>,
    pub company_name: Option<String>,
    pub ra: Option<String>,
    pub control_label: Option<String>,
    /// Counter value to continue from; the next label gets this plus one
    pub label_number: Option<String>,
    pub use_local_spooler: Option<bool>,
    pub printer_queue_name: Option<String>,
}

impl SettingsEdit {
    fn into_patch(self) -> Result<SettingsPatch> {
        let mut patch = SettingsPatch::new();

        if let Some(host) = self.printer_host {
            patch = patch.printer_host(host.trim());
        }
        if let Some(port) = self.printer_port {
            patch = patch.printer_port(port.trim());
        }
        if let Some(name) = self.company_name {
            patch = patch.company_name(&name);
        }
        if let Some(ra) = self.ra {
            patch = patch.ra(&ra);
        }
        if let Some(control) = self.control_label {
            patch = patch.control_label(&control);
        }
        if let Some(raw) = self.label_number {
            patch = patch.label_number(LabelNumber::parse(&raw)?);
        }
        if let Some(enabled) = self.use_local_spooler {
            patch = patch.use_local_spooler(enabled);
        }
        if let Some(queue) = self.printer_queue_name {
            patch = patch.printer_queue_name(queue.trim());
        }

        Ok(patch)
    }
}

/// Settings edits and admin password changes
#[derive(Clone)]
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    pub async fn current(&self) -> SettingsDocument {
        self.repository.load().await
    }

    /// Merge the edit into the stored document and return the reloaded result
    ///
    /// A label number that is not an integer rejects the whole edit.
    pub async fn apply(&self, edit: SettingsEdit) -> Result<SettingsDocument> {
        let patch = edit.into_patch()?;
        if !patch.is_empty() {
            self.repository.save(patch).await?;
            info!("✅ Settings updated");
        }
        Ok(self.repository.load().await)
    }

    /// Verify the current password (when one is set) and store the new one
    ///
    /// Errors carry a [`domain::GateError`] for rejected input.
    pub async fn change_password(
        &self,
        current: &str,
        new_password: &str,
        confirmation: &str,
    ) -> Result<()> {
        let gate = self.repository.load().await.access_gate();
        let secret = gate.change_secret(current, new_password, confirmation)?;

        self.repository
            .save(SettingsPatch::new().admin_password(&secret))
            .await?;

        if secret.is_empty() {
            info!("🔓 Admin password removed");
        } else {
            info!("🔒 Admin password changed");
        }
        Ok(())
    }
}
