use domain::settings::{SettingsDocument, SettingsPatch, SettingsRepository};
use domain::{DomainError, LabelNumber};
use std::sync::Arc;
use tracing::debug;

/// Hands out label numbers from the persisted counter
///
/// The new counter is written through the repository before `next` returns,
/// so a number is never printed unless it has been persisted.
#[derive(Clone)]
pub struct LabelSequencer {
    repository: Arc<dyn SettingsRepository>,
}

impl LabelSequencer {
    pub fn new(repository: Arc<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Advance the counter in `settings`, persist it, and return the new number
    ///
    /// On error `settings` is left untouched.
    pub async fn next(&self, settings: &mut SettingsDocument) -> Result<LabelNumber, DomainError> {
        let next = settings.label_counter()?.successor();

        self.repository
            .save(SettingsPatch::new().label_number(next))
            .await?;

        settings.label_number = Some(next.to_string());
        debug!(label = %next, "Label number persisted");
        Ok(next)
    }
}
