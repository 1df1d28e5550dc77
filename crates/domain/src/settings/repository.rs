use super::{SettingsDocument, SettingsPatch};
use crate::DomainError;
use async_trait::async_trait;

/// Persistence contract for the settings document
///
/// `load` never fails: a missing or unreadable document yields defaults.
/// `save` merges the patch into the document currently on disk and replaces
/// the whole file, so keys not named in the patch survive untouched.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the current document, falling back to defaults
    async fn load(&self) -> SettingsDocument;

    /// Overlay `updates` onto the stored document and persist it
    async fn save(&self, updates: SettingsPatch) -> Result<(), DomainError>;
}
