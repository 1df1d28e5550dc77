use async_trait::async_trait;
use domain::settings::{SettingsDocument, SettingsPatch, SettingsRepository};
use domain::DomainError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Settings document kept as a pretty-printed JSON file
///
/// Every save re-reads the file, overlays the patch and replaces the file
/// through a temporary sibling plus rename, so readers never see a
/// half-written document.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw JSON object on disk
    ///
    /// `Ok(None)` when the file is absent or does not hold a JSON object.
    /// Any other read failure is returned, so a save never replaces a
    /// document it could not see.
    async fn read_object(&self) -> std::io::Result<Option<Map<String, Value>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "Settings file not found, using defaults");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => {
                warn!(path = ?self.path, "Settings file is not a JSON object, ignoring it");
                Ok(None)
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Error loading settings");
                Ok(None)
            }
        }
    }

    fn encode(map: &Map<String, Value>) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        map.serialize(&mut serializer)?;
        Ok(out)
    }

    async fn replace_file(&self, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        tokio::fs::write(&tmp_path, contents).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for JsonSettingsStore {
    async fn load(&self) -> SettingsDocument {
        let map = match self.read_object().await {
            Ok(Some(map)) => map,
            Ok(None) => return SettingsDocument::default(),
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Failed to read settings file");
                return SettingsDocument::default();
            }
        };

        match SettingsDocument::from_value(Value::Object(map)) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Error loading settings");
                SettingsDocument::default()
            }
        }
    }

    async fn save(&self, updates: SettingsPatch) -> Result<(), DomainError> {
        let mut current = self
            .read_object()
            .await
            .map_err(|e| {
                DomainError::SettingsPersistence(format!("{}: {}", self.path.display(), e))
            })?
            .unwrap_or_default();
        updates.merge_into(&mut current);

        let contents = Self::encode(&current)
            .map_err(|e| DomainError::SettingsPersistence(e.to_string()))?;

        self.replace_file(&contents).await.map_err(|e| {
            DomainError::SettingsPersistence(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = ?self.path, "Settings saved");
        Ok(())
    }
}
