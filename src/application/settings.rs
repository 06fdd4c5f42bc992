use crate::domain::error::DomainError;
use crate::domain::ports::kv_store::KvStore;
use crate::domain::values::settings::{AppSettings, SettingsUpdate};
use std::sync::Arc;

pub const SETTINGS_KEY: &str = "sentinel_settings";

pub struct SettingsUseCase {
    store: Arc<dyn KvStore>,
}

impl SettingsUseCase {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Stored settings, or the defaults when absent or unreadable.
    pub fn load(&self) -> AppSettings {
        let raw = match self.store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AppSettings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read settings, using defaults");
                return AppSettings::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "malformed settings, using defaults");
            AppSettings::default()
        })
    }

    pub fn update(&self, update: SettingsUpdate) -> Result<AppSettings, DomainError> {
        let settings = self.load().apply(update);
        self.store
            .set(SETTINGS_KEY, &serde_json::to_string(&settings)?)?;
        Ok(settings)
    }
}
