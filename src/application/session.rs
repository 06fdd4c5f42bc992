use crate::domain::error::DomainError;
use crate::domain::ports::kv_store::KvStore;
use crate::domain::values::language::Language;
use crate::domain::values::license::{self, SystemId};
use crate::domain::values::streak::Streak;
use chrono::{DateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const SESSION_KEY: &str = "ficus_session";
const MIN_SYSTEM_ID_LEN: usize = 2;

fn start_date_key(system_id: &SystemId) -> String {
    format!("sentinel_start_date_{system_id}")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    system_id: String,
    license_key: String,
    unlocked_at: DateTime<Utc>,
}

/// A license request ready to be pasted into a chat with the admin.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseRequest {
    pub system_id: SystemId,
    pub token: String,
    pub message: String,
    pub share_url: Option<String>,
}

/// Persisted lock state: the app is unlocked while a valid (system ID, key)
/// pair is stored.
pub struct SessionUseCase {
    store: Arc<dyn KvStore>,
}

impl SessionUseCase {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn unlock(
        &self,
        system_id: &str,
        license_key: &str,
        language: Language,
    ) -> Result<SystemId, DomainError> {
        let t = language.translations();
        let key = license_key.trim().to_uppercase();
        let sid = match SystemId::parse(system_id) {
            Some(sid) if !key.is_empty() => sid,
            _ => return Err(DomainError::InvalidInput(t.missing_credentials.into())),
        };
        if !license::validate(sid.as_str(), &key) {
            tracing::warn!(system_id = %sid, "license key rejected");
            return Err(DomainError::InvalidLicense(sid.to_string()));
        }

        let now = Utc::now();
        let session = StoredSession {
            system_id: sid.to_string(),
            license_key: key,
            unlocked_at: now,
        };
        self.store.set(SESSION_KEY, &serde_json::to_string(&session)?)?;

        let start_key = start_date_key(&sid);
        if self.store.get(&start_key)?.is_none() {
            self.store.set(&start_key, &now.to_rfc3339())?;
        }
        tracing::info!(system_id = %sid, "unlocked");
        Ok(sid)
    }

    pub fn lock(&self) -> Result<(), DomainError> {
        self.store.remove(SESSION_KEY)
    }

    /// The unlocked system ID. The stored key is re-validated on every call.
    pub fn current(&self) -> Result<SystemId, DomainError> {
        let raw = self.store.get(SESSION_KEY)?.ok_or(DomainError::Locked)?;
        let session: StoredSession = match serde_json::from_str(&raw) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "malformed session, staying locked");
                return Err(DomainError::Locked);
            }
        };
        if !license::validate(&session.system_id, &session.license_key) {
            tracing::warn!(system_id = %session.system_id, "stored license no longer valid");
            return Err(DomainError::Locked);
        }
        SystemId::parse(&session.system_id).ok_or(DomainError::Locked)
    }

    pub fn request(
        &self,
        system_id: &str,
        language: Language,
        support_number: Option<&str>,
    ) -> Result<LicenseRequest, DomainError> {
        let t = language.translations();
        let sid = SystemId::parse(system_id)
            .filter(|sid| sid.len() >= MIN_SYSTEM_ID_LEN)
            .ok_or_else(|| DomainError::InvalidInput(t.short_system_id.into()))?;

        let token = license::encode_request_token(sid.as_str());
        let message = (t.request_template)(sid.as_str(), &token);
        let share_url = support_number
            .map(|number| {
                Url::parse_with_params(&format!("https://wa.me/{number}"), &[("text", &message)])
                    .map(|u| u.to_string())
                    .map_err(|e| DomainError::InvalidInput(format!("Bad support number {number}: {e}")))
            })
            .transpose()?;

        Ok(LicenseRequest {
            system_id: sid,
            token,
            message,
            share_url,
        })
    }

    /// Days since this system was first unlocked. Starts the count when absent
    /// or unreadable.
    pub fn streak(&self, system_id: &SystemId, now: DateTime<Utc>) -> Result<Streak, DomainError> {
        let key = start_date_key(system_id);
        let stored = self
            .store
            .get(&key)?
            .and_then(|s| match DateTime::parse_from_rfc3339(&s) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "malformed start date, restarting streak");
                    None
                }
            });
        let started_at = match stored {
            Some(dt) => dt,
            None => {
                self.store.set(&key, &now.to_rfc3339())?;
                now
            }
        };
        Ok(Streak::compute(started_at, now))
    }
}
