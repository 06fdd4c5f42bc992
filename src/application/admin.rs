use crate::domain::error::DomainError;
use crate::domain::values::language::Language;
use crate::domain::values::license::{self, SystemId, DEFAULT_SALT};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

const MIN_SYSTEM_ID_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    Missing,
    TooShort,
    InvalidCharacters,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Missing => write!(f, "no system ID found in the message"),
            ExtractError::TooShort => write!(f, "system ID is too short (at least 2 characters)"),
            ExtractError::InvalidCharacters => {
                write!(f, "system ID may only contain A-Z, 0-9, '-' and '_'")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedLicense {
    pub system_id: SystemId,
    pub license_key: String,
    pub response: String,
}

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Tolerates chat markup such as `*ID:* PC-01`.
    PATTERN.get_or_init(|| Regex::new(r"(?i)ID:\**\s*([^\s*]+)").expect("valid regex"))
}

/// Pulls a system ID out of a message pasted from a chat app.
///
/// An `ID: <value>` marker wins; otherwise the first word is used when it is
/// longer than one character.
pub fn extract_system_id(message: &str) -> Result<SystemId, ExtractError> {
    let candidate = match id_pattern().captures(message).and_then(|c| c.get(1)) {
        Some(m) => m.as_str().to_string(),
        None => message
            .split_whitespace()
            .next()
            .filter(|w| w.chars().count() > 1)
            .map(String::from)
            .unwrap_or_default(),
    };

    let cleaned: String = candidate
        .chars()
        .filter(|c| !matches!(c, '*' | '🆔' | '🔑'))
        .collect();
    let sid = SystemId::parse(&cleaned).ok_or(ExtractError::Missing)?;
    if sid.len() < MIN_SYSTEM_ID_LEN {
        return Err(ExtractError::TooShort);
    }
    if !sid
        .as_str()
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ExtractError::InvalidCharacters);
    }
    Ok(sid)
}

/// PIN-gated key issuing. Without a configured PIN the admin side is disabled.
pub struct AdminUseCase {
    pin: Option<String>,
}

impl AdminUseCase {
    pub fn new(pin: Option<String>) -> Self {
        Self {
            pin: pin.filter(|p| !p.is_empty()),
        }
    }

    pub fn authenticate(&self, pin: &str) -> Result<(), DomainError> {
        match &self.pin {
            None => Err(DomainError::Unauthorized(
                "admin mode is disabled (set FICUS_ADMIN_PIN)".into(),
            )),
            Some(expected) if expected == pin => Ok(()),
            Some(_) => {
                tracing::warn!("admin PIN rejected");
                Err(DomainError::Unauthorized("wrong admin PIN".into()))
            }
        }
    }

    pub fn issue(
        &self,
        pin: &str,
        message: &str,
        language: Language,
    ) -> Result<IssuedLicense, DomainError> {
        self.authenticate(pin)?;
        let system_id =
            extract_system_id(message).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        let license_key = license::derive_key(system_id.as_str(), DEFAULT_SALT);
        let response = (language.translations().response_template)(system_id.as_str(), &license_key);
        tracing::info!(system_id = %system_id, "license issued");
        Ok(IssuedLicense {
            system_id,
            license_key,
            response,
        })
    }
}
