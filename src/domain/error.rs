use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid license key for system {0}")]
    InvalidLicense(String),

    #[error("Locked: unlock with a system ID and license key first")]
    Locked,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not ready to trade: {0}")]
    Discipline(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Coach error: {0}")]
    Coach(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Parse(e.to_string())
    }
}
