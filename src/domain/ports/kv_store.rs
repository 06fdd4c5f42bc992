use crate::domain::error::DomainError;

/// Local key-value persistence for small JSON blobs (settings, mentors, session).
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
