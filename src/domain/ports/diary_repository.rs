use crate::domain::entities::diary_entry::DiaryEntry;
use crate::domain::error::DomainError;

pub trait DiaryRepository: Send + Sync {
    fn add_entry(&self, entry: &DiaryEntry) -> Result<(), DomainError>;
    /// Newest first.
    fn list_entries(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>, DomainError>;
}
