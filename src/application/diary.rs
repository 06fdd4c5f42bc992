use crate::domain::entities::diary_entry::DiaryEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::diary_repository::DiaryRepository;
use std::sync::Arc;

pub struct DiaryUseCase {
    repo: Arc<dyn DiaryRepository>,
}

impl DiaryUseCase {
    pub fn new(repo: Arc<dyn DiaryRepository>) -> Self {
        Self { repo }
    }

    pub fn add(&self, text: String) -> Result<DiaryEntry, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput("diary text is empty".into()));
        }
        let entry = DiaryEntry::new(text);
        self.repo.add_entry(&entry)?;
        Ok(entry)
    }

    pub fn list(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>, DomainError> {
        self.repo.list_entries(limit)
    }
}
