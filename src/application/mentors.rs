use crate::domain::entities::mentor::Mentor;
use crate::domain::error::DomainError;
use crate::domain::ports::kv_store::KvStore;
use crate::domain::values::license::SystemId;
use std::sync::Arc;

fn mentors_key(system_id: &SystemId) -> String {
    format!("ficus_mentors_{system_id}")
}

/// Mentor notes live as one JSON array per system ID, newest first.
pub struct MentorUseCase {
    store: Arc<dyn KvStore>,
}

impl MentorUseCase {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn list(&self, system_id: &SystemId) -> Result<Vec<Mentor>, DomainError> {
        let key = mentors_key(system_id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(mentors) => Ok(mentors),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "malformed mentor list, starting empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn add(&self, system_id: &SystemId, name: &str, lesson: &str) -> Result<Mentor, DomainError> {
        let (name, lesson) = (name.trim(), lesson.trim());
        if name.is_empty() || lesson.is_empty() {
            return Err(DomainError::InvalidInput(
                "mentor name and lesson are both required".into(),
            ));
        }
        let mentor = Mentor::new(name.to_string(), lesson.to_string());
        let mut mentors = self.list(system_id)?;
        mentors.insert(0, mentor.clone());
        self.save(system_id, &mentors)?;
        Ok(mentor)
    }

    pub fn delete(&self, system_id: &SystemId, id: &str) -> Result<(), DomainError> {
        let mut mentors = self.list(system_id)?;
        let before = mentors.len();
        mentors.retain(|m| m.id != id);
        if mentors.len() == before {
            return Err(DomainError::NotFound(format!("Mentor not found: {id}")));
        }
        self.save(system_id, &mentors)
    }

    fn save(&self, system_id: &SystemId, mentors: &[Mentor]) -> Result<(), DomainError> {
        self.store
            .set(&mentors_key(system_id), &serde_json::to_string(mentors)?)
    }
}
