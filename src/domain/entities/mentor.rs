use serde::{Deserialize, Serialize};

/// A lesson learned from a mentor, kept per system ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub lesson: String,
}

impl Mentor {
    pub fn new(name: String, lesson: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            lesson,
        }
    }
}
