use crate::domain::entities::diary_entry::DiaryEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::diary_repository::DiaryRepository;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

pub struct SqliteDiaryRepo {
    conn: Mutex<Connection>,
}

impl SqliteDiaryRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_entry(row: &rusqlite::Row) -> Result<DiaryEntry, rusqlite::Error> {
        let created_str: String = row.get(2)?;
        Ok(DiaryEntry {
            id: row.get(0)?,
            text: row.get(1)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

impl DiaryRepository for SqliteDiaryRepo {
    fn add_entry(&self, entry: &DiaryEntry) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO diary_entries (id, text, created_at) VALUES (?1, ?2, ?3)",
            params![entry.id, entry.text, entry.created_at.to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add diary entry: {e}")))?;
        Ok(())
    }

    fn list_entries(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        // rowid breaks ties between entries written within the same instant
        let mut stmt = conn
            .prepare("SELECT id, text, created_at FROM diary_entries ORDER BY created_at DESC, rowid DESC LIMIT ?1")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let entries = stmt
            .query_map(params![limit], Self::row_to_entry)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(entries)
    }
}
