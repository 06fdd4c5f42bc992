use crate::domain::entities::trade::TradeEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::*;
use crate::domain::values::trade_status::TradeStatus;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

const TRADE_COLUMNS: &str = "id, segment, symbol, qty, entry_price, sl_price, target_price, exit_price, status, emotion, image, created_at, closed_at";

pub struct SqliteTradeRepo {
    conn: Mutex<Connection>,
}

impl SqliteTradeRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_trade(row: &rusqlite::Row) -> Result<TradeEntry, rusqlite::Error> {
        let status_str: String = row.get(8)?;
        let created_str: String = row.get(11)?;
        let closed_str: Option<String> = row.get(12)?;

        let entry_price: f64 = row.get(4)?;
        let exit_price: Option<f64> = row.get(7)?;
        // OPEN iff no exit is recorded
        let status = status_str.parse().unwrap_or_else(|_| {
            let derived = exit_price.map_or(TradeStatus::Open, |exit| {
                TradeStatus::from_close(entry_price, exit)
            });
            tracing::warn!(status = %status_str, derived = %derived, "invalid trade status");
            derived
        });

        Ok(TradeEntry {
            id: row.get(0)?,
            segment: row.get(1)?,
            symbol: row.get(2)?,
            qty: row.get(3)?,
            entry_price,
            sl_price: row.get(5)?,
            target_price: row.get(6)?,
            exit_price,
            status,
            emotion: row.get(9)?,
            image: row.get(10)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            closed_at: closed_str.and_then(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc))
            }),
        })
    }
}

impl TradeRepository for SqliteTradeRepo {
    fn add_trade(&self, trade: &TradeEntry) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            &format!("INSERT INTO trades ({TRADE_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"),
            params![
                trade.id,
                trade.segment,
                trade.symbol,
                trade.qty,
                trade.entry_price,
                trade.sl_price,
                trade.target_price,
                trade.exit_price,
                trade.status.to_string(),
                trade.emotion,
                trade.image,
                trade.created_at.to_rfc3339(),
                trade.closed_at.map(|dt| dt.to_rfc3339()),
            ],
        ).map_err(|e| DomainError::Database(format!("Failed to add trade: {e}")))?;
        Ok(())
    }

    fn update_trade(&self, trade: &TradeEntry) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn.execute(
            "UPDATE trades SET exit_price = ?1, status = ?2, emotion = ?3, image = ?4, closed_at = ?5 WHERE id = ?6",
            params![
                trade.exit_price,
                trade.status.to_string(),
                trade.emotion,
                trade.image,
                trade.closed_at.map(|dt| dt.to_rfc3339()),
                trade.id,
            ],
        ).map_err(|e| DomainError::Database(format!("Failed to update trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {}", trade.id)));
        }
        Ok(())
    }

    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<TradeEntry>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {TRADE_COLUMNS} FROM trades WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(closed) = filter.closed {
            if closed {
                sql.push_str(" AND status != 'OPEN'");
            } else {
                sql.push_str(" AND status = 'OPEN'");
            }
        }
        sql.push_str(" ORDER BY created_at DESC, rowid DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let trades = stmt
            .query_map(params_refs.as_slice(), Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| match r {
                Ok(trade) => Some(trade),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable trade row");
                    None
                }
            })
            .collect();
        Ok(trades)
    }

    fn get_trade(&self, id: &str) -> Result<Option<TradeEntry>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {TRADE_COLUMNS} FROM trades WHERE id = ?1"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        match rows.next() {
            Some(Ok(trade)) => Ok(Some(trade)),
            Some(Err(e)) => Err(DomainError::Database(format!("Unreadable trade {id}: {e}"))),
            None => Ok(None),
        }
    }

    fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM trades WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        Ok(())
    }
}
