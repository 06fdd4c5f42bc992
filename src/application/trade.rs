use crate::domain::entities::trade::{NewTrade, TradeEntry};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::discipline::PreTradeChecklist;
use crate::domain::values::language::Language;
use chrono::Utc;
use std::sync::Arc;

pub struct TradeUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl TradeUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    /// Journals a new OPEN trade once the pre-trade checklist is satisfied.
    pub fn add(
        &self,
        input: NewTrade,
        checklist: &PreTradeChecklist,
        language: Language,
    ) -> Result<TradeEntry, DomainError> {
        checklist
            .evaluate()
            .map_err(|failure| DomainError::Discipline(failure.message(language).into()))?;
        let trade = TradeEntry::new(input)?;
        self.repo.add_trade(&trade)?;
        Ok(trade)
    }

    pub fn close(
        &self,
        id: &str,
        exit_price: f64,
        emotion: String,
        image: Option<String>,
    ) -> Result<TradeEntry, DomainError> {
        let mut trade = self
            .repo
            .get_trade(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))?;
        trade.close(exit_price, emotion, image, Utc::now())?;
        self.repo.update_trade(&trade)?;
        Ok(trade)
    }

    pub fn list(
        &self,
        limit: Option<usize>,
        closed: Option<bool>,
    ) -> Result<Vec<TradeEntry>, DomainError> {
        self.repo.list_trades(&TradeFilter { limit, closed })
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete_trade(id)
    }
}
