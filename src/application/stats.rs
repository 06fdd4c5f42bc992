use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::trade_stats::TradeStats;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

pub struct StatsUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl StatsUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    pub fn stats<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Result<TradeStats, DomainError> {
        let trades = self.repo.list_trades(&TradeFilter::default())?;
        Ok(TradeStats::compute(&trades, now, tz))
    }
}
