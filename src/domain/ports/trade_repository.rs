use crate::domain::entities::trade::TradeEntry;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub limit: Option<usize>,
    /// `Some(true)` for closed trades only, `Some(false)` for open ones.
    pub closed: Option<bool>,
}

pub trait TradeRepository: Send + Sync {
    fn add_trade(&self, trade: &TradeEntry) -> Result<(), DomainError>;
    /// Persists the exit fields of a trade that was closed in memory.
    fn update_trade(&self, trade: &TradeEntry) -> Result<(), DomainError>;
    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<TradeEntry>, DomainError>;
    fn get_trade(&self, id: &str) -> Result<Option<TradeEntry>, DomainError>;
    fn delete_trade(&self, id: &str) -> Result<(), DomainError>;
}
