use crate::domain::error::DomainError;
use crate::domain::values::trade_status::TradeStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEntry {
    pub id: String,
    pub segment: String,
    pub symbol: String,
    pub qty: i64,
    pub entry_price: f64,
    pub sl_price: f64,
    pub target_price: f64,
    pub exit_price: Option<f64>,
    pub status: TradeStatus,
    pub emotion: String,
    /// Screenshot of the chart, base64 encoded or a file path.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Pre-trade fields entered before a position is taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrade {
    #[serde(default = "default_segment")]
    pub segment: String,
    pub symbol: String,
    #[serde(default = "default_qty")]
    pub qty: i64,
    pub entry_price: f64,
    #[serde(default)]
    pub sl_price: f64,
    #[serde(default)]
    pub target_price: f64,
}

fn default_segment() -> String {
    "NIFTY".to_string()
}

fn default_qty() -> i64 {
    50
}

fn require_finite(field: &str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::InvalidInput(format!(
            "{field} must be a finite number, got {value}"
        )))
    }
}

impl TradeEntry {
    pub fn new(input: NewTrade) -> Result<Self, DomainError> {
        let symbol = input.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DomainError::InvalidInput("symbol is required".into()));
        }
        if input.qty <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "qty must be positive, got {}",
                input.qty
            )));
        }
        if !(input.entry_price.is_finite() && input.entry_price > 0.0) {
            return Err(DomainError::InvalidInput(format!(
                "entry_price must be positive, got {}",
                input.entry_price
            )));
        }
        require_finite("sl_price", input.sl_price)?;
        require_finite("target_price", input.target_price)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            segment: input.segment.trim().to_uppercase(),
            symbol,
            qty: input.qty,
            entry_price: input.entry_price,
            sl_price: input.sl_price,
            target_price: input.target_price,
            exit_price: None,
            status: TradeStatus::Open,
            emotion: String::new(),
            image: None,
            created_at: Utc::now(),
            closed_at: None,
        })
    }

    /// Records the exit. A trade closes exactly once; there is no reopening.
    pub fn close(
        &mut self,
        exit_price: f64,
        emotion: String,
        image: Option<String>,
        closed_at: DateTime<Utc>,
    ) -> Result<TradeStatus, DomainError> {
        if self.is_closed() {
            return Err(DomainError::InvalidInput(format!(
                "Trade {} is already closed as {}",
                self.id, self.status
            )));
        }
        if !(exit_price.is_finite() && exit_price >= 0.0) {
            return Err(DomainError::InvalidInput(format!(
                "exit_price must be non-negative, got {exit_price}"
            )));
        }

        self.status = TradeStatus::from_close(self.entry_price, exit_price);
        self.exit_price = Some(exit_price);
        self.emotion = emotion;
        self.image = image;
        self.closed_at = Some(closed_at);
        Ok(self.status)
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Realized P&L, `(exit - entry) * qty`. `None` while the trade is open.
    pub fn pnl(&self) -> Option<f64> {
        self.exit_price
            .map(|exit| (exit - self.entry_price) * self.qty as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_trade(entry: f64) -> TradeEntry {
        TradeEntry::new(NewTrade {
            segment: "nifty".into(),
            symbol: " banknifty ".into(),
            qty: 10,
            entry_price: entry,
            sl_price: entry - 10.0,
            target_price: entry + 20.0,
        })
        .unwrap()
    }

    #[test]
    fn test_new_trade_is_open() {
        let t = new_trade(100.0);
        assert_eq!(t.status, TradeStatus::Open);
        assert_eq!(t.symbol, "BANKNIFTY");
        assert_eq!(t.segment, "NIFTY");
        assert!(t.exit_price.is_none());
        assert!(t.closed_at.is_none());
        assert!(t.pnl().is_none());
    }

    #[test]
    fn test_close_sets_exit_fields() {
        let mut t = new_trade(100.0);
        let now = Utc::now();
        let status = t.close(150.0, "calm".into(), None, now).unwrap();
        assert_eq!(status, TradeStatus::Profit);
        assert_eq!(t.exit_price, Some(150.0));
        assert_eq!(t.closed_at, Some(now));
        assert_eq!(t.emotion, "calm");
        assert_eq!(t.pnl(), Some(500.0));
    }

    #[test]
    fn test_close_twice_rejected() {
        let mut t = new_trade(100.0);
        t.close(80.0, "fear".into(), None, Utc::now()).unwrap();
        assert_eq!(t.status, TradeStatus::Loss);
        let err = t.close(200.0, "greed".into(), None, Utc::now());
        assert!(err.is_err());
        assert_eq!(t.exit_price, Some(80.0));
    }

    #[test]
    fn test_rejects_bad_input() {
        let bad = NewTrade {
            segment: "NIFTY".into(),
            symbol: "  ".into(),
            qty: 1,
            entry_price: 10.0,
            sl_price: 0.0,
            target_price: 0.0,
        };
        assert!(TradeEntry::new(bad.clone()).is_err());
        assert!(TradeEntry::new(NewTrade { symbol: "X".into(), qty: 0, ..bad.clone() }).is_err());
        assert!(TradeEntry::new(NewTrade { symbol: "X".into(), entry_price: 0.0, ..bad }).is_err());
    }

    #[test]
    fn test_rejects_non_finite_prices() {
        let base = NewTrade {
            segment: "NIFTY".into(),
            symbol: "NIFTY".into(),
            qty: 1,
            entry_price: 100.0,
            sl_price: 95.0,
            target_price: 110.0,
        };
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(TradeEntry::new(NewTrade { entry_price: bad, ..base.clone() }).is_err());
            assert!(TradeEntry::new(NewTrade { sl_price: bad, ..base.clone() }).is_err());
            assert!(TradeEntry::new(NewTrade { target_price: bad, ..base.clone() }).is_err());

            let mut t = TradeEntry::new(base.clone()).unwrap();
            assert!(t.close(bad, String::new(), None, Utc::now()).is_err());
            assert!(!t.is_closed());
            assert!(t.exit_price.is_none());
        }
    }

    #[test]
    fn test_new_trade_json_defaults() {
        let input: NewTrade =
            serde_json::from_str(r#"{"symbol": "reliance", "entry_price": 2500.0}"#).unwrap();
        assert_eq!(input.segment, "NIFTY");
        assert_eq!(input.qty, 50);
    }
}
