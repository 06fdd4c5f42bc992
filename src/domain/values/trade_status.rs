use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Profit,
    Loss,
}

impl TradeStatus {
    /// Classification applied when a trade is closed. Break-even counts as a loss.
    pub fn from_close(entry_price: f64, exit_price: f64) -> Self {
        if exit_price > entry_price {
            TradeStatus::Profit
        } else {
            TradeStatus::Loss
        }
    }

    pub fn is_closed(&self) -> bool {
        !matches!(self, TradeStatus::Open)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeStatus::Open => write!(f, "OPEN"),
            TradeStatus::Profit => write!(f, "PROFIT"),
            TradeStatus::Loss => write!(f, "LOSS"),
        }
    }
}

impl FromStr for TradeStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OPEN" => Ok(TradeStatus::Open),
            "PROFIT" => Ok(TradeStatus::Profit),
            "LOSS" => Ok(TradeStatus::Loss),
            _ => Err(format!("Unknown trade status: {s}")),
        }
    }
}
