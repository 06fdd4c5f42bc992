//! Aggregate performance metrics over the trade journal.
//!
//! Everything here is a pure function of the trades, the evaluation instant
//! and, for weekday attribution, the caller's time zone. Open trades are
//! ignored by every metric.

use crate::domain::entities::trade::TradeEntry;
use crate::domain::values::trade_status::TradeStatus;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
use serde::Serialize;

/// Trading days reported by [`weekly_performance`], in order.
pub const TRADING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayPerformance {
    pub weekday: Weekday,
    pub count: usize,
    pub win_rate: f64,
}

/// Dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeStats {
    pub total_trades: usize,
    pub open_trades: usize,
    pub closed_trades: usize,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub expectancy: f64,
    pub day_return: f64,
    pub week_return: f64,
    pub weekly_performance: Vec<WeekdayPerformance>,
}

impl TradeStats {
    pub fn compute<Tz: TimeZone>(trades: &[TradeEntry], now: DateTime<Utc>, tz: &Tz) -> Self {
        let closed = trades.iter().filter(|t| t.is_closed()).count();
        Self {
            total_trades: trades.len(),
            open_trades: trades.len() - closed,
            closed_trades: closed,
            win_rate: win_rate(trades),
            avg_win: avg_win(trades),
            avg_loss: avg_loss(trades),
            expectancy: expectancy(trades),
            day_return: periodic_return(trades, Duration::hours(24), now),
            week_return: periodic_return(trades, Duration::days(7), now),
            weekly_performance: weekly_performance(trades, tz),
        }
    }
}

fn closed_trades(trades: &[TradeEntry]) -> impl Iterator<Item = &TradeEntry> {
    trades.iter().filter(|t| t.is_closed())
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

fn rate(wins: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    }
}

/// Percentage of closed trades that were profitable. 0 with no closed trades.
pub fn win_rate(trades: &[TradeEntry]) -> f64 {
    let (wins, total) = closed_trades(trades).fold((0, 0), |(w, n), t| {
        (w + usize::from(t.status == TradeStatus::Profit), n + 1)
    });
    rate(wins, total)
}

/// Mean P&L of profitable trades.
pub fn avg_win(trades: &[TradeEntry]) -> f64 {
    mean(
        trades
            .iter()
            .filter(|t| t.status == TradeStatus::Profit)
            .filter_map(TradeEntry::pnl),
    )
}

/// Mean absolute P&L of losing trades.
pub fn avg_loss(trades: &[TradeEntry]) -> f64 {
    mean(
        trades
            .iter()
            .filter(|t| t.status == TradeStatus::Loss)
            .filter_map(TradeEntry::pnl),
    )
    .abs()
}

/// `p * avg_win - (1 - p) * avg_loss` where `p` is the win rate as a fraction.
pub fn expectancy(trades: &[TradeEntry]) -> f64 {
    if closed_trades(trades).next().is_none() {
        return 0.0;
    }
    let p = win_rate(trades) / 100.0;
    p * avg_win(trades) - (1.0 - p) * avg_loss(trades)
}

/// Sum of P&L over trades closed strictly after `now - window`.
pub fn periodic_return(trades: &[TradeEntry], window: Duration, now: DateTime<Utc>) -> f64 {
    let threshold = now - window;
    closed_trades(trades)
        .filter(|t| t.closed_at.is_some_and(|at| at > threshold))
        .filter_map(TradeEntry::pnl)
        .sum()
}

/// Trade count and win rate per trading day, keyed by the local weekday of the close.
/// Weekend closes do not appear in any bucket.
pub fn weekly_performance<Tz: TimeZone>(trades: &[TradeEntry], tz: &Tz) -> Vec<WeekdayPerformance> {
    TRADING_DAYS
        .iter()
        .map(|&day| {
            let (wins, count) = closed_trades(trades)
                .filter(|t| {
                    t.closed_at
                        .is_some_and(|at| at.with_timezone(tz).weekday() == day)
                })
                .fold((0, 0), |(w, n), t| {
                    (w + usize::from(t.status == TradeStatus::Profit), n + 1)
                });
            WeekdayPerformance {
                weekday: day,
                count,
                win_rate: rate(wins, count),
            }
        })
        .collect()
}
