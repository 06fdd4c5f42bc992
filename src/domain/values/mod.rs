pub mod coach;
pub mod discipline;
pub mod language;
pub mod license;
pub mod settings;
pub mod streak;
pub mod theme;
pub mod trade_stats;
pub mod trade_status;
pub mod translations;
