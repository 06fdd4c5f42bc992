pub mod diary_entry;
pub mod mentor;
pub mod trade;
