pub mod diary_repo;
pub mod kv_store;
pub mod migrations;
pub mod trade_repo;
