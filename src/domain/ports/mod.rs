pub mod coach_provider;
pub mod diary_repository;
pub mod kv_store;
pub mod trade_repository;
