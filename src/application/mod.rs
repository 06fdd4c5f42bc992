pub mod admin;
pub mod coach;
pub mod diary;
pub mod mentors;
pub mod session;
pub mod settings;
pub mod stats;
pub mod trade;
