pub mod coach;
pub mod sqlite;
