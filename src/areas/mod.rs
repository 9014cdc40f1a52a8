pub mod database;
pub mod refs;
pub mod repository;
