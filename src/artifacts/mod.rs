pub mod branch;
pub mod database;
pub mod decoder;
pub mod log;
pub mod objects;
