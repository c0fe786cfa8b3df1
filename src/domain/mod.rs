pub mod models;
pub mod tables;
