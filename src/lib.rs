pub mod cli;
pub mod core;
pub mod domain;
pub mod error;
pub mod infra;
