//! Application service layer - config, repository wiring, export

pub mod config;
pub mod export;
pub mod repository;
