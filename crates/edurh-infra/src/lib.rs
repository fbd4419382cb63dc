//! Infrastructure layer - payload loaders, CSV export, persistence

pub mod payload_loader;
pub mod persistence;
pub mod report_csv;
