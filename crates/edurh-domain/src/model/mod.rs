//! Domain model types

pub mod assigned_unit;
pub mod lenient;
pub mod report;
pub mod session;
pub mod teacher;

pub use assigned_unit::AssignedUnit;
pub use report::{ChRow, DistributionRow, MatrizDetailRow, MatrizRow, ReportKind, ReportRows};
pub use session::Session;
pub use teacher::{Teacher, UnitSource};
