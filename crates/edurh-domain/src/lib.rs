//! Domain layer for the EduRH workload toolkit
//!
//! Models decoded from backend payloads, the workload calculator, and the
//! repository traits the outer layers implement.

pub mod model;
pub mod repository;
pub mod service;
