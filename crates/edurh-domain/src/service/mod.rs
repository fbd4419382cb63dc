//! Domain services

pub mod roster_checker;
pub mod workload_calculator;

pub use roster_checker::{
    check_roster, check_teacher, check_teachers, filter_by_name, generate_workload_report,
    periods_by_teacher, TeacherWorkloadRow,
};
pub use workload_calculator::{
    evaluate, evaluate_units, max_allowed_periods, total_assigned_periods, PeriodCount,
    TeacherWorkloadInput, WorkloadResult,
};
