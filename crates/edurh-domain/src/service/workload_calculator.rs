//! Workload capacity calculation
//!
//! Converts a teacher's contracted weekly hours (regime, "RT") into the
//! maximum number of teaching periods and compares it with the periods
//! assigned through linked subjects or curricula.
//!
//! Nothing here fails: missing or malformed input degrades to zero periods,
//! zero capacity and "not over capacity".

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::lenient::{integer_from_value, lenient_integer, lenient_seq};
use crate::model::AssignedUnit;

/// Known regimes and their period capacity
const REGIME_TABLE: [(i64, u32); 3] = [(20, 16), (30, 24), (40, 32)];

/// Keys that carry a period count in backend payloads, in lookup order
const PERIOD_KEYS: [&str; 3] = ["periods", "cargaHoraria", "totalPeriodos"];

/// Anything that may contribute periods to a teacher's workload
pub trait PeriodCount {
    /// `None` when the value is not a well-formed assignment record and
    /// must be skipped; `Some(0)` for a record without a usable count.
    fn period_count(&self) -> Option<u32>;
}

impl PeriodCount for AssignedUnit {
    fn period_count(&self) -> Option<u32> {
        Some(self.periods.unwrap_or(0))
    }
}

impl PeriodCount for Value {
    fn period_count(&self) -> Option<u32> {
        let record = self.as_object()?;
        let periods = PERIOD_KEYS
            .iter()
            .filter_map(|key| record.get(*key))
            .find_map(integer_from_value)
            .map(clamp_periods)
            .unwrap_or(0);
        Some(periods)
    }
}

impl<T: PeriodCount> PeriodCount for Option<T> {
    fn period_count(&self) -> Option<u32> {
        self.as_ref().and_then(PeriodCount::period_count)
    }
}

impl<T: PeriodCount + ?Sized> PeriodCount for &T {
    fn period_count(&self) -> Option<u32> {
        (**self).period_count()
    }
}

/// Input of a single workload evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "U: serde::de::DeserializeOwned"))]
pub struct TeacherWorkloadInput<U = Value> {
    #[serde(alias = "regimeHours", default, deserialize_with = "lenient_integer")]
    pub regime_hours: Option<i64>,
    #[serde(
        alias = "assignedUnits",
        default = "Vec::new",
        deserialize_with = "lenient_seq"
    )]
    pub assigned_units: Vec<U>,
}

impl<U> TeacherWorkloadInput<U> {
    pub fn new(regime_hours: Option<i64>, assigned_units: Vec<U>) -> Self {
        Self {
            regime_hours,
            assigned_units,
        }
    }
}

/// Outcome of a workload evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadResult {
    pub total_assigned_periods: u32,
    pub max_allowed_periods: u32,
    pub is_over_capacity: bool,
}

impl WorkloadResult {
    /// Periods still available under the regime
    pub fn remaining_periods(&self) -> u32 {
        self.max_allowed_periods
            .saturating_sub(self.total_assigned_periods)
    }

    /// Periods assigned beyond the regime, when over capacity
    pub fn excess_periods(&self) -> Option<u32> {
        self.is_over_capacity
            .then(|| {
                self.total_assigned_periods
                    .saturating_sub(self.max_allowed_periods)
            })
    }

    /// Assigned / allowed in percent, `None` without capacity
    pub fn load_ratio_percent(&self) -> Option<f64> {
        (self.max_allowed_periods > 0).then(|| {
            self.total_assigned_periods as f64 / self.max_allowed_periods as f64 * 100.0
        })
    }
}

/// Maximum teaching periods allowed for a contracted weekly-hour regime
///
/// 20, 30 and 40 hours map to 16, 24 and 32 periods. Other positive regimes
/// get `round(hours * 0.8)`; absent or non-positive regimes get 0.
pub fn max_allowed_periods(regime_hours: Option<i64>) -> u32 {
    let hours = match regime_hours {
        Some(h) if h > 0 => h,
        _ => return 0,
    };

    if let Some(&(_, periods)) = REGIME_TABLE.iter().find(|(h, _)| *h == hours) {
        return periods;
    }

    // round(hours * 4 / 5), half up, without going through floats
    let periods = hours.saturating_mul(8).saturating_add(5) / 10;
    clamp_periods(periods)
}

/// Sum of the period counts of every well-formed unit
///
/// Pass an empty slice for an absent sequence.
pub fn total_assigned_periods<T: PeriodCount>(assigned_units: &[T]) -> u32 {
    assigned_units
        .iter()
        .filter_map(PeriodCount::period_count)
        .fold(0u32, u32::saturating_add)
}

/// Evaluate a teacher's workload against the regime capacity
pub fn evaluate<U: PeriodCount>(input: &TeacherWorkloadInput<U>) -> WorkloadResult {
    evaluate_units(input.regime_hours, &input.assigned_units)
}

/// Same as [`evaluate`] for callers holding the parts separately
pub fn evaluate_units<U: PeriodCount>(regime_hours: Option<i64>, units: &[U]) -> WorkloadResult {
    let total_assigned_periods = total_assigned_periods(units);
    let max_allowed_periods = max_allowed_periods(regime_hours);
    WorkloadResult {
        total_assigned_periods,
        max_allowed_periods,
        is_over_capacity: total_assigned_periods > max_allowed_periods,
    }
}

fn clamp_periods(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
