//! Roster workload checks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AssignedUnit, DistributionRow, Teacher, UnitSource};
use crate::service::workload_calculator::{evaluate_units, WorkloadResult};

/// Workload of one teacher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherWorkloadRow {
    pub id: Option<i64>,
    pub name: String,
    pub shift: Option<String>,
    pub regime_hours: Option<i64>,
    pub workload: WorkloadResult,
}

impl TeacherWorkloadRow {
    fn new(teacher: &Teacher, workload: WorkloadResult) -> Self {
        Self {
            id: teacher.id,
            name: teacher.display_name().to_string(),
            shift: teacher.shift.clone(),
            regime_hours: teacher.regime_hours,
            workload,
        }
    }

    /// "18 períodos / 16 períodos (RT 20h)"
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} períodos / {} períodos",
            self.workload.total_assigned_periods, self.workload.max_allowed_periods
        );
        if let Some(hours) = self.regime_hours {
            summary.push_str(&format!(" (RT {}h)", hours));
        }
        summary
    }
}

/// Fold distribution rows into teacher name -> total periods
///
/// The distribution report has one row per teacher and shift, so a teacher
/// working mornings and evenings shows up twice. Rows without a teacher name
/// are skipped; a missing period count adds nothing.
pub fn periods_by_teacher(rows: &[DistributionRow]) -> BTreeMap<String, u32> {
    let mut totals = BTreeMap::new();
    for row in rows {
        let Some(name) = row.teacher.as_deref() else {
            continue;
        };
        let periods = row
            .assigned_periods()
            .map(|p| u32::try_from(p.max(0)).unwrap_or(u32::MAX))
            .unwrap_or(0);
        let total: &mut u32 = totals.entry(name.to_string()).or_insert(0);
        *total = total.saturating_add(periods);
    }
    totals
}

/// Evaluate every teacher against the periods assigned to them in sections
///
/// Teachers are matched by name; a teacher missing from `periods_by_name`,
/// or without a name, has nothing assigned.
pub fn check_roster(
    teachers: &[Teacher],
    periods_by_name: &BTreeMap<String, u32>,
) -> Vec<TeacherWorkloadRow> {
    teachers
        .iter()
        .map(|teacher| {
            let assigned = teacher
                .name
                .as_deref()
                .and_then(|name| periods_by_name.get(name))
                .copied()
                .unwrap_or(0);
            let workload = evaluate_units(teacher.regime_hours, &[AssignedUnit::new(assigned)]);
            if workload.is_over_capacity {
                log::debug!(
                    "{} over capacity: {} > {}",
                    teacher.display_name(),
                    workload.total_assigned_periods,
                    workload.max_allowed_periods
                );
            }
            TeacherWorkloadRow::new(teacher, workload)
        })
        .collect()
}

/// Evaluate one teacher from the units linked to the teacher record itself
pub fn check_teacher(teacher: &Teacher, source: UnitSource) -> TeacherWorkloadRow {
    let workload = evaluate_units(teacher.regime_hours, teacher.units(source));
    TeacherWorkloadRow::new(teacher, workload)
}

/// Same as [`check_teacher`] for a whole roster
pub fn check_teachers(teachers: &[Teacher], source: UnitSource) -> Vec<TeacherWorkloadRow> {
    teachers
        .iter()
        .map(|teacher| check_teacher(teacher, source))
        .collect()
}

/// Case-insensitive name search; an empty query keeps every row
pub fn filter_by_name(rows: Vec<TeacherWorkloadRow>, query: &str) -> Vec<TeacherWorkloadRow> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| row.name.to_lowercase().contains(&query))
        .collect()
}

pub fn generate_workload_report(rows: &[TeacherWorkloadRow]) -> String {
    let total = rows.len();
    let over_count = rows.iter().filter(|r| r.workload.is_over_capacity).count();
    let without_regime: Vec<&TeacherWorkloadRow> = rows
        .iter()
        .filter(|r| r.workload.max_allowed_periods == 0)
        .collect();
    let assigned_sum: u64 = rows
        .iter()
        .map(|r| r.workload.total_assigned_periods as u64)
        .sum();
    let allowed_sum: u64 = rows
        .iter()
        .map(|r| r.workload.max_allowed_periods as u64)
        .sum();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("          Relatório de Carga Horária              \n");
    report.push_str("          Workload Report                         \n");
    report.push_str("==================================================\n\n");
    report.push_str("[Resumo / Summary]\n");
    report.push_str(&format!("  Professores / Teachers:         {}\n", total));
    report.push_str(&format!("  Sem RT / Without regime:        {}\n", without_regime.len()));
    report.push_str(&format!("  Acima do limite / Over:         {}\n", over_count));
    report.push_str(&format!(
        "  Períodos / Periods:             {} / {}\n",
        assigned_sum, allowed_sum
    ));
    if total > 0 {
        let over_rate = (over_count as f64 / total as f64) * 100.0;
        report.push_str(&format!("  Taxa / Over rate:               {:.1}%\n", over_rate));
    }
    report.push('\n');

    if over_count > 0 {
        report.push_str("[Acima do limite / Over Capacity]\n");
        report.push_str("-".repeat(64).as_str());
        report.push('\n');
        report.push_str(&format!(
            "{:<6} {:<24} {:>8} {:>8} {:>8} {:>6}\n",
            "ID", "Professor", "Usados", "Limite", "Excesso", "RT"
        ));
        report.push_str(&format!(
            "{:<6} {:<24} {:>8} {:>8} {:>8} {:>6}\n",
            "", "Teacher", "Assigned", "Allowed", "Excess", "Hours"
        ));
        report.push_str("-".repeat(64).as_str());
        report.push('\n');
        for row in rows.iter().filter(|r| r.workload.is_over_capacity) {
            report.push_str(&format!(
                "{:<6} {:<24} {:>8} {:>8} {:>+8} {:>6}\n",
                row.id.map(|id| id.to_string()).unwrap_or_default(),
                truncate_str(&row.name, 23),
                row.workload.total_assigned_periods,
                row.workload.max_allowed_periods,
                row.workload.excess_periods().unwrap_or(0) as i64,
                row.regime_hours
                    .map(|h| format!("{}h", h))
                    .unwrap_or_else(|| "-".to_string()),
            ));
        }
        report.push('\n');
    } else {
        report.push_str("[Nenhum excesso / No Overloaded Teachers]\n");
        report.push_str("  Todos os professores estão dentro do limite do RT.\n");
        report.push_str("  All teachers are within their regime capacity.\n\n");
    }

    if !without_regime.is_empty() {
        report.push_str("[Sem RT cadastrado / Missing Regime]\n");
        report.push_str("-".repeat(40).as_str());
        report.push('\n');
        for row in &without_regime {
            report.push_str(&format!(
                "  {:<28} {:>4} períodos\n",
                truncate_str(&row.name, 27),
                row.workload.total_assigned_periods
            ));
        }
        report.push('\n');
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReportKind, ReportRows};
    use serde_json::json;

    fn teacher(id: i64, name: &str, regime: Option<i64>) -> Teacher {
        Teacher {
            id: Some(id),
            name: Some(name.to_string()),
            regime_hours: regime,
            shift: Some("MANHA".to_string()),
            ..Default::default()
        }
    }

    fn dist(name: Option<&str>, shift: &str, periods: Option<i64>) -> DistributionRow {
        DistributionRow {
            teacher: name.map(str::to_string),
            shift: Some(shift.to_string()),
            total_periods: periods,
            ..Default::default()
        }
    }

    #[test]
    fn test_periods_by_teacher_sums_shifts() {
        let rows = vec![
            dist(Some("Ana"), "MANHA", Some(10)),
            dist(Some("Ana"), "NOTURNO", Some(8)),
            dist(Some("Bruno"), "TARDE", None),
            dist(None, "TARDE", Some(30)),
        ];
        let totals = periods_by_teacher(&rows);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Ana"], 18);
        assert_eq!(totals["Bruno"], 0);
    }

    #[test]
    fn test_check_roster() {
        let teachers = vec![
            teacher(1, "Ana", Some(20)),
            teacher(2, "Bruno", Some(40)),
            teacher(3, "Carla", None),
        ];
        let mut totals = BTreeMap::new();
        totals.insert("Ana".to_string(), 18);
        totals.insert("Bruno".to_string(), 30);

        let rows = check_roster(&teachers, &totals);
        assert_eq!(rows.len(), 3);

        assert!(rows[0].workload.is_over_capacity);
        assert_eq!(rows[0].workload.max_allowed_periods, 16);
        assert_eq!(rows[0].summary(), "18 períodos / 16 períodos (RT 20h)");

        assert!(!rows[1].workload.is_over_capacity);
        assert_eq!(rows[1].workload.remaining_periods(), 2);

        assert_eq!(rows[2].workload.total_assigned_periods, 0);
        assert!(!rows[2].workload.is_over_capacity);
        assert_eq!(rows[2].summary(), "0 períodos / 0 períodos");
    }

    #[test]
    fn test_check_roster_from_backend_distribution() {
        let values = vec![
            json!({"professor": "Ana", "periodo": "MANHA", "totalCH": 12,
                   "preparacaoPeriodos": 16, "cargaParaAulas": 0, "periodos": 0,
                   "disciplinasTurmas": ["Matemática (6º ano)"]}),
            json!({"professor": "Ana", "periodo": "NOTURNO", "totalCH": 8,
                   "disciplinasTurmas": ["Física (EJA)"]}),
        ];
        let rows = match ReportRows::from_values(ReportKind::Distribuicao, values).unwrap() {
            ReportRows::Distribuicao(rows) => rows,
            other => panic!("unexpected rows: {:?}", other.kind()),
        };
        let totals = periods_by_teacher(&rows);
        assert_eq!(totals["Ana"], 20);

        let roster = check_roster(&[teacher(1, "Ana", Some(20))], &totals);
        assert!(roster[0].workload.is_over_capacity);
        assert_eq!(roster[0].workload.excess_periods(), Some(4));
    }

    #[test]
    fn test_nameless_teacher_gets_nothing() {
        let mut nameless = teacher(4, "", Some(20));
        nameless.name = None;
        let mut totals = BTreeMap::new();
        totals.insert(String::new(), 30);

        let rows = check_roster(&[nameless], &totals);
        assert_eq!(rows[0].workload.total_assigned_periods, 0);
        assert!(!rows[0].workload.is_over_capacity);
    }

    #[test]
    fn test_check_teacher_from_curricula() {
        let mut t = teacher(7, "Daniel", Some(30));
        t.curricula = vec![json!({"cargaHoraria": 12}), json!(null), json!({"cargaHoraria": 14})];
        t.subjects = vec![json!({"cargaHoraria": 4})];

        let row = check_teacher(&t, UnitSource::Curricula);
        assert_eq!(row.workload.total_assigned_periods, 26);
        assert_eq!(row.workload.max_allowed_periods, 24);
        assert!(row.workload.is_over_capacity);

        let row = check_teacher(&t, UnitSource::Subjects);
        assert_eq!(row.workload.total_assigned_periods, 4);
        assert!(!row.workload.is_over_capacity);
    }

    #[test]
    fn test_filter_by_name() {
        let rows = check_teachers(
            &[teacher(1, "Ana Lima", Some(20)), teacher(2, "Bruno", Some(20))],
            UnitSource::Subjects,
        );
        let filtered = filter_by_name(rows.clone(), "  lIMa ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ana Lima");
        assert_eq!(filter_by_name(rows, "").len(), 2);
    }

    #[test]
    fn test_generate_report() {
        let teachers = vec![
            teacher(1, "Ana", Some(20)),
            teacher(2, "Bruno", Some(40)),
            teacher(3, "Carla", None),
        ];
        let mut totals = BTreeMap::new();
        totals.insert("Ana".to_string(), 18);
        let rows = check_roster(&teachers, &totals);
        let report = generate_workload_report(&rows);
        assert!(report.contains("Relatório de Carga Horária"));
        assert!(report.contains("Acima do limite / Over:         1"));
        assert!(report.contains("Sem RT / Without regime:        1"));
        assert!(report.contains("Ana"));
        assert!(report.contains("+2"));
        assert!(report.contains("Carla"));
    }

    #[test]
    fn test_generate_report_without_overload() {
        let rows = check_teachers(&[teacher(1, "Ana", Some(40))], UnitSource::Curricula);
        let report = generate_workload_report(&rows);
        assert!(report.contains("No Overloaded Teachers"));
        assert!(!report.contains("Missing Regime"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Ana", 10), "Ana");
        assert_eq!(truncate_str("Maria da Conceição", 8), "Maria ..");
    }
}
