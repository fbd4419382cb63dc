//! Report rows produced by the backend report endpoints
//!
//! The backend computes these; the client only decodes, aggregates and
//! exports them. Field names follow the backend JSON keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{lenient_integer, lenient_string, lenient_strings};

/// Available report kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Workload per teacher ("carga horária")
    Ch,
    /// Teachers per curriculum
    Matriz,
    /// Curriculum / section / subject breakdown
    MatrizDetalhado,
    /// Periods per teacher and shift
    Distribuicao,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Ch,
        ReportKind::Matriz,
        ReportKind::MatrizDetalhado,
        ReportKind::Distribuicao,
    ];

    /// Default export file stem
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::Ch => "relatorio_carga_horaria",
            ReportKind::Matriz => "relatorio_professores_por_matriz",
            ReportKind::MatrizDetalhado => "relatorio_matriz_turma_disciplina",
            ReportKind::Distribuicao => "relatorio_distribuicao_ch_turno",
        }
    }

    /// Backend endpoint path serving this report
    pub fn endpoint(&self) -> &'static str {
        match self {
            ReportKind::Ch => "/professores/relatorio/ch",
            ReportKind::Matriz => "/professores/relatorio/matriz",
            ReportKind::MatrizDetalhado => "/professores/relatorio/matriz-detalhado",
            ReportKind::Distribuicao => "/professores/relatorio/distribuicao-ch-turno",
        }
    }

    /// Human-readable title (also used as the worksheet name)
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Ch => "Carga horária",
            ReportKind::Matriz => "Professores por matriz",
            ReportKind::MatrizDetalhado => "Matriz-turma-disciplina",
            ReportKind::Distribuicao => "Distribuição por turno",
        }
    }

    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            ReportKind::Ch => &[
                "Professor",
                "CH (horas RT)",
                "Total de períodos usados",
                "Preparação pra aula (períodos)",
                "Total de CH em períodos",
            ],
            ReportKind::Matriz => &["Matriz", "Professores"],
            ReportKind::MatrizDetalhado => &[
                "Matriz",
                "Turno",
                "Turma",
                "Disciplina",
                "Professores",
                "CH (períodos)",
            ],
            ReportKind::Distribuicao => &[
                "Professor",
                "Período/Turno",
                "Total de períodos usados",
                "Limite pelo RT (períodos)",
                "Períodos livres (globais)",
                "Disciplinas/Turmas",
            ],
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ch" => Ok(ReportKind::Ch),
            "matriz" | "matrizprof" => Ok(ReportKind::Matriz),
            "matriz-detalhado" | "matrizdet" => Ok(ReportKind::MatrizDetalhado),
            "distribuicao" | "dist" => Ok(ReportKind::Distribuicao),
            other => Err(format!(
                "unknown report '{}' (expected ch, matriz, matriz-detalhado or distribuicao)",
                other
            )),
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportKind::Ch => "ch",
            ReportKind::Matriz => "matriz",
            ReportKind::MatrizDetalhado => "matriz-detalhado",
            ReportKind::Distribuicao => "distribuicao",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChRow {
    #[serde(rename = "professor", default, deserialize_with = "lenient_string")]
    pub teacher: Option<String>,
    #[serde(rename = "cargaHorariaHoras", default, deserialize_with = "lenient_integer")]
    pub hours: Option<i64>,
    #[serde(rename = "totalPeriodos", default, deserialize_with = "lenient_integer")]
    pub total_periods: Option<i64>,
    #[serde(rename = "preparacaoPeriodos", default, deserialize_with = "lenient_integer")]
    pub preparation_periods: Option<i64>,
    #[serde(rename = "periodosParaAulas", default, deserialize_with = "lenient_integer")]
    pub teaching_periods: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrizRow {
    #[serde(rename = "matriz", default, deserialize_with = "lenient_string")]
    pub curriculum: Option<String>,
    #[serde(rename = "professores", default, deserialize_with = "lenient_strings")]
    pub teachers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrizDetailRow {
    #[serde(rename = "matrizTipo", default, deserialize_with = "lenient_string")]
    pub curriculum: Option<String>,
    #[serde(rename = "turno", default, deserialize_with = "lenient_string")]
    pub shift: Option<String>,
    #[serde(rename = "turma", default, deserialize_with = "lenient_string")]
    pub section: Option<String>,
    #[serde(rename = "disciplina", default, deserialize_with = "lenient_string")]
    pub subject: Option<String>,
    #[serde(rename = "professores", default, deserialize_with = "lenient_strings")]
    pub teachers: Vec<String>,
    #[serde(rename = "cargaHoraria", default, deserialize_with = "lenient_integer")]
    pub periods: Option<i64>,
}

/// One row per teacher and shift
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionRow {
    #[serde(rename = "professor", default, deserialize_with = "lenient_string")]
    pub teacher: Option<String>,
    #[serde(rename = "periodo", default, deserialize_with = "lenient_string")]
    pub shift: Option<String>,
    #[serde(rename = "totalPeriodos", default, deserialize_with = "lenient_integer")]
    pub total_periods: Option<i64>,
    /// Summed workload of the linked subjects, as the backend reports it
    #[serde(rename = "totalCH", default, deserialize_with = "lenient_integer")]
    pub total_hours: Option<i64>,
    #[serde(rename = "maxPeriodos", default, deserialize_with = "lenient_integer")]
    pub max_periods: Option<i64>,
    #[serde(rename = "periodosLivresTotal", default, deserialize_with = "lenient_integer")]
    pub free_periods: Option<i64>,
    #[serde(rename = "disciplinasTurmas", default, deserialize_with = "lenient_strings")]
    pub subjects_sections: Vec<String>,
}

impl DistributionRow {
    /// Periods assigned in this shift: `totalPeriodos`, else `totalCH`
    pub fn assigned_periods(&self) -> Option<i64> {
        self.total_periods.or(self.total_hours)
    }
}

/// Decoded rows of one report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportRows {
    Ch(Vec<ChRow>),
    Matriz(Vec<MatrizRow>),
    MatrizDetalhado(Vec<MatrizDetailRow>),
    Distribuicao(Vec<DistributionRow>),
}

impl ReportRows {
    /// Decode report rows of `kind` from raw array elements
    ///
    /// Elements that are not JSON objects are skipped.
    pub fn from_values(kind: ReportKind, values: Vec<Value>) -> serde_json::Result<Self> {
        let objects = values.into_iter().filter(Value::is_object);
        Ok(match kind {
            ReportKind::Ch => ReportRows::Ch(decode_all(objects)?),
            ReportKind::Matriz => ReportRows::Matriz(decode_all(objects)?),
            ReportKind::MatrizDetalhado => ReportRows::MatrizDetalhado(decode_all(objects)?),
            ReportKind::Distribuicao => ReportRows::Distribuicao(decode_all(objects)?),
        })
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            ReportRows::Ch(_) => ReportKind::Ch,
            ReportRows::Matriz(_) => ReportKind::Matriz,
            ReportRows::MatrizDetalhado(_) => ReportKind::MatrizDetalhado,
            ReportRows::Distribuicao(_) => ReportKind::Distribuicao,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReportRows::Ch(rows) => rows.len(),
            ReportRows::Matriz(rows) => rows.len(),
            ReportRows::MatrizDetalhado(rows) => rows.len(),
            ReportRows::Distribuicao(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header row followed by one string record per row
    ///
    /// Absent values render as empty cells, lists are joined with ", ".
    pub fn to_records(&self) -> Vec<Vec<String>> {
        let header = self
            .kind()
            .headers()
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();
        let mut records = vec![header];

        match self {
            ReportRows::Ch(rows) => records.extend(rows.iter().map(|r| {
                vec![
                    text(&r.teacher),
                    number(r.hours),
                    number(r.total_periods),
                    number(r.preparation_periods),
                    number(r.teaching_periods),
                ]
            })),
            ReportRows::Matriz(rows) => records.extend(
                rows.iter()
                    .map(|r| vec![text(&r.curriculum), r.teachers.join(", ")]),
            ),
            ReportRows::MatrizDetalhado(rows) => records.extend(rows.iter().map(|r| {
                vec![
                    text(&r.curriculum),
                    text(&r.shift),
                    text(&r.section),
                    text(&r.subject),
                    r.teachers.join(", "),
                    number(r.periods),
                ]
            })),
            ReportRows::Distribuicao(rows) => records.extend(rows.iter().map(|r| {
                vec![
                    text(&r.teacher),
                    text(&r.shift),
                    number(r.assigned_periods()),
                    number(r.max_periods),
                    number(r.free_periods),
                    r.subjects_sections.join(", "),
                ]
            })),
        }

        records
    }
}

fn decode_all<T, I>(values: I) -> serde_json::Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
    I: Iterator<Item = Value>,
{
    values.map(serde_json::from_value).collect()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_kind_round_trip_names() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
            assert!(!kind.headers().is_empty());
        }
        assert_eq!("dist".parse::<ReportKind>().unwrap(), ReportKind::Distribuicao);
        assert!("turmas".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_distribution_rows_skip_non_objects() {
        let values = vec![
            json!({
                "professor": "Ana",
                "periodo": "MANHA",
                "totalPeriodos": 12,
                "disciplinasTurmas": ["Matemática (6º ano)", "Física (7º ano)"]
            }),
            Value::Null,
            json!("lixo"),
        ];
        let rows = ReportRows::from_values(ReportKind::Distribuicao, values).unwrap();
        assert_eq!(rows.len(), 1);

        let records = rows.to_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0][0], "Professor");
        assert_eq!(
            records[1],
            vec![
                "Ana".to_string(),
                "MANHA".to_string(),
                "12".to_string(),
                String::new(),
                String::new(),
                "Matemática (6º ano), Física (7º ano)".to_string(),
            ]
        );
    }

    #[test]
    fn test_distribution_rows_in_backend_shape() {
        let values = vec![json!({
            "professor": "Ana",
            "periodo": "MANHA",
            "totalCH": 20,
            "preparacaoPeriodos": 16,
            "cargaParaAulas": 4,
            "periodos": 3,
            "disciplinasTurmas": ["Matemática (6º ano)"]
        })];
        let rows = ReportRows::from_values(ReportKind::Distribuicao, values).unwrap();
        let ReportRows::Distribuicao(decoded) = &rows else {
            panic!("expected distribution rows");
        };
        assert_eq!(decoded[0].total_periods, None);
        assert_eq!(decoded[0].assigned_periods(), Some(20));
        assert_eq!(rows.to_records()[1][2], "20");

        let both = DistributionRow {
            total_periods: Some(12),
            total_hours: Some(20),
            ..Default::default()
        };
        assert_eq!(both.assigned_periods(), Some(12));
    }

    #[test]
    fn test_matriz_rows_null_teachers() {
        let rows = ReportRows::from_values(
            ReportKind::Matriz,
            vec![json!({"matriz": "EJA - Multi", "professores": null})],
        )
        .unwrap();
        assert_eq!(rows.to_records()[1], vec!["EJA - Multi".to_string(), String::new()]);
    }

    #[test]
    fn test_empty_rows() {
        let rows = ReportRows::from_values(ReportKind::Ch, vec![Value::Null]).unwrap();
        assert!(rows.is_empty());
        assert_eq!(rows.kind(), ReportKind::Ch);
        assert_eq!(rows.to_records().len(), 1);
    }
}
