//! Teacher ("professor") record as returned by the backend

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{lenient_integer, lenient_string, lenient_values};

/// Teacher record
///
/// Every field is optional: list endpoints routinely omit relations, and a
/// teacher without a regime is still a valid row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(default, deserialize_with = "lenient_integer")]
    pub id: Option<i64>,

    /// Display name ("nome")
    #[serde(rename = "nome", alias = "name", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// Contracted weekly hours (RT)
    #[serde(
        rename = "cargaHoraria",
        alias = "regimeHours",
        default,
        deserialize_with = "lenient_integer"
    )]
    pub regime_hours: Option<i64>,

    /// MANHA, TARDE, NOTURNO, INTEGRAL
    #[serde(rename = "turno", alias = "shift", default, deserialize_with = "lenient_string")]
    pub shift: Option<String>,

    /// Linked curricula, kept raw
    #[serde(rename = "matrizes", default, deserialize_with = "lenient_values")]
    pub curricula: Vec<Value>,

    /// Linked subjects, kept raw
    #[serde(rename = "disciplinas", default, deserialize_with = "lenient_values")]
    pub subjects: Vec<Value>,
}

impl Teacher {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Units linked to this teacher through the given relation
    pub fn units(&self, source: UnitSource) -> &[Value] {
        match source {
            UnitSource::Curricula => &self.curricula,
            UnitSource::Subjects => &self.subjects,
        }
    }
}

/// Which relation of a teacher carries its assigned periods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSource {
    /// Curricula ("matrizes"), used by the teacher detail screen
    #[default]
    Curricula,
    /// Subjects ("disciplinas")
    Subjects,
}

impl std::str::FromStr for UnitSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "curricula" | "matrizes" => Ok(UnitSource::Curricula),
            "subjects" | "disciplinas" => Ok(UnitSource::Subjects),
            other => Err(format!(
                "unknown unit source '{}' (expected curricula or subjects)",
                other
            )),
        }
    }
}

impl std::fmt::Display for UnitSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSource::Curricula => write!(f, "curricula"),
            UnitSource::Subjects => write!(f, "subjects"),
        }
    }
}
