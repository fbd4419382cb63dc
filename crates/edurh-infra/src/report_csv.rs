//! CSV export of report rows
//!
//! Format expected by spreadsheet users in pt-BR locales: `;` separator,
//! every field quoted, embedded quotes doubled, UTF-8.

use std::io::Write;
use std::path::Path;

use edurh_domain::model::ReportRows;
use edurh_types::{Error, Result};

/// Write report rows (header included) as CSV to any writer
pub fn write_report_csv<W: Write>(rows: &ReportRows, writer: W) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::EmptyReport(rows.kind().to_string()));
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in rows.to_records() {
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render report rows as a CSV string
pub fn report_to_csv_string(rows: &ReportRows) -> Result<String> {
    let mut buffer = Vec::new();
    write_report_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::InvalidArgument(e.to_string()))
}

/// Export report rows to a CSV file
pub fn export_report_csv(rows: &ReportRows, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_report_csv(rows, file)?;
    log::info!(
        "Exported {} rows of report '{}' to {}",
        rows.len(),
        rows.kind(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edurh_domain::model::{ChRow, MatrizDetailRow, MatrizRow};

    #[test]
    fn test_ch_report_csv() {
        let rows = ReportRows::Ch(vec![ChRow {
            teacher: Some("Ana".to_string()),
            hours: Some(40),
            total_periods: Some(32),
            preparation_periods: Some(16),
            teaching_periods: Some(16),
        }]);
        let csv = report_to_csv_string(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"Professor\";\"CH (horas RT)\";\"Total de períodos usados\";\"Preparação pra aula (períodos)\";\"Total de CH em períodos\""
        );
        assert_eq!(lines[1], "\"Ana\";\"40\";\"32\";\"16\";\"16\"");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = ReportRows::Matriz(vec![MatrizRow {
            curriculum: Some("Ensino \"Regular\"".to_string()),
            teachers: vec!["Ana".to_string(), "Bruno".to_string()],
        }]);
        let csv = report_to_csv_string(&rows).unwrap();
        assert!(csv.contains("\"Ensino \"\"Regular\"\"\";\"Ana, Bruno\""));
    }

    #[test]
    fn test_missing_values_are_empty_fields() {
        let rows = ReportRows::MatrizDetalhado(vec![MatrizDetailRow {
            curriculum: Some("EJA".to_string()),
            ..Default::default()
        }]);
        let csv = report_to_csv_string(&rows).unwrap();
        assert_eq!(csv.lines().nth(1), Some("\"EJA\";\"\";\"\";\"\";\"\";\"\""));
    }

    #[test]
    fn test_empty_report_is_rejected() {
        let rows = ReportRows::Distribuicao(vec![]);
        let err = report_to_csv_string(&rows).unwrap_err();
        assert!(matches!(err, Error::EmptyReport(_)));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relatorio.csv");
        let rows = ReportRows::Matriz(vec![MatrizRow {
            curriculum: Some("EJA - Multi".to_string()),
            teachers: vec![],
        }]);
        export_report_csv(&rows, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\"Matriz\";\"Professores\"\n"));
    }
}
