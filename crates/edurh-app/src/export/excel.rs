//! Excel export of report rows

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use edurh_domain::model::ReportRows;
use edurh_types::{Error, Result};

/// Export report rows to an Excel workbook with a single sheet
pub fn export_report_xlsx(rows: &ReportRows, output_path: &Path) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::EmptyReport(rows.kind().to_string()));
    }

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_report_sheet(sheet, rows)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    log::info!(
        "Exported {} rows of report '{}' to {}",
        rows.len(),
        rows.kind(),
        output_path.display()
    );
    Ok(())
}

fn write_report_sheet(sheet: &mut Worksheet, rows: &ReportRows) -> Result<()> {
    sheet
        .set_name(rows.kind().title())
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let records = rows.to_records();

    for (row_idx, record) in records.iter().enumerate() {
        let row = row_idx as u32;
        for (col_idx, cell) in record.iter().enumerate() {
            let col = col_idx as u16;
            if row_idx == 0 {
                sheet
                    .write_string_with_format(row, col, cell, &header_format)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            } else if let Ok(number) = cell.parse::<i64>() {
                sheet
                    .write_number(row, col, number as f64)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            } else {
                sheet
                    .write_string(row, col, cell)
                    .map_err(|e| Error::Excel(e.to_string()))?;
            }
        }
    }

    for col in 0..rows.kind().headers().len() {
        sheet
            .set_column_width(col as u16, 24)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edurh_domain::model::ChRow;

    #[test]
    fn test_empty_report_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_report_xlsx(&ReportRows::Ch(vec![]), &dir.path().join("ch.xlsx"))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyReport(_)));
    }

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ch.xlsx");
        let rows = ReportRows::Ch(vec![ChRow {
            teacher: Some("Ana".to_string()),
            hours: Some(40),
            ..Default::default()
        }]);
        export_report_xlsx(&rows, &path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
