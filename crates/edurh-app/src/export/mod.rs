//! Report export

mod excel;

use std::path::{Path, PathBuf};

use edurh_domain::model::ReportRows;
use edurh_infra::report_csv::export_report_csv;
use edurh_types::Result;

pub use excel::export_report_xlsx;

/// Export report rows, picking the format from the file extension
///
/// `.xlsx` writes an Excel workbook, anything else CSV.
pub fn export_report(rows: &ReportRows, output_path: &Path) -> Result<()> {
    let is_excel = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xlsx"))
        .unwrap_or(false);

    if is_excel {
        export_report_xlsx(rows, output_path)
    } else {
        export_report_csv(rows, output_path)
    }
}

/// Default output path: `<report stem>.csv` next to the input payload
pub fn default_output_path(rows: &ReportRows, input_path: &Path) -> PathBuf {
    input_path.with_file_name(format!("{}.csv", rows.kind().file_stem()))
}
