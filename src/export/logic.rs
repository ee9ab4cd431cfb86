use crate::core::report::ReportLogic;
use crate::core::store::AttendanceStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::MonthExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

pub struct ExportLogic;

impl ExportLogic {
    /// Export one employee's month to `file` (absolute, or starting with `~/`).
    #[allow(clippy::too_many_arguments)]
    pub fn export_month<S: AttendanceStore>(
        store: &S,
        employee_id: i64,
        month_start: NaiveDate,
        month_end: NaiveDate,
        today: NaiveDate,
        company: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<MonthExport> {
        let path = expand_tilde(file);
        let path = path.as_path();
        ensure_writable(path, force)?;

        let report = ReportLogic::month(store, employee_id, month_start, month_end, today)?;
        let data = MonthExport::from_report(&report, company);

        if data.records.is_empty() {
            warning("No punch records in the selected month; exporting totals only.");
        }

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
            ExportFormat::Xlsx => export_xlsx(&data, path)?,
        }

        store.audit(
            "export",
            &format!("employee {employee_id}"),
            &format!(
                "{} {}..{} -> {}",
                format.as_str(),
                month_start,
                month_end,
                path.display()
            ),
        )?;

        Ok(data)
    }
}
