use crate::core::calculator::{HoursOutcome, compute_hours_str};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_raw_punch_rows, update_stored_hours};
use crate::errors::AppResult;
use crate::utils::time::parse_time;
use chrono::NaiveTime;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecalcReport {
    pub scanned: usize,
    pub updated: usize,
    /// `(record id, offending value)` for rows whose times do not parse.
    pub malformed: Vec<(i64, String)>,
}

pub struct RecalcLogic;

impl RecalcLogic {
    /// Recompute the stored hours of every punch record from its punches.
    ///
    /// In-progress rows are measured up to their last punch. Rows with an
    /// unparseable time keep their stored value and are reported.
    pub fn recalc_all(pool: &DbPool) -> AppResult<RecalcReport> {
        let rows = load_raw_punch_rows(&pool.conn)?;
        let mut report = RecalcReport {
            scanned: rows.len(),
            ..Default::default()
        };

        for row in rows {
            let fields = [
                row.entry.as_deref(),
                row.lunch_out.as_deref(),
                row.lunch_in.as_deref(),
                row.exit.as_deref(),
            ];

            let last = fields
                .iter()
                .flatten()
                .filter_map(|s| parse_time(s))
                .max()
                .unwrap_or(NaiveTime::MIN);

            match compute_hours_str(fields[0], fields[1], fields[2], fields[3], last) {
                HoursOutcome::MalformedTime(raw) => report.malformed.push((row.id, raw)),
                HoursOutcome::Hours(h) => {
                    if (h - row.hours).abs() > 0.005 {
                        update_stored_hours(&pool.conn, row.id, h)?;
                        audit(
                            &pool.conn,
                            "recalc",
                            &format!("employee {} {}", row.employee_id, row.date),
                            &format!("{:.2}h => {:.2}h", row.hours, h),
                        )?;
                        report.updated += 1;
                    }
                }
            }
        }

        Ok(report)
    }
}
