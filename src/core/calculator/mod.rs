//! Time Accounting Engine.
//!
//! Pure functions over values already fetched from storage:
//! day → expected load → {session hours, justified credit} → week → month.

pub mod day;
pub mod justified;
pub mod monthly;
pub mod session;
pub mod weekly;

pub use day::{classify, expected_hours};
pub use justified::credited_hours;
pub use monthly::monthly_balance;
pub use session::{HoursOutcome, LunchPolicy, compute_hours, compute_hours_str, punches_hours};
pub use weekly::{week_bounds, week_summary, weekly_overtime};
