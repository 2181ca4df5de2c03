use crate::calendar::WorkCalendar;
use chrono::{Duration, NaiveDate};
use tracing::debug;

/// Nominal productive hours in one working day.
pub const DAILY_CAPACITY_HOURS: f64 = 8.0;

/// Completion date and productive-day count for one unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleResult {
    pub end_date: NaiveDate,
    pub working_days: u32,
}

/// Advance day by day from `start_date` until `required_hours` of capacity
/// has been consumed, skipping days the calendar marks unavailable. Each
/// available day contributes a fixed 8 hours; the remainder may go negative
/// on the final day. `required_hours <= 0` returns the start date unchanged
/// with zero working days.
pub fn advance(start_date: NaiveDate, required_hours: f64, calendar: &WorkCalendar) -> ScheduleResult {
    let mut end_date = start_date;
    let mut remaining = required_hours;
    let mut working_days = 0u32;

    while remaining > 0.0 {
        end_date += Duration::days(1);
        if calendar.is_available(end_date) {
            working_days += 1;
            remaining -= DAILY_CAPACITY_HOURS;
        }
    }

    debug!(%start_date, required_hours, %end_date, working_days, "advanced work unit");
    ScheduleResult {
        end_date,
        working_days,
    }
}
