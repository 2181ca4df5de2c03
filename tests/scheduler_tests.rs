use chrono::NaiveDate;
use plan_tool::{CustomHolidays, WorkCalendar, advance};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn zero_hours_returns_start_unchanged() {
    let cal = WorkCalendar::empty();
    let start = d(2025, 1, 6);
    let result = advance(start, 0.0, &cal);
    assert_eq!(result.end_date, start);
    assert_eq!(result.working_days, 0);
}

#[test]
fn negative_hours_short_circuit_like_zero() {
    let cal = WorkCalendar::empty();
    let start = d(2025, 1, 6);
    let result = advance(start, -4.0, &cal);
    assert_eq!(result.end_date, start);
    assert_eq!(result.working_days, 0);
}

#[test]
fn sixteen_hours_skip_weekend_and_holidays() {
    // 2023-01-01 is a Sunday; Jan 1 and Jan 2 are both holidays, so the two
    // 8-hour blocks land on Jan 3 and Jan 4.
    let cal = WorkCalendar::for_year(&CustomHolidays::new([d(2023, 1, 1), d(2023, 1, 2)]), 2023);
    let result = advance(d(2023, 1, 1), 16.0, &cal);
    assert_eq!(result.working_days, 2);
    assert_eq!(result.end_date, d(2023, 1, 4));
}

#[test]
fn weekend_is_skipped_without_consuming_hours() {
    let cal = WorkCalendar::empty();
    // From Friday 2025-01-03, one 8-hour block lands on Monday
    let result = advance(d(2025, 1, 3), 8.0, &cal);
    assert_eq!(result.end_date, d(2025, 1, 6));
    assert_eq!(result.working_days, 1);
}

#[test]
fn fractional_remainder_goes_negative_on_final_day() {
    let cal = WorkCalendar::empty();
    // 12 hours from Monday: 8 consumed Tuesday, the remaining 4 absorbed
    // Wednesday as a full day
    let result = advance(d(2025, 1, 6), 12.0, &cal);
    assert_eq!(result.end_date, d(2025, 1, 8));
    assert_eq!(result.working_days, 2);
}

#[test]
fn end_date_is_monotonic_in_required_hours() {
    let cal = WorkCalendar::for_year(&CustomHolidays::new([d(2025, 1, 1)]), 2025);
    let start = d(2025, 1, 1);
    let mut previous = advance(start, 0.0, &cal).end_date;
    for hours in [4.0, 8.0, 16.0, 24.0, 40.0, 41.0] {
        let end = advance(start, hours, &cal).end_date;
        assert!(end >= previous, "end date regressed at {hours} hours");
        previous = end;
    }
}
