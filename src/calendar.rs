use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Supplies the recognized holidays for a given year. The planner treats the
/// returned set as an opaque membership oracle and never computes holiday
/// rules itself.
pub trait HolidayProvider {
    fn holidays_for_year(&self, year: i32) -> HashSet<NaiveDate>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCalendar {
    holidays: HashSet<NaiveDate>,
}

impl WorkCalendar {
    /// Calendar with the provider's holidays for a single year.
    pub fn for_year(provider: &dyn HolidayProvider, year: i32) -> Self {
        Self {
            holidays: provider.holidays_for_year(year),
        }
    }

    pub fn from_holidays(holidays: HashSet<NaiveDate>) -> Self {
        Self { holidays }
    }

    /// Calendar with no holidays; weekends are still excluded.
    pub fn empty() -> Self {
        Self {
            holidays: HashSet::new(),
        }
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.holidays.insert(date);
    }

    pub fn add_holidays(&mut self, dates: &[NaiveDate]) {
        self.holidays.extend(dates);
    }

    pub fn holidays(&self) -> &HashSet<NaiveDate> {
        &self.holidays
    }

    /// Check if a date is available for scheduling. Saturdays and Sundays are
    /// never available, regardless of the holiday set.
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }
}

/// Statutory Mexican holidays (Ley Federal del Trabajo, art. 74): the fixed
/// dates plus the three long-weekend Mondays. The sexennial presidential
/// inauguration day is not modeled; use [`CustomHolidays`] for that.
#[derive(Debug, Clone, Copy, Default)]
pub struct MexicanHolidays;

impl HolidayProvider for MexicanHolidays {
    fn holidays_for_year(&self, year: i32) -> HashSet<NaiveDate> {
        let mut holidays = HashSet::new();

        // New Year's Day
        holidays.insert(NaiveDate::from_ymd_opt(year, 1, 1).unwrap());

        // Constitution Day (1st Monday in February)
        holidays.insert(nth_weekday(year, 2, Weekday::Mon, 1));

        // Benito Juarez's birthday (3rd Monday in March)
        holidays.insert(nth_weekday(year, 3, Weekday::Mon, 3));

        // Labour Day
        holidays.insert(NaiveDate::from_ymd_opt(year, 5, 1).unwrap());

        // Independence Day
        holidays.insert(NaiveDate::from_ymd_opt(year, 9, 16).unwrap());

        // Revolution Day (3rd Monday in November)
        holidays.insert(nth_weekday(year, 11, Weekday::Mon, 3));

        // Christmas
        holidays.insert(NaiveDate::from_ymd_opt(year, 12, 25).unwrap());

        holidays
    }
}

/// Helper: Find the nth occurrence of a weekday in a month
fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
    let mut date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let mut count = 0;

    while date.month() == month {
        if date.weekday() == weekday {
            count += 1;
            if count == n {
                return date;
            }
        }
        date += Duration::days(1);
    }
    panic!("Could not find {}th {} in {}/{}", n, weekday, month, year);
}

/// A fixed holiday set loaded from a JSON date array, for jurisdictions the
/// built-in provider does not cover.
#[derive(Debug, Clone, Default)]
pub struct CustomHolidays {
    dates: HashSet<NaiveDate>,
}

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid holiday file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CustomHolidays {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Load from a JSON array of ISO dates, e.g. `["2023-01-01", "2023-05-01"]`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CalendarError> {
        let contents = fs::read_to_string(path)?;
        let dates: Vec<NaiveDate> = serde_json::from_str(&contents)?;
        Ok(Self::new(dates))
    }
}

impl HolidayProvider for CustomHolidays {
    fn holidays_for_year(&self, year: i32) -> HashSet<NaiveDate> {
        self.dates
            .iter()
            .copied()
            .filter(|d| d.year() == year)
            .collect()
    }
}
