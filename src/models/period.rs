//! Report period representation
//!
//! A report period is resolved against a reference date ("today") into an
//! inclusive date window.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// Date pattern used for transaction dates and window boundaries
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A named reporting window relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportPeriod {
    /// First day of the current month through today
    MonthToDate,
    /// The whole calendar month before the current one
    PreviousMonth,
    /// January 1st of the current year through today
    YearToDate,
    /// The whole calendar year before the current one
    PreviousYear,
}

/// Inclusive `[start, end]` calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Check if a date falls within this window (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

impl ReportPeriod {
    /// All periods in menu order
    pub fn all() -> &'static [ReportPeriod] {
        &[
            Self::MonthToDate,
            Self::PreviousMonth,
            Self::YearToDate,
            Self::PreviousYear,
        ]
    }

    /// Compute the inclusive window for this period relative to `today`
    pub fn window(&self, today: NaiveDate) -> DateWindow {
        match self {
            Self::MonthToDate => DateWindow {
                start: first_of_month(today),
                end: today,
            },
            Self::PreviousMonth => {
                let end = first_of_month(today) - Duration::days(1);
                DateWindow {
                    start: first_of_month(end),
                    end,
                }
            }
            Self::YearToDate => DateWindow {
                start: first_of_year(today),
                end: today,
            },
            Self::PreviousYear => {
                let end = first_of_year(today) - Duration::days(1);
                DateWindow {
                    start: first_of_year(end),
                    end,
                }
            }
        }
    }

    /// Title shown above the report
    pub fn title(&self) -> &'static str {
        match self {
            Self::MonthToDate => "Month To Date",
            Self::PreviousMonth => "Previous Month",
            Self::YearToDate => "Year To Date",
            Self::PreviousYear => "Previous Year",
        }
    }

    /// Parse a period name
    ///
    /// Accepts the kebab-case names (`month-to-date`) and short forms
    /// (`mtd`, `pm`, `ytd`, `py`), case-insensitively.
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "month-to-date" | "mtd" => Ok(Self::MonthToDate),
            "previous-month" | "pm" => Ok(Self::PreviousMonth),
            "year-to-date" | "ytd" => Ok(Self::YearToDate),
            "previous-year" | "py" => Ok(Self::PreviousYear),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid report period: '{}'. Use month-to-date, previous-month, year-to-date or previous-year",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_to_date() {
        let window = ReportPeriod::MonthToDate.window(date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.end, date(2024, 3, 15));
        assert!(window.contains(date(2024, 3, 1)));
        assert!(!window.contains(date(2024, 2, 29)));
        assert!(!window.contains(date(2024, 3, 16)));
    }

    #[test]
    fn test_previous_month_across_year_boundary() {
        let window = ReportPeriod::PreviousMonth.window(date(2024, 1, 10));
        assert_eq!(window.start, date(2023, 12, 1));
        assert_eq!(window.end, date(2023, 12, 31));
    }

    #[test]
    fn test_previous_month_leap_february() {
        let window = ReportPeriod::PreviousMonth.window(date(2024, 3, 31));
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 2, 29));
    }

    #[test]
    fn test_year_to_date() {
        let window = ReportPeriod::YearToDate.window(date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 1, 1));
        assert_eq!(window.end, date(2024, 3, 15));
    }

    #[test]
    fn test_previous_year() {
        let window = ReportPeriod::PreviousYear.window(date(2024, 1, 1));
        assert_eq!(window.start, date(2023, 1, 1));
        assert_eq!(window.end, date(2023, 12, 31));
    }

    #[test]
    fn test_first_day_of_month_windows() {
        let today = date(2024, 3, 1);
        let mtd = ReportPeriod::MonthToDate.window(today);
        assert_eq!(mtd.start, today);
        assert_eq!(mtd.end, today);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            ReportPeriod::parse("month-to-date").unwrap(),
            ReportPeriod::MonthToDate
        );
        assert_eq!(ReportPeriod::parse("YTD").unwrap(), ReportPeriod::YearToDate);
        assert_eq!(
            ReportPeriod::parse("previous_year").unwrap(),
            ReportPeriod::PreviousYear
        );
        assert!(ReportPeriod::parse("fortnight").is_err());
    }

    #[test]
    fn test_display_window() {
        let window = ReportPeriod::PreviousMonth.window(date(2024, 1, 10));
        assert_eq!(window.to_string(), "2023-12-01 to 2023-12-31");
    }
}
