use std::fmt;

use chrono::NaiveDate;

/// A calendar date, rendered as `YYYY-MM-DD`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Returns `None` for out-of-range dates.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }
}

impl From<NaiveDate> for Date {
    fn from(d: NaiveDate) -> Self {
        Date(d)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.format("%Y-%m-%d").to_string())
    }
}

#[test]
fn test_date_from_chrono() {
    let date = Date::from(NaiveDate::from_ymd_opt(2020, 5, 5).unwrap());
    assert_eq!(date.to_string(), "2020-05-05");
    assert_eq!(Date::from_ymd_opt(2020, 5, 5), Some(date));
    assert_eq!(Date::from_ymd_opt(2020, 2, 30), None);
}
