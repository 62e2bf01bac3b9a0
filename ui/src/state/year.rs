use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// Calendar year captured when the page mounts. Not refreshed afterwards,
/// so a tab left open over new year keeps showing the old one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct YearStamp(i32);

impl YearStamp {
    pub fn now() -> Self {
        Self::capture(|| Local::now().date_naive())
    }

    /// Read `clock` once and keep its year.
    pub fn capture(clock: impl FnOnce() -> NaiveDate) -> Self {
        Self::from_date(clock())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.year())
    }

    pub fn year(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for YearStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn renders_four_digit_year() {
        let stamp = YearStamp::from_date(date(2031, 1, 1));

        assert_eq!(stamp.year(), 2031);
        assert_eq!(stamp.to_string(), "2031");
    }

    #[test]
    fn clock_is_read_once_per_capture() {
        let today = Rc::new(Cell::new(date(2031, 12, 31)));
        let reads = Rc::new(Cell::new(0));
        let clock = || {
            let (today, reads) = (today.clone(), reads.clone());
            move || {
                reads.set(reads.get() + 1);
                today.get()
            }
        };

        let mounted = YearStamp::capture(clock());
        today.set(date(2032, 1, 1));

        assert_eq!(reads.get(), 1);
        assert_eq!(mounted.to_string(), "2031");

        // a fresh mount picks up the new year
        let remounted = YearStamp::capture(clock());
        assert_eq!(reads.get(), 2);
        assert_eq!(remounted.to_string(), "2032");
        assert_eq!(mounted.to_string(), "2031");
    }

    #[test]
    fn now_matches_local_clock() {
        let before = Local::now().year();
        let stamp = YearStamp::now();
        let after = Local::now().year();

        assert!(stamp.year() == before || stamp.year() == after);
    }
}
