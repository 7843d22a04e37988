use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Geometry of the month containing "today".
///
/// Weekdays are numbered 0 = Sunday through 6 = Saturday. Everything the
/// ledger needs about the calendar comes from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendar {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub first_weekday: u32,
    pub today: u32,
    pub today_weekday: u32,
}

impl MonthCalendar {
    pub fn for_date(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        Self {
            year: date.year(),
            month: date.month(),
            days_in_month: days_in_month(date.year(), date.month()),
            first_weekday: first.weekday().num_days_from_sunday(),
            today: date.day(),
            today_weekday: date.weekday().num_days_from_sunday(),
        }
    }

    pub fn weekday_of(&self, day: u32) -> u32 {
        (self.first_weekday + day.saturating_sub(1)) % 7
    }

    pub fn is_in_month(&self, day: u32) -> bool {
        (1..=self.days_in_month).contains(&day)
    }

    pub fn is_future(&self, day: u32) -> bool {
        day > self.today
    }

    /// Leading blanks for the weekdays before day 1, then every day of the month.
    pub fn grid(&self) -> Vec<Option<u32>> {
        let mut cells = Vec::with_capacity((self.first_weekday + self.days_in_month) as usize);
        cells.extend((0..self.first_weekday).map(|_| None));
        cells.extend((1..=self.days_in_month).map(Some));
        cells
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
