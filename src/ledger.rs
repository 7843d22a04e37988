//! The habit ledger: completed days of the current month and every statistic
//! derived from them.
//!
//! All queries are recomputed from the completed-day set on each call. Nothing
//! here caches, blocks, or touches I/O.

use crate::calendar::{MonthCalendar, WEEKDAY_LABELS};
use crate::models::{WeekTrend, WeekdayStat, WeeklyPatterns};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Day-of-month numbers marked done. Every member lies in `1..=today`.
pub type CompletedDays = BTreeSet<u32>;

/// Completed days tagged with the month they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthLedger {
    pub year: i32,
    pub month: u32,
    pub days: CompletedDays,
}

impl MonthLedger {
    pub fn new(calendar: &MonthCalendar) -> Self {
        Self {
            year: calendar.year,
            month: calendar.month,
            days: CompletedDays::new(),
        }
    }

    /// Moves the ledger into the calendar's month, dropping the completed days
    /// of any earlier month. Returns true when a reset happened.
    pub fn roll_to(&mut self, calendar: &MonthCalendar) -> bool {
        if self.year == calendar.year && self.month == calendar.month {
            return false;
        }
        *self = Self::new(calendar);
        true
    }
}

/// Flips `day` in the set. Days after `today` (and day 0) cannot be marked, so
/// the set comes back unchanged for them.
pub fn toggle(day: u32, days: &CompletedDays, today: u32) -> CompletedDays {
    let mut next = days.clone();
    if day == 0 || day > today {
        return next;
    }
    if !next.remove(&day) {
        next.insert(day);
    }
    next
}

/// Run length counting back from today. Zero whenever today itself is not done.
pub fn current_streak(days: &CompletedDays, today: u32) -> u32 {
    (1..=today).rev().take_while(|day| days.contains(day)).count() as u32
}

pub fn longest_streak(days: &CompletedDays) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<u32> = None;
    for &day in days {
        run = match previous {
            Some(prev) if day == prev + 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }
    longest
}

pub fn completion_rate(days: &CompletedDays, today: u32) -> u32 {
    percent(days.len() as u32, today)
}

pub fn missed_days(days: &CompletedDays, today: u32) -> u32 {
    today.saturating_sub(days.len() as u32)
}

/// The Sunday-start week containing today, clipped to the month.
pub fn current_week_window(calendar: &MonthCalendar) -> RangeInclusive<u32> {
    let start = calendar
        .today
        .saturating_sub(calendar.today_weekday)
        .max(1);
    let end = calendar.days_in_month.min(start + 6);
    start..=end
}

pub fn current_week_completions(days: &CompletedDays, calendar: &MonthCalendar) -> u32 {
    days.range(current_week_window(calendar)).count() as u32
}

pub fn day_of_week_stats(days: &CompletedDays, calendar: &MonthCalendar) -> [WeekdayStat; 7] {
    let mut stats: [WeekdayStat; 7] = std::array::from_fn(|weekday| WeekdayStat {
        weekday: weekday as u32,
        label: WEEKDAY_LABELS[weekday],
        completed: 0,
        total: 0,
        rate: 0,
    });

    for day in 1..=calendar.today {
        let stat = &mut stats[calendar.weekday_of(day) as usize];
        stat.total += 1;
        if days.contains(&day) {
            stat.completed += 1;
        }
    }

    for stat in &mut stats {
        stat.rate = percent(stat.completed, stat.total);
    }
    stats
}

/// Elapsed days grouped into weeks; a Sunday opens a new week unless the
/// current one is still empty. The trailing partial week is kept.
pub fn weekly_trend(days: &CompletedDays, calendar: &MonthCalendar) -> Vec<WeekTrend> {
    let mut weeks = Vec::new();
    let mut completed = 0;
    let mut total = 0;

    for day in 1..=calendar.today {
        if calendar.weekday_of(day) == 0 && total > 0 {
            weeks.push(week_trend(weeks.len(), completed, total));
            completed = 0;
            total = 0;
        }
        total += 1;
        if days.contains(&day) {
            completed += 1;
        }
    }

    if total > 0 {
        weeks.push(week_trend(weeks.len(), completed, total));
    }
    weeks
}

fn week_trend(index: usize, completed: u32, total: u32) -> WeekTrend {
    WeekTrend {
        week: index as u32 + 1,
        completed,
        total,
        rate: percent(completed, total),
    }
}

/// Best and worst weekday by success rate. Ties go to the earlier weekday,
/// Sunday first. Only weekdays that have occurred can be the worst day.
pub fn weekly_patterns(stats: &[WeekdayStat; 7]) -> WeeklyPatterns {
    let best_day = stats
        .iter()
        .skip(1)
        .fold(&stats[0], |best, stat| if stat.rate > best.rate { stat } else { best })
        .clone();

    // Unlike best_day, Sunday is not a fallback seed here when no Sunday has elapsed.
    let worst_day = stats
        .iter()
        .filter(|stat| stat.total > 0)
        .fold(None::<&WeekdayStat>, |worst, stat| match worst {
            Some(current) if stat.rate >= current.rate => Some(current),
            _ => Some(stat),
        })
        .cloned();

    WeeklyPatterns {
        best_day,
        worst_day,
    }
}

pub fn average_weekly_rate(trend: &[WeekTrend]) -> u32 {
    if trend.is_empty() {
        return 0;
    }
    let sum: u32 = trend.iter().map(|week| week.rate).sum();
    round_half_up(f64::from(sum) / trend.len() as f64)
}

/// Progress toward a goal as a percentage, capped at 100.
pub fn goal_progress(count: u32, goal: u32) -> u32 {
    percent(count, goal).min(100)
}

/// `round(part / whole * 100)` in floating point with halves rounded up; zero
/// when `whole` is zero.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    round_half_up(f64::from(part) / f64::from(whole) * 100.0)
}

fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}
